use const_decimal::Decimal;
use num_traits::Zero;

use super::{
    ConfigError,
    Mon,
};

/// The magnitude of the adverse spot price move used as stress scenario, as a fraction.
/// E.g. 0.3 sizes collateral against a 30% move against each position.
///
/// The fraction lies in `[0, 1)`, which is enforced on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::AsRef)]
pub struct BufferFraction<I, const D: u8>(Decimal<I, D>)
where
    I: Mon<D>;

impl<I, const D: u8> BufferFraction<I, D>
where
    I: Mon<D>,
{
    /// Create a new instance.
    ///
    /// # Returns:
    /// `ConfigError::InvalidBufferFraction` if the fraction is outside `[0, 1)`.
    pub fn new(fraction: Decimal<I, D>) -> Result<Self, ConfigError> {
        if fraction < Decimal::zero() || fraction >= Decimal::ONE {
            return Err(ConfigError::InvalidBufferFraction);
        }
        Ok(Self(fraction))
    }

    /// No stress at all, so buffered spot prices equal the base spot price.
    pub fn zero() -> Self {
        Self(Decimal::zero())
    }

    /// The inner fraction.
    #[inline(always)]
    pub fn fraction(&self) -> Decimal<I, D> {
        self.0
    }
}

impl<I, const D: u8> std::fmt::Display for BufferFraction<I, D>
where
    I: Mon<D>,
{
    #[mutants::skip]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_case::test_case(0, 0; "zero")]
    #[test_case::test_case(3, 1; "thirty percent")]
    #[test_case::test_case(99999, 5; "just below one")]
    fn buffer_fraction_valid(integer: i64, scale: u8) {
        let frac = Decimal::<i64, 5>::try_from_scaled(integer, scale).unwrap();
        assert_eq!(BufferFraction::new(frac).unwrap().fraction(), frac);
    }

    #[test_case::test_case(1, 0; "one")]
    #[test_case::test_case(15, 1; "above one")]
    #[test_case::test_case(-1, 2; "negative")]
    fn buffer_fraction_invalid(integer: i64, scale: u8) {
        let frac = Decimal::<i64, 5>::try_from_scaled(integer, scale).unwrap();
        assert_eq!(
            BufferFraction::new(frac),
            Err(ConfigError::InvalidBufferFraction)
        );
    }

    #[test]
    fn buffer_fraction_zero() {
        assert_eq!(BufferFraction::<i64, 5>::zero().fraction(), Decimal::zero());
    }
}
