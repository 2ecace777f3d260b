//! Computes the stressed spot price each position is collateralized against.

use crate::types::{
    BufferFraction,
    Mon,
    OptionKind,
    QuoteCurrency,
};

/// The spot price after an adverse move of `buffer_fraction` for a position of `option_kind`.
///
/// A short put loses value when the spot price falls, a short call when it rises,
/// so the price is shifted down or up respectively.
///
/// # Example:
/// ```rust
/// use collateral_rebalancer::prelude::*;
/// use const_decimal::Decimal;
///
/// let buffer = BufferFraction::new(Decimal::<i64, 5>::try_from_scaled(3, 1).unwrap()).unwrap();
/// let spot = QuoteCurrency::<i64, 5>::new(2000, 0);
/// assert_eq!(buffered_spot(OptionKind::ShortPut, spot, buffer), QuoteCurrency::new(1400, 0));
/// assert_eq!(buffered_spot(OptionKind::ShortCall, spot, buffer), QuoteCurrency::new(2600, 0));
/// ```
#[inline]
#[must_use]
pub fn buffered_spot<I, const D: u8>(
    option_kind: OptionKind,
    base_spot: QuoteCurrency<I, D>,
    buffer_fraction: BufferFraction<I, D>,
) -> QuoteCurrency<I, D>
where
    I: Mon<D>,
{
    match option_kind {
        OptionKind::ShortPut => base_spot.shifted_down(buffer_fraction.fraction()),
        OptionKind::ShortCall => base_spot.shifted_up(buffer_fraction.fraction()),
    }
}

#[cfg(test)]
mod tests {
    use const_decimal::Decimal;
    use proptest::prelude::*;

    use super::*;

    fn buffer(integer: i64, scale: u8) -> BufferFraction<i64, 5> {
        BufferFraction::new(Decimal::try_from_scaled(integer, scale).unwrap()).unwrap()
    }

    #[test]
    fn buffered_spot_short_put() {
        assert_eq!(
            buffered_spot(
                OptionKind::ShortPut,
                QuoteCurrency::new(100, 0),
                buffer(3, 1)
            ),
            QuoteCurrency::new(70, 0)
        );
    }

    #[test]
    fn buffered_spot_short_call() {
        assert_eq!(
            buffered_spot(
                OptionKind::ShortCall,
                QuoteCurrency::new(100, 0),
                buffer(3, 1)
            ),
            QuoteCurrency::new(130, 0)
        );
    }

    #[test]
    fn buffered_spot_fractional() {
        // 1234.5 * 0.875
        assert_eq!(
            buffered_spot(
                OptionKind::ShortPut,
                QuoteCurrency::new(12345, 1),
                buffer(125, 3)
            ),
            QuoteCurrency::new(10801875, 4)
        );
    }

    #[test_case::test_matrix([OptionKind::ShortCall, OptionKind::ShortPut])]
    fn buffered_spot_zero_buffer(option_kind: OptionKind) {
        let spot = QuoteCurrency::<i64, 5>::new(1850, 0);
        assert_eq!(buffered_spot(option_kind, spot, BufferFraction::zero()), spot);
    }

    proptest! {
        #[test]
        fn proptest_buffered_spot_direction(spot in 1..1_000_000_i64, frac in 1..99_i64) {
            let spot = QuoteCurrency::<i64, 5>::new(spot, 0);
            let buffer = buffer(frac, 2);
            prop_assert!(buffered_spot(OptionKind::ShortPut, spot, buffer) < spot);
            prop_assert!(buffered_spot(OptionKind::ShortCall, spot, buffer) > spot);
        }
    }
}
