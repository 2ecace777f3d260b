use const_decimal::Decimal;
use num_traits::Zero;

use super::Mon;

/// A price denoted in the quote currency of the underlying market,
/// e.g in ETHUSD the spot price of one ETH in USD. Used for spot and strike prices.
///
/// # Generics:
/// - `I`: The numeric data type of `Decimal`.
/// - `D`: The constant decimal precision.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    std::hash::Hash,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::From,
    derive_more::AsRef,
)]
#[repr(transparent)]
pub struct QuoteCurrency<I, const D: u8>(Decimal<I, D>)
where
    I: Mon<D>;

impl<I, const D: u8> std::ops::Neg for QuoteCurrency<I, D>
where
    I: Mon<D>,
    Decimal<I, D>: std::ops::Neg<Output = Decimal<I, D>>,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl<I, const D: u8> QuoteCurrency<I, D>
where
    I: Mon<D>,
{
    /// Create a new instance from an `integer` and a `scale`.
    ///
    /// # Panics:
    /// if `scale` exceeds the precision `D` or the value does not fit.
    pub fn new(integer: I, scale: u8) -> Self {
        assert2::debug_assert!(scale <= D);
        Self(Decimal::try_from_scaled(integer, scale).expect("Make sure the inputs are correct."))
    }

    /// Shift the price down by `fraction`, e.g. a 30% drop for a fraction of 0.3.
    #[inline]
    #[must_use]
    pub(crate) fn shifted_down(&self, fraction: Decimal<I, D>) -> Self {
        assert2::debug_assert!(fraction <= Decimal::ONE);
        Self(self.0 * (Decimal::ONE - fraction))
    }

    /// Shift the price up by `fraction`, e.g. a 30% rally for a fraction of 0.3.
    #[inline]
    #[must_use]
    pub(crate) fn shifted_up(&self, fraction: Decimal<I, D>) -> Self {
        assert2::debug_assert!(fraction <= Decimal::ONE);
        Self(self.0 * (Decimal::ONE + fraction))
    }
}

impl<I, const D: u8> Zero for QuoteCurrency<I, D>
where
    I: Mon<D>,
{
    #[inline]
    fn zero() -> Self {
        Self(Decimal::zero())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl<I, const D: u8> std::fmt::Display for QuoteCurrency<I, D>
where
    I: Mon<D>,
{
    #[mutants::skip]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} Quote", self.0)
    }
}
