use const_decimal::Decimal;
use num_traits::Zero;

use super::Mon;

/// The quantity of an option position, measured in units of the underlying,
/// e.g. the number of ETH contracts written.
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
pub struct BaseCurrency<I, const D: u8>(Decimal<I, D>)
where
    I: Mon<D>;

impl<I, const D: u8> BaseCurrency<I, D>
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
}

impl<I, const D: u8> Zero for BaseCurrency<I, D>
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

impl<I, const D: u8> std::fmt::Display for BaseCurrency<I, D>
where
    I: Mon<D>,
{
    #[mutants::skip]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} Base", self.0)
    }
}
