use std::iter::Sum;

use const_decimal::Decimal;
use num_traits::Zero;

use super::{
    BaseCurrency,
    Mon,
    QuoteCurrency,
};

/// An amount denominated in the collateral currency,
/// which backs the short option positions.
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
pub struct Collateral<I, const D: u8>(Decimal<I, D>)
where
    I: Mon<D>;

impl<I, const D: u8> Collateral<I, D>
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

    /// The value of `quantity` units priced at `price_per_unit`,
    /// assuming quote and collateral currency coincide.
    #[inline]
    pub fn from_notional(quantity: BaseCurrency<I, D>, price_per_unit: QuoteCurrency<I, D>) -> Self {
        Self(*quantity.as_ref() * *price_per_unit.as_ref())
    }

    /// `true` if the amount is below zero.
    #[inline(always)]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::zero()
    }
}

impl<I, const D: u8> Zero for Collateral<I, D>
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

impl<I, const D: u8> Sum for Collateral<I, D>
where
    I: Mon<D>,
{
    fn sum<T: Iterator<Item = Self>>(iter: T) -> Self {
        let mut out = Self::zero();
        iter.for_each(|v| out += v);
        out
    }
}

impl<I, const D: u8> std::fmt::Display for Collateral<I, D>
where
    I: Mon<D>,
{
    #[mutants::skip]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} Collateral", self.0)
    }
}
