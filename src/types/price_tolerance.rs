use super::{
    Mon,
    QuoteCurrency,
};

/// The settlement price constraint passed along with a close trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceTolerance<I, const D: u8>
where
    I: Mon<D>,
{
    /// Accept any settlement price.
    /// Forced closes use this, as reducing risk takes priority over the price obtained.
    Unbounded,
    /// Only settle within `[min, max]`.
    Bounded {
        /// The lowest acceptable settlement price.
        min: QuoteCurrency<I, D>,
        /// The highest acceptable settlement price.
        max: QuoteCurrency<I, D>,
    },
}

impl<I, const D: u8> PriceTolerance<I, D>
where
    I: Mon<D>,
{
    /// `true` if settling at `price` satisfies the constraint.
    #[inline]
    pub fn admits(&self, price: QuoteCurrency<I, D>) -> bool {
        match self {
            Self::Unbounded => true,
            Self::Bounded { min, max } => *min <= price && price <= *max,
        }
    }
}
