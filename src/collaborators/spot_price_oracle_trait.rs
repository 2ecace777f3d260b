use crate::types::{
    Market,
    Mon,
    QuoteCurrency,
    SpotPriceUnavailable,
};

/// Provides the current spot price of a market.
pub trait SpotPriceOracle<I, const D: u8>
where
    I: Mon<D>,
{
    /// The latest spot price of `market`.
    fn current_spot(&self, market: &Market) -> Result<QuoteCurrency<I, D>, SpotPriceUnavailable>;
}
