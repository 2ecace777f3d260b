use crate::types::Market;

/// The spot price oracle could not provide a usable price.
#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
#[error("No valid spot price available for market {market}")]
pub struct SpotPriceUnavailable {
    /// The market that was queried.
    pub market: Market,
}
