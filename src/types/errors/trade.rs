use thiserror::Error;

use crate::types::{
    PositionId,
    RebalancePhase,
};

/// The reason a `TradeExecutor` rejected a trade.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
#[allow(missing_docs, reason = "Self documenting")]
pub enum TradeError {
    #[error("The price used for the trade is stale.")]
    StalePrice,

    #[error("The market is paused.")]
    MarketPaused,

    #[error("Insufficient external funds to execute the trade.")]
    InsufficientFunds,

    #[error("The trade was rejected: {reason}")]
    Rejected { reason: String },
}

/// A trade failed during a rebalancing phase, which aborted the remainder of that phase.
/// Mutations applied before the failure are retained.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
#[error("Trade for position {position_id} failed during {phase}: {source}")]
pub struct TradeExecutionFailed {
    /// The position whose trade failed.
    pub position_id: PositionId,
    /// The phase that was aborted.
    pub phase: RebalancePhase,
    /// The error reported by the `TradeExecutor`.
    pub source: TradeError,
}
