use super::{
    CapacityExceeded,
    ConfigError,
    DuplicatePosition,
    InconsistentPositionData,
    InvalidPositionTerms,
    PositionNotFound,
    SpotPriceUnavailable,
    TradeExecutionFailed,
};

/// Describes possible Errors that may occur when calling methods in this crate
#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
#[allow(missing_docs, reason = "Self documenting")]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    CapacityExceeded(#[from] CapacityExceeded),

    #[error(transparent)]
    InvalidPositionTerms(#[from] InvalidPositionTerms),

    #[error(transparent)]
    DuplicatePosition(#[from] DuplicatePosition),

    #[error(transparent)]
    InconsistentPositionData(#[from] InconsistentPositionData),

    #[error(transparent)]
    PositionNotFound(#[from] PositionNotFound),

    #[error(transparent)]
    SpotPriceUnavailable(#[from] SpotPriceUnavailable),

    #[error(transparent)]
    TradeExecutionFailed(#[from] TradeExecutionFailed),
}

/// Shorthand for a `Result` with the crate wide `Error`.
pub type Result<T> = std::result::Result<T, Error>;
