use thiserror::Error;

use crate::types::PositionId;

/// Tracking the requested positions would exceed the capacity of the `PositionRegistry`.
#[derive(Error, Debug, Clone, Copy, Eq, PartialEq)]
#[error(
    "Tracking {requested} more positions exceeds the registry capacity of {capacity} with {tracked} already tracked"
)]
pub struct CapacityExceeded {
    /// The maximum number of positions the registry can hold.
    pub capacity: u16,
    /// The number of positions tracked when the request was made.
    pub tracked: usize,
    /// The number of positions requested to be tracked.
    pub requested: usize,
}

/// The position data is inconsistent and cannot be tracked.
#[derive(Error, Debug, Clone, Copy, Eq, PartialEq)]
#[allow(missing_docs, reason = "Self documenting")]
pub enum InvalidPositionTerms {
    #[error("The amount of position {0} is less than or equal zero.")]
    AmountLTEZero(PositionId),

    #[error("The strike price of position {0} is less than or equal zero.")]
    StrikeLTEZero(PositionId),

    #[error("The collateral of position {0} is negative.")]
    NegativeCollateral(PositionId),
}

/// The position is already tracked.
#[derive(Error, Debug, Clone, Copy, Eq, PartialEq)]
#[allow(missing_docs, reason = "Self documenting")]
#[error("position {0} is already tracked")]
pub struct DuplicatePosition(pub PositionId);

/// The position is not known.
#[derive(Error, Debug, Clone, Copy, Eq, PartialEq)]
#[allow(missing_docs, reason = "Self documenting")]
#[error("position {0} not found")]
pub struct PositionNotFound(pub PositionId);

/// The `PositionSource` answered with data that does not match the request.
#[derive(Error, Debug, Clone, Copy, Eq, PartialEq)]
#[allow(missing_docs, reason = "Self documenting")]
pub enum InconsistentPositionData {
    #[error("Requested {requested} positions but the source returned {returned}")]
    CountMismatch { requested: usize, returned: usize },

    #[error("Requested position {requested} but the source returned position {returned}")]
    IdMismatch {
        requested: PositionId,
        returned: PositionId,
    },
}
