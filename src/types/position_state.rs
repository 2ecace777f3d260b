/// Where a position stands within the current rebalancing cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, std::hash::Hash, serde::Serialize, serde::Deserialize)]
pub enum PositionState {
    /// Tracked and not below its target collateral.
    Tracked,
    /// Below its target collateral, awaiting topoff or forced close.
    Flagged,
    /// Fully closed during the latest topoff pass and no longer tracked.
    Closed,
}

/// The two phases of a rebalancing cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, std::hash::Hash, serde::Serialize, serde::Deserialize)]
pub enum RebalancePhase {
    /// Reclaim excess collateral into the pool and flag positions below target.
    GatherAndFlag,
    /// Top off flagged positions from the pool or force close them.
    TopoffOrClose,
}

impl std::fmt::Display for RebalancePhase {
    #[mutants::skip]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GatherAndFlag => write!(f, "gather_and_flag"),
            Self::TopoffOrClose => write!(f, "topoff_or_close"),
        }
    }
}
