use getset::{
    CopyGetters,
    Getters,
};
use typed_builder::TypedBuilder;

use crate::types::{
    Collateral,
    Mon,
    Position,
    PositionId,
};

/// The outcome of a gather-and-flag pass.
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder, Getters, CopyGetters)]
pub struct GatherReport<I, const D: u8>
where
    I: Mon<D>,
{
    /// The total collateral moved from over-collateralized positions into the pool.
    #[getset(get_copy = "pub")]
    reclaimed: Collateral<I, D>,

    /// The positions below their target collateral, in scan order.
    #[getset(get = "pub")]
    flagged: Vec<PositionId>,
}

/// The outcome of a topoff-or-close pass.
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder, Getters, CopyGetters)]
pub struct TopoffReport<I, const D: u8>
where
    I: Mon<D>,
{
    /// The positions raised to their target collateral, in processing order.
    #[getset(get = "pub")]
    topped_off: Vec<PositionId>,

    /// The total collateral drawn from the pool.
    #[getset(get_copy = "pub")]
    redistributed: Collateral<I, D>,

    /// The positions that were force closed and are no longer tracked.
    #[getset(get = "pub")]
    closed: Vec<Position<I, D>>,
}

/// The outcome of a complete rebalancing cycle.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct RebalanceReport<I, const D: u8>
where
    I: Mon<D>,
{
    /// What the gather-and-flag pass did.
    #[getset(get = "pub")]
    pub(crate) gather: GatherReport<I, D>,

    /// What the topoff-or-close pass did.
    #[getset(get = "pub")]
    pub(crate) topoff: TopoffReport<I, D>,
}
