use std::collections::HashMap;

use getset::CopyGetters;
use num_traits::Zero;
use tracing::trace;

use crate::types::{
    Collateral,
    Mon,
    Position,
    PositionId,
};

/// The bookkeeping shared between the two phases of a rebalancing cycle.
///
/// The flags and deficits are rebuilt by every gather-and-flag pass,
/// while the pooled collateral carries over from one cycle to the next.
#[derive(Debug, Clone, Default, PartialEq, Eq, CopyGetters)]
pub struct RebalanceLedger<I, const D: u8>
where
    I: Mon<D>,
{
    /// Positions below their target, in scan order.
    flagged: Vec<PositionId>,

    /// The shortfall of each flagged position.
    deficit: HashMap<PositionId, Collateral<I, D>>,

    /// Positions force closed since the latest gather-and-flag pass.
    closed: Vec<Position<I, D>>,

    /// Collateral reclaimed from over-collateralized positions and not yet redistributed.
    #[getset(get_copy = "pub")]
    pooled_collateral: Collateral<I, D>,
}

impl<I, const D: u8> RebalanceLedger<I, D>
where
    I: Mon<D>,
{
    /// The flagged positions in the order they were flagged.
    #[inline(always)]
    pub fn flagged(&self) -> &[PositionId] {
        &self.flagged
    }

    /// The shortfall of a flagged position.
    #[inline]
    pub fn deficit(&self, id: PositionId) -> Option<Collateral<I, D>> {
        self.deficit.get(&id).copied()
    }

    /// The positions force closed since the latest gather-and-flag pass,
    /// including those closed before a topoff pass was aborted.
    #[inline(always)]
    pub fn closed(&self) -> &[Position<I, D>] {
        &self.closed
    }

    /// `true` if the position was force closed since the latest gather-and-flag pass.
    #[inline]
    pub fn is_closed(&self, id: PositionId) -> bool {
        self.closed.iter().any(|pos| pos.id() == id)
    }

    /// `true` if the position is currently flagged.
    #[inline]
    pub fn is_flagged(&self, id: PositionId) -> bool {
        self.deficit.contains_key(&id)
    }

    /// Discard the flags, deficits and closures of the previous cycle.
    pub(crate) fn reset_flags(&mut self) {
        trace!("reset_flags, dropping {} stale flags", self.flagged.len());
        self.flagged.clear();
        self.deficit.clear();
        self.closed.clear();
    }

    pub(crate) fn flag(&mut self, id: PositionId, deficit: Collateral<I, D>) {
        trace!("flag {id} with deficit {deficit}");
        assert2::debug_assert!(deficit > Collateral::zero());
        assert2::debug_assert!(!self.is_flagged(id));
        self.flagged.push(id);
        self.deficit.insert(id, deficit);
    }

    /// The oldest flag that has not been processed yet.
    #[inline]
    pub(crate) fn next_flagged(&self) -> Option<(PositionId, Collateral<I, D>)> {
        self.flagged.first().map(|id| {
            let deficit = self
                .deficit
                .get(id)
                .copied()
                .expect("Every flagged position has a deficit");
            (*id, deficit)
        })
    }

    /// Drop the oldest flag once its position was processed, returning its deficit.
    ///
    /// # Panics:
    /// if `id` is not the oldest flag.
    pub(crate) fn pop_flagged(&mut self, id: PositionId) -> Collateral<I, D> {
        assert_eq!(self.flagged.first(), Some(&id), "Only the oldest flag is popped");
        self.flagged.remove(0);
        self.deficit
            .remove(&id)
            .expect("Every flagged position has a deficit")
    }

    /// Drop the flag of a position, returning its deficit if it was flagged.
    pub(crate) fn unflag(&mut self, id: PositionId) -> Option<Collateral<I, D>> {
        let deficit = self.deficit.remove(&id)?;
        self.flagged.retain(|flagged| *flagged != id);
        Some(deficit)
    }

    pub(crate) fn record_closed(&mut self, position: Position<I, D>) {
        trace!("record_closed {position}");
        self.closed.push(position);
    }

    pub(crate) fn add_to_pool(&mut self, amount: Collateral<I, D>) {
        trace!("add_to_pool {amount}, pooled: {}", self.pooled_collateral);
        assert2::debug_assert!(amount > Collateral::zero());
        self.pooled_collateral += amount;
    }

    pub(crate) fn draw_from_pool(&mut self, amount: Collateral<I, D>) {
        trace!("draw_from_pool {amount}, pooled: {}", self.pooled_collateral);
        assert2::debug_assert!(amount <= self.pooled_collateral);
        self.pooled_collateral -= amount;
        assert2::debug_assert!(self.pooled_collateral >= Collateral::zero());
    }

    /// Empty the pool, returning what it held.
    pub(crate) fn drain_pool(&mut self) -> Collateral<I, D> {
        std::mem::replace(&mut self.pooled_collateral, Collateral::zero())
    }
}
