//! Contains a data structure for the bounded, ordered collection of tracked positions,
//! optimized for a small number of them.

use std::{
    collections::HashSet,
    num::NonZeroU16,
};

use tracing::{
    debug,
    trace,
};

use crate::{
    collaborators::PositionSource,
    types::{
        CapacityExceeded,
        Collateral,
        DuplicatePosition,
        Error,
        InconsistentPositionData,
        Mon,
        Position,
        PositionId,
    },
};

/// Holds the tracked positions in insertion order, which is the scan order of every rebalancing pass.
/// The capacity is fixed on construction and never exceeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionRegistry<I, const D: u8>
where
    I: Mon<D>,
{
    positions: Vec<Position<I, D>>,
    capacity: NonZeroU16,
}

impl<I, const D: u8> PositionRegistry<I, D>
where
    I: Mon<D>,
{
    /// Create a new instance with a fixed capacity.
    pub fn with_capacity(capacity: NonZeroU16) -> Self {
        Self {
            positions: Vec::with_capacity(capacity.get().into()),
            capacity,
        }
    }

    /// The maximum number of positions that can be tracked.
    #[inline(always)]
    pub fn capacity(&self) -> u16 {
        self.capacity.get()
    }

    /// The number of tracked positions.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// `true` if no positions are tracked.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// `true` if the position is tracked.
    #[inline]
    pub fn contains(&self, id: PositionId) -> bool {
        self.positions.iter().any(|pos| pos.id() == id)
    }

    /// Get a tracked position by its id.
    #[inline]
    #[must_use]
    pub fn get(&self, id: PositionId) -> Option<&Position<I, D>> {
        self.positions.iter().find(|pos| pos.id() == id)
    }

    /// All tracked positions in insertion order.
    #[inline(always)]
    pub fn all(&self) -> &[Position<I, D>] {
        &self.positions
    }

    /// Iterate the tracked positions in insertion order.
    #[inline(always)]
    pub fn iter(&self) -> impl Iterator<Item = &Position<I, D>> {
        self.positions.iter()
    }

    /// The ids of all tracked positions in insertion order.
    pub fn ids(&self) -> Vec<PositionId> {
        self.positions.iter().map(|pos| pos.id()).collect()
    }

    /// Fetch the positions of `ids` from the `source` and append them in the given order.
    ///
    /// Either all positions are tracked or, on error, none of them.
    /// The capacity is checked before the `source` is queried,
    /// and its answer must hold exactly the requested positions in the requested order.
    pub fn track<S>(&mut self, source: &S, ids: &[PositionId]) -> Result<(), Error>
    where
        S: PositionSource<I, D>,
    {
        debug!("track {ids:?}");
        if self.positions.len() + ids.len() > self.capacity.get().into() {
            return Err(CapacityExceeded {
                capacity: self.capacity.get(),
                tracked: self.positions.len(),
                requested: ids.len(),
            }
            .into());
        }

        let mut seen = HashSet::with_capacity(ids.len());
        for id in ids {
            if self.contains(*id) || !seen.insert(*id) {
                return Err(DuplicatePosition(*id).into());
            }
        }

        let fetched = source.fetch_positions(ids)?;
        if fetched.len() != ids.len() {
            return Err(InconsistentPositionData::CountMismatch {
                requested: ids.len(),
                returned: fetched.len(),
            }
            .into());
        }
        for (id, position) in ids.iter().zip(fetched.iter()) {
            if *id != position.id() {
                return Err(InconsistentPositionData::IdMismatch {
                    requested: *id,
                    returned: position.id(),
                }
                .into());
            }
            position.validate()?;
        }

        self.positions.extend(fetched);
        assert2::debug_assert!(self.positions.len() <= self.capacity.get().into());

        Ok(())
    }

    /// Set the collateral of a tracked position.
    ///
    /// # Returns:
    /// `false` if the position is not tracked.
    #[inline]
    #[must_use]
    pub(crate) fn update_collateral(&mut self, id: PositionId, new_value: Collateral<I, D>) -> bool {
        trace!("update_collateral of {id} to {new_value}");
        assert2::debug_assert!(!new_value.is_negative());
        match self.positions.iter_mut().find(|pos| pos.id() == id) {
            Some(pos) => {
                pos.set_collateral(new_value);
                true
            }
            None => false,
        }
    }

    /// Stop tracking a position, handing it back to the caller.
    /// The order of the remaining positions is retained.
    #[inline]
    #[must_use]
    pub fn remove(&mut self, id: PositionId) -> Option<Position<I, D>> {
        debug!("remove position {id}");
        self.positions
            .iter()
            .position(|pos| pos.id() == id)
            .map(|idx| self.positions.remove(idx))
    }
}
