use crate::types::{
    Mon,
    Position,
    PositionId,
    PositionNotFound,
};

/// Provides the full data of positions by their id.
pub trait PositionSource<I, const D: u8>
where
    I: Mon<D>,
{
    /// Bulk lookup of positions.
    ///
    /// # Returns:
    /// The positions in the same order as `ids`,
    /// or `PositionNotFound` for the first id that is unknown.
    fn fetch_positions(&self, ids: &[PositionId]) -> Result<Vec<Position<I, D>>, PositionNotFound>;
}
