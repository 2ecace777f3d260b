use crate::types::{
    BaseCurrency,
    Collateral,
    Mon,
    PositionId,
    PriceTolerance,
    TradeError,
};

/// Executes the trades the `Rebalancer` decides on.
///
/// Both calls must be idempotent: repeating a successful call has no further effect.
/// Only once a call returned `Ok` does the `Rebalancer` update its own records.
pub trait TradeExecutor<I, const D: u8>
where
    I: Mon<D>,
{
    /// Set the collateral of a position to exactly `set_collateral_to`,
    /// either withdrawing the excess or depositing the shortfall.
    fn open_or_adjust(
        &mut self,
        position_id: PositionId,
        set_collateral_to: Collateral<I, D>,
    ) -> Result<(), TradeError>;

    /// Fully close `amount` of a position at a settlement price within `price_tolerance`.
    fn close(
        &mut self,
        position_id: PositionId,
        amount: BaseCurrency<I, D>,
        price_tolerance: PriceTolerance<I, D>,
    ) -> Result<(), TradeError>;
}
