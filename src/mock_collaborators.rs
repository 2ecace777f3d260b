//! Deterministic in-memory collaborators, used in tests.

use std::{collections::HashMap, result::Result};

use getset::Getters;
use num_traits::Zero;
use tracing::trace;

use crate::{
    collaborators::{
        PositionSource,
        RiskModel,
        SpotPriceOracle,
        TradeExecutor,
    },
    prelude::*,
};

/// A `PositionSource` backed by a `HashMap`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPositionSource<I, const D: u8>
where
    I: Mon<D>,
{
    positions: HashMap<PositionId, Position<I, D>>,
}

impl<I, const D: u8> InMemoryPositionSource<I, D>
where
    I: Mon<D>,
{
    /// Create a new instance from the given positions.
    pub fn new(positions: impl IntoIterator<Item = Position<I, D>>) -> Self {
        Self {
            positions: positions.into_iter().map(|p| (p.id(), p)).collect(),
        }
    }

    /// Insert or replace a position.
    pub fn insert(&mut self, position: Position<I, D>) {
        self.positions.insert(position.id(), position);
    }
}

impl<I, const D: u8> PositionSource<I, D> for InMemoryPositionSource<I, D>
where
    I: Mon<D>,
{
    fn fetch_positions(&self, ids: &[PositionId]) -> Result<Vec<Position<I, D>>, PositionNotFound> {
        ids.iter()
            .map(|id| self.positions.get(id).cloned().ok_or(PositionNotFound(*id)))
            .collect()
    }
}

/// A `SpotPriceOracle` which quotes the same price for every market until changed.
#[derive(Debug, Clone, Default)]
pub struct FixedSpotOracle<I, const D: u8>
where
    I: Mon<D>,
{
    spot: Option<QuoteCurrency<I, D>>,
}

impl<I, const D: u8> FixedSpotOracle<I, D>
where
    I: Mon<D>,
{
    /// Create a new instance quoting `spot`.
    pub fn new(spot: QuoteCurrency<I, D>) -> Self {
        Self { spot: Some(spot) }
    }

    /// Change the quoted price. `None` makes the oracle report the price as unavailable.
    pub fn set_spot(&mut self, spot: Option<QuoteCurrency<I, D>>) {
        self.spot = spot;
    }
}

impl<I, const D: u8> SpotPriceOracle<I, D> for FixedSpotOracle<I, D>
where
    I: Mon<D>,
{
    fn current_spot(&self, market: &Market) -> Result<QuoteCurrency<I, D>, SpotPriceUnavailable> {
        self.spot.ok_or_else(|| SpotPriceUnavailable {
            market: market.clone(),
        })
    }
}

/// A `RiskModel` requiring the intrinsic value of the options as collateral,
/// so a short put needs `max(strike - spot, 0) * amount`
/// and a short call needs `max(spot - strike, 0) * amount`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntrinsicValueRiskModel;

impl<I, const D: u8> RiskModel<I, D> for IntrinsicValueRiskModel
where
    I: Mon<D>,
{
    fn min_collateral(
        &self,
        option_kind: OptionKind,
        strike: QuoteCurrency<I, D>,
        _expiry: TimestampNs,
        spot: QuoteCurrency<I, D>,
        amount: BaseCurrency<I, D>,
    ) -> Collateral<I, D> {
        let intrinsic = match option_kind {
            OptionKind::ShortPut => strike - spot,
            OptionKind::ShortCall => spot - strike,
        };
        if intrinsic <= QuoteCurrency::zero() {
            return Collateral::zero();
        }
        Collateral::from_notional(amount, intrinsic)
    }
}

/// A trade executed by the `RecordingTradeExecutor`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutedTrade<I, const D: u8>
where
    I: Mon<D>,
{
    /// The collateral of a position was set.
    Adjust {
        /// The adjusted position.
        position_id: PositionId,
        /// Its new collateral.
        collateral: Collateral<I, D>,
    },
    /// A position was closed.
    Close {
        /// The closed position.
        position_id: PositionId,
        /// The amount closed.
        amount: BaseCurrency<I, D>,
        /// The settlement price constraint of the close.
        price_tolerance: PriceTolerance<I, D>,
    },
}

/// A `TradeExecutor` which records all successful trades
/// and rejects trades of positions configured to fail.
/// Once a settlement price is set, closes whose `PriceTolerance` does not admit it are rejected.
#[derive(Debug, Clone, Default, Getters)]
pub struct RecordingTradeExecutor<I, const D: u8>
where
    I: Mon<D>,
{
    /// All successfully executed trades in execution order.
    #[getset(get = "pub")]
    trades: Vec<ExecutedTrade<I, D>>,

    failures: HashMap<PositionId, TradeError>,

    settlement_price: Option<QuoteCurrency<I, D>>,
}

impl<I, const D: u8> RecordingTradeExecutor<I, D>
where
    I: Mon<D>,
{
    /// Reject every subsequent trade of `position_id` with `error`.
    pub fn fail_for(&mut self, position_id: PositionId, error: TradeError) {
        self.failures.insert(position_id, error);
    }

    /// The price closes settle at, `None` settles at any price.
    pub fn set_settlement_price(&mut self, price: Option<QuoteCurrency<I, D>>) {
        self.settlement_price = price;
    }

    /// Accept trades of all positions again.
    pub fn clear_failures(&mut self) {
        self.failures.clear();
    }

    fn check(&self, position_id: PositionId) -> Result<(), TradeError> {
        match self.failures.get(&position_id) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

impl<I, const D: u8> TradeExecutor<I, D> for RecordingTradeExecutor<I, D>
where
    I: Mon<D>,
{
    fn open_or_adjust(
        &mut self,
        position_id: PositionId,
        set_collateral_to: Collateral<I, D>,
    ) -> Result<(), TradeError> {
        self.check(position_id)?;
        trace!("open_or_adjust {position_id} to {set_collateral_to}");
        self.trades.push(ExecutedTrade::Adjust {
            position_id,
            collateral: set_collateral_to,
        });
        Ok(())
    }

    fn close(
        &mut self,
        position_id: PositionId,
        amount: BaseCurrency<I, D>,
        price_tolerance: PriceTolerance<I, D>,
    ) -> Result<(), TradeError> {
        self.check(position_id)?;
        if let Some(price) = self.settlement_price
            && !price_tolerance.admits(price)
        {
            return Err(TradeError::Rejected {
                reason: format!("settlement price {price} outside of {price_tolerance:?}"),
            });
        }
        trace!("close {position_id}: {amount}, tolerance: {price_tolerance:?}");
        self.trades.push(ExecutedTrade::Close {
            position_id,
            amount,
            price_tolerance,
        });
        Ok(())
    }
}

/// Construct a valid position expiring at timestamp zero.
///
/// # Panics:
/// if the terms are invalid.
pub fn mock_position<I, const D: u8>(
    id: u64,
    option_kind: OptionKind,
    strike: QuoteCurrency<I, D>,
    amount: BaseCurrency<I, D>,
    collateral: Collateral<I, D>,
) -> Position<I, D>
where
    I: Mon<D>,
{
    Position::new(
        id.into(),
        option_kind,
        strike,
        TimestampNs::from(0),
        amount,
        collateral,
    )
    .expect("Valid position terms")
}
