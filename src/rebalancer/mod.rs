//! The `Rebalancer` moves collateral from over-collateralized positions
//! to the positions that would not survive the configured stress scenario.
//!
//! A rebalancing cycle consists of two phases:
//!
//! 1. Gather and flag:
//!     Every tracked position is sized against its buffered spot price.
//!     Collateral exceeding the target is withdrawn into a shared pool,
//!     while positions below their target are flagged together with their deficit.
//!
//! 2. Topoff or close:
//!     The flagged positions are processed in the order they were flagged.
//!     If the pool covers the deficit, the position is topped off to its target.
//!     Otherwise the position is closed in full, as it would otherwise risk liquidation.
//!
//! Any failed trade aborts the phase it occurred in.
//! Mutations applied before the failure are retained and the failure is surfaced to the caller.

mod gather_and_flag;
mod reports;
mod topoff_or_close;

use getset::{
    Getters,
    MutGetters,
};
use tracing::{
    debug,
    info,
    warn,
};

pub use reports::{
    GatherReport,
    RebalanceReport,
    TopoffReport,
};

use crate::{
    collaborators::{
        PositionSource,
        RiskModel,
        SpotPriceOracle,
        TradeExecutor,
    },
    collateral_requirement::{
        liquidation_threshold,
        stressed_target,
    },
    config::Config,
    ledger::RebalanceLedger,
    position_registry::PositionRegistry,
    types::{
        Collateral,
        Error,
        Mon,
        Position,
        PositionId,
        PositionNotFound,
        PositionState,
        QuoteCurrency,
        RebalancePhase,
        Result,
        TradeError,
        TradeExecutionFailed,
    },
};

/// The collateral rebalancing engine of a bounded portfolio of short option positions.
///
/// It exclusively owns its `PositionRegistry` and `RebalanceLedger`,
/// so independent portfolios require independent instances.
///
/// Generics:
/// - `I`: The numeric data type of currencies.
/// - `D`: The constant decimal precision of the currencies.
/// - `S`: The `PositionSource`.
/// - `O`: The `SpotPriceOracle`.
/// - `R`: The `RiskModel`.
/// - `T`: The `TradeExecutor`.
#[derive(Debug, Getters, MutGetters)]
pub struct Rebalancer<I, const D: u8, S, O, R, T>
where
    I: Mon<D>,
    S: PositionSource<I, D>,
    O: SpotPriceOracle<I, D>,
    R: RiskModel<I, D>,
    T: TradeExecutor<I, D>,
{
    /// The engine configuration.
    #[getset(get = "pub")]
    config: Config<I, D>,

    /// The tracked positions.
    #[getset(get = "pub")]
    registry: PositionRegistry<I, D>,

    /// The bookkeeping of the current cycle.
    #[getset(get = "pub")]
    ledger: RebalanceLedger<I, D>,

    /// Provides the data of newly tracked positions.
    #[getset(get = "pub", get_mut = "pub")]
    position_source: S,

    /// Provides the base spot price.
    #[getset(get = "pub", get_mut = "pub")]
    spot_oracle: O,

    /// Sizes the collateral requirement of positions.
    #[getset(get = "pub")]
    risk_model: R,

    /// Executes the collateral adjustments and closes.
    #[getset(get = "pub", get_mut = "pub")]
    trade_executor: T,
}

impl<I, const D: u8, S, O, R, T> Rebalancer<I, D, S, O, R, T>
where
    I: Mon<D>,
    S: PositionSource<I, D>,
    O: SpotPriceOracle<I, D>,
    R: RiskModel<I, D>,
    T: TradeExecutor<I, D>,
{
    /// Create a new instance without any tracked positions and an empty pool.
    pub fn new(
        config: Config<I, D>,
        position_source: S,
        spot_oracle: O,
        risk_model: R,
        trade_executor: T,
    ) -> Self {
        info!(
            "new Rebalancer for {} with buffer {} and capacity {}",
            config.market(),
            config.buffer_fraction(),
            config.capacity()
        );
        Self {
            registry: PositionRegistry::with_capacity(config.capacity()),
            ledger: RebalanceLedger::default(),
            config,
            position_source,
            spot_oracle,
            risk_model,
            trade_executor,
        }
    }

    /// Start tracking the positions of `ids`, fetched from the `PositionSource`.
    /// Either all of them are tracked or none.
    pub fn track(&mut self, ids: &[PositionId]) -> Result<()> {
        self.registry.track(&self.position_source, ids)
    }

    /// Stop tracking a position, handing it back to the caller.
    /// A pending flag of the position is dropped as well.
    #[must_use]
    pub fn remove(&mut self, id: PositionId) -> Option<Position<I, D>> {
        let position = self.registry.remove(id)?;
        if let Some(deficit) = self.ledger.unflag(id) {
            debug!("dropped flag of removed position {id} with deficit {deficit}");
        }
        Some(position)
    }

    /// Run a complete cycle, `gather_and_flag` followed by `topoff_or_close`.
    pub fn rebalance(&mut self) -> Result<RebalanceReport<I, D>> {
        let gather = self.gather_and_flag()?;
        let topoff = self.topoff_or_close()?;
        Ok(RebalanceReport { gather, topoff })
    }

    /// The flagged positions in the order they were flagged.
    #[inline]
    pub fn flagged(&self) -> &[PositionId] {
        self.ledger.flagged()
    }

    /// The shortfall of a flagged position.
    #[inline]
    pub fn deficit(&self, id: PositionId) -> Option<Collateral<I, D>> {
        self.ledger.deficit(id)
    }

    /// The collateral available for topping off flagged positions.
    #[inline]
    pub fn pooled_collateral(&self) -> Collateral<I, D> {
        self.ledger.pooled_collateral()
    }

    /// The current collateral of a tracked position.
    #[inline]
    pub fn collateral_of(&self, id: PositionId) -> Option<Collateral<I, D>> {
        self.registry.get(id).map(|pos| pos.collateral())
    }

    /// Where the position stands in the current cycle, `None` if it is unknown.
    pub fn position_state(&self, id: PositionId) -> Option<PositionState> {
        if self.ledger.is_flagged(id) {
            return Some(PositionState::Flagged);
        }
        if self.registry.contains(id) {
            return Some(PositionState::Tracked);
        }
        if self.ledger.is_closed(id) {
            return Some(PositionState::Closed);
        }
        None
    }

    /// Withdraw all pooled collateral, e.g. to sweep it out of the engine between cycles.
    ///
    /// # Returns:
    /// The amount that was pooled.
    pub fn drain_pooled_collateral(&mut self) -> Collateral<I, D> {
        let drained = self.ledger.drain_pool();
        info!("drained {drained} of pooled collateral");
        drained
    }

    /// The current spot price of the configured market.
    #[inline]
    pub fn current_spot(&self) -> Result<QuoteCurrency<I, D>> {
        Ok(self.spot_oracle.current_spot(self.config.market())?)
    }

    /// The collateral a tracked position must hold to survive the stress scenario at the current spot price.
    pub fn target_collateral_of(&self, id: PositionId) -> Result<Collateral<I, D>> {
        let position = self.registry.get(id).ok_or(PositionNotFound(id))?;
        let spot = self.current_spot()?;
        Ok(stressed_target(
            &self.risk_model,
            position,
            spot,
            self.config.buffer_fraction(),
        ))
    }

    /// The collateral below which a tracked position gets liquidated at the current spot price.
    pub fn liquidation_threshold_of(&self, id: PositionId) -> Result<Collateral<I, D>> {
        let position = self.registry.get(id).ok_or(PositionNotFound(id))?;
        let spot = self.current_spot()?;
        Ok(liquidation_threshold(&self.risk_model, position, spot))
    }
}

/// Attach the context of a rejected trade.
fn trade_failed(phase: RebalancePhase, position_id: PositionId) -> impl FnOnce(TradeError) -> Error {
    move |source| {
        warn!("aborting {phase}: trade for position {position_id} failed: {source}");
        TradeExecutionFailed {
            position_id,
            phase,
            source,
        }
        .into()
    }
}
