use num_traits::Zero;
use tracing::{
    debug,
    info,
    trace,
};

use super::{
    GatherReport,
    Rebalancer,
    trade_failed,
};
use crate::{
    collaborators::{
        PositionSource,
        RiskModel,
        SpotPriceOracle,
        TradeExecutor,
    },
    collateral_requirement::stressed_target,
    types::{
        Collateral,
        Mon,
        RebalancePhase,
        Result,
    },
};

impl<I, const D: u8, S, O, R, T> Rebalancer<I, D, S, O, R, T>
where
    I: Mon<D>,
    S: PositionSource<I, D>,
    O: SpotPriceOracle<I, D>,
    R: RiskModel<I, D>,
    T: TradeExecutor<I, D>,
{
    /// Size every tracked position against the stress scenario,
    /// reclaiming the excess collateral into the pool and flagging the positions falling short.
    ///
    /// The flags of the previous cycle are discarded first.
    /// The spot price is queried once, before anything is mutated.
    ///
    /// A position holding exactly its target is neither adjusted nor flagged.
    /// The collateral of a position is only reduced after the `TradeExecutor` accepted the adjustment.
    pub fn gather_and_flag(&mut self) -> Result<GatherReport<I, D>> {
        let base_spot = self.current_spot()?;
        debug!(
            "gather_and_flag of {} positions at spot {base_spot}",
            self.registry.len()
        );
        self.ledger.reset_flags();

        let mut reclaimed = Collateral::zero();
        for id in self.registry.ids() {
            let position = self
                .registry
                .get(id)
                .expect("Is tracked as ids are snapshotted from the registry");
            let target = stressed_target(
                &self.risk_model,
                position,
                base_spot,
                self.config.buffer_fraction(),
            );
            let current = position.collateral();
            trace!("position {id}: collateral {current}, target {target}");

            if current > target {
                self.trade_executor
                    .open_or_adjust(id, target)
                    .map_err(trade_failed(RebalancePhase::GatherAndFlag, id))?;
                let excess = current - target;
                self.ledger.add_to_pool(excess);
                reclaimed += excess;
                let updated = self.registry.update_collateral(id, target);
                assert2::debug_assert!(updated);
            } else if current < target {
                self.ledger.flag(id, target - current);
            }
        }

        info!(
            "gathered {reclaimed}, pooled {}, flagged {:?}",
            self.ledger.pooled_collateral(),
            self.ledger.flagged()
        );
        Ok(GatherReport::builder()
            .reclaimed(reclaimed)
            .flagged(self.ledger.flagged().to_vec())
            .build())
    }
}
