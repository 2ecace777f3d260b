use num_traits::Zero;
use tracing::{
    debug,
    info,
};

use super::{
    Rebalancer,
    TopoffReport,
    trade_failed,
};
use crate::{
    collaborators::{
        PositionSource,
        RiskModel,
        SpotPriceOracle,
        TradeExecutor,
    },
    types::{
        Collateral,
        Mon,
        PriceTolerance,
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
    /// Process the flagged positions first-flagged-first-served.
    /// A position is topped off to its target if the pool covers its deficit,
    /// otherwise it is closed in full without any price limit and stops being tracked.
    ///
    /// Each flag is dropped once its position was processed,
    /// so a pass aborted by a failed trade can be resumed by calling this again.
    /// Unused pooled collateral stays in the pool.
    pub fn topoff_or_close(&mut self) -> Result<TopoffReport<I, D>> {
        debug!(
            "topoff_or_close of {} flagged positions with {} pooled",
            self.ledger.flagged().len(),
            self.ledger.pooled_collateral()
        );

        let mut topped_off = Vec::new();
        let mut redistributed = Collateral::zero();
        let mut closed = Vec::new();
        while let Some((id, deficit)) = self.ledger.next_flagged() {
            let position = self
                .registry
                .get(id)
                .expect("Flagged positions are tracked, as `remove` drops their flag");

            if self.ledger.pooled_collateral() >= deficit {
                let target = position.collateral() + deficit;
                self.trade_executor
                    .open_or_adjust(id, target)
                    .map_err(trade_failed(RebalancePhase::TopoffOrClose, id))?;
                self.ledger.draw_from_pool(deficit);
                let updated = self.registry.update_collateral(id, target);
                assert2::debug_assert!(updated);
                let popped = self.ledger.pop_flagged(id);
                assert2::debug_assert!(popped == deficit);
                redistributed += deficit;
                topped_off.push(id);
                debug!("topped off position {id} to {target}");
            } else {
                self.trade_executor
                    .close(id, position.amount(), PriceTolerance::Unbounded)
                    .map_err(trade_failed(RebalancePhase::TopoffOrClose, id))?;
                let position = self
                    .registry
                    .remove(id)
                    .expect("Is tracked as checked above");
                let popped = self.ledger.pop_flagged(id);
                assert2::debug_assert!(popped == deficit);
                info!(
                    "closed {position}, its deficit {deficit} exceeds the pool of {}",
                    self.ledger.pooled_collateral()
                );
                self.ledger.record_closed(position.clone());
                closed.push(position);
            }
        }
        assert2::debug_assert!(self.ledger.flagged().is_empty());

        Ok(TopoffReport::builder()
            .topped_off(topped_off)
            .redistributed(redistributed)
            .closed(closed)
            .build())
    }
}
