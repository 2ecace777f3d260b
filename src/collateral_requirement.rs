//! Sizes the collateral of positions by delegating to a `RiskModel`.

use num_traits::Zero;
use tracing::warn;

use crate::{
    collaborators::RiskModel,
    stress_price::buffered_spot,
    types::{
        BufferFraction,
        Collateral,
        Mon,
        Position,
        QuoteCurrency,
    },
};

/// The minimum collateral of `position` when the spot price is `spot`.
/// This is the single call site into the `RiskModel`.
/// A negative requirement is treated as none, so targets are never below zero.
#[inline]
fn min_collateral_at<I, const D: u8, R>(
    risk_model: &R,
    position: &Position<I, D>,
    spot: QuoteCurrency<I, D>,
) -> Collateral<I, D>
where
    I: Mon<D>,
    R: RiskModel<I, D>,
{
    let required = risk_model.min_collateral(
        position.option_kind(),
        position.strike(),
        position.expiry(),
        spot,
        position.amount(),
    );
    if required.is_negative() {
        warn!(
            "risk model requires negative collateral {required} for position {} at spot {spot}, using zero",
            position.id()
        );
        return Collateral::zero();
    }
    required
}

/// The rebalancing target of a position.
/// The position must hold this much collateral to survive the stress scenario,
/// so `buffered_spot` is expected to already be shifted against the position.
#[inline]
#[must_use]
pub fn target_collateral<I, const D: u8, R>(
    risk_model: &R,
    position: &Position<I, D>,
    buffered_spot: QuoteCurrency<I, D>,
) -> Collateral<I, D>
where
    I: Mon<D>,
    R: RiskModel<I, D>,
{
    min_collateral_at(risk_model, position, buffered_spot)
}

/// The collateral below which the position gets liquidated at the true (unstressed) `spot` price.
#[inline]
#[must_use]
pub fn liquidation_threshold<I, const D: u8, R>(
    risk_model: &R,
    position: &Position<I, D>,
    spot: QuoteCurrency<I, D>,
) -> Collateral<I, D>
where
    I: Mon<D>,
    R: RiskModel<I, D>,
{
    min_collateral_at(risk_model, position, spot)
}

/// Shifts the `base_spot` against the position and computes the rebalancing target from it.
#[inline]
pub(crate) fn stressed_target<I, const D: u8, R>(
    risk_model: &R,
    position: &Position<I, D>,
    base_spot: QuoteCurrency<I, D>,
    buffer_fraction: BufferFraction<I, D>,
) -> Collateral<I, D>
where
    I: Mon<D>,
    R: RiskModel<I, D>,
{
    let stressed = buffered_spot(position.option_kind(), base_spot, buffer_fraction);
    target_collateral(risk_model, position, stressed)
}
