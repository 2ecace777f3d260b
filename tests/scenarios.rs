//! End to end rebalancing cycles of a small portfolio.

#![allow(
    unused_crate_dependencies,
    reason = "Integration tests don't use all dependencies"
)]

use collateral_rebalancer::{
    mock_collaborators::*,
    prelude::*,
};
use num_traits::Zero;

type TestRebalancer = Rebalancer<
    i64,
    5,
    InMemoryPositionSource<i64, 5>,
    FixedSpotOracle<i64, 5>,
    IntrinsicValueRiskModel,
    RecordingTradeExecutor<i64, 5>,
>;

fn put(id: u64, strike: i64, collateral: i64) -> Position<i64, 5> {
    mock_position(
        id,
        OptionKind::ShortPut,
        QuoteCurrency::new(strike, 0),
        BaseCurrency::new(1, 0),
        Collateral::new(collateral, 0),
    )
}

fn call(id: u64, strike: i64, collateral: i64) -> Position<i64, 5> {
    mock_position(
        id,
        OptionKind::ShortCall,
        QuoteCurrency::new(strike, 0),
        BaseCurrency::new(1, 0),
        Collateral::new(collateral, 0),
    )
}

fn setup(positions: Vec<Position<i64, 5>>, buffer: Decimal<i64, 5>) -> TestRebalancer {
    let ids: Vec<PositionId> = positions.iter().map(|p| p.id()).collect();
    let config = Config::new(buffer, DEFAULT_CAPACITY, "ETH-USD").unwrap();
    let mut rebalancer = Rebalancer::new(
        config,
        InMemoryPositionSource::new(positions),
        FixedSpotOracle::new(QuoteCurrency::new(100, 0)),
        IntrinsicValueRiskModel,
        RecordingTradeExecutor::default(),
    );
    rebalancer.track(&ids).unwrap();
    rebalancer
}

fn thirty_percent() -> Decimal<i64, 5> {
    Decimal::try_from_scaled(3, 1).unwrap()
}

#[test]
#[tracing_test::traced_test]
fn scenario_a_gather_and_flag() {
    let mut rebalancer = setup(vec![put(1, 150, 100), call(2, 60, 50)], thirty_percent());

    let report = rebalancer.gather_and_flag().unwrap();
    assert_eq!(rebalancer.collateral_of(1.into()), Some(Collateral::new(80, 0)));
    assert_eq!(rebalancer.pooled_collateral(), Collateral::new(20, 0));
    assert_eq!(rebalancer.flagged(), &[PositionId::from(2)]);
    assert_eq!(rebalancer.deficit(2.into()), Some(Collateral::new(20, 0)));
    assert_eq!(rebalancer.position_state(1.into()), Some(PositionState::Tracked));
    assert_eq!(report.reclaimed(), Collateral::new(20, 0));
}

#[test]
#[tracing_test::traced_test]
fn scenario_b_topoff() {
    let mut rebalancer = setup(vec![put(1, 150, 100), call(2, 60, 50)], thirty_percent());
    rebalancer.gather_and_flag().unwrap();

    let report = rebalancer.topoff_or_close().unwrap();
    assert_eq!(rebalancer.collateral_of(2.into()), Some(Collateral::new(70, 0)));
    assert_eq!(rebalancer.pooled_collateral(), Collateral::zero());
    assert!(rebalancer.flagged().is_empty());
    assert_eq!(report.topped_off(), &vec![PositionId::from(2)]);
    assert_eq!(
        rebalancer.trade_executor().trades(),
        &vec![
            ExecutedTrade::Adjust {
                position_id: 1.into(),
                collateral: Collateral::new(80, 0),
            },
            ExecutedTrade::Adjust {
                position_id: 2.into(),
                collateral: Collateral::new(70, 0),
            },
        ]
    );
}

#[test]
#[tracing_test::traced_test]
fn scenario_c_close_instead_of_partial_topoff() {
    let mut rebalancer = setup(vec![put(1, 150, 100), call(2, 60, 45)], thirty_percent());
    rebalancer.gather_and_flag().unwrap();
    assert_eq!(rebalancer.deficit(2.into()), Some(Collateral::new(25, 0)));
    assert_eq!(rebalancer.pooled_collateral(), Collateral::new(20, 0));

    let report = rebalancer.topoff_or_close().unwrap();
    assert!(report.topped_off().is_empty());
    assert_eq!(report.closed().len(), 1);
    let closed = &report.closed()[0];
    assert_eq!(closed.id(), PositionId::from(2));
    assert_eq!(closed.collateral(), Collateral::new(45, 0));

    assert!(!rebalancer.registry().contains(2.into()));
    assert_eq!(rebalancer.registry().len(), 1);
    assert_eq!(rebalancer.position_state(2.into()), Some(PositionState::Closed));
    assert_eq!(rebalancer.pooled_collateral(), Collateral::new(20, 0));
    assert_eq!(
        rebalancer.trade_executor().trades().last(),
        Some(&ExecutedTrade::Close {
            position_id: 2.into(),
            amount: BaseCurrency::new(1, 0),
            price_tolerance: PriceTolerance::Unbounded,
        })
    );
}

#[test]
fn zero_buffer_targets_the_liquidation_threshold() {
    let mut rebalancer =
        setup(vec![put(1, 150, 100), call(2, 60, 30)], Decimal::zero());
    for id in [1, 2] {
        assert_eq!(
            rebalancer.target_collateral_of(id.into()).unwrap(),
            rebalancer.liquidation_threshold_of(id.into()).unwrap()
        );
    }

    rebalancer.rebalance().unwrap();
    assert_eq!(rebalancer.collateral_of(1.into()), Some(Collateral::new(50, 0)));
    assert_eq!(rebalancer.collateral_of(2.into()), Some(Collateral::new(40, 0)));
    assert_eq!(rebalancer.pooled_collateral(), Collateral::new(40, 0));
}

#[test]
fn second_gather_flags_nothing() {
    let mut rebalancer = setup(
        vec![put(1, 150, 100), call(2, 60, 50), put(3, 120, 200)],
        thirty_percent(),
    );
    rebalancer.rebalance().unwrap();

    let report = rebalancer.gather_and_flag().unwrap();
    assert!(report.flagged().is_empty());
    assert_eq!(report.reclaimed(), Collateral::zero());
}

#[test]
fn first_flagged_first_served() {
    // Spot 100 with a 30% buffer: put 1 needs 30 more, put 2 needs 10 more, put 3 gives up 40.
    let mut rebalancer = setup(
        vec![put(1, 170, 70), put(2, 130, 50), put(3, 70, 40)],
        thirty_percent(),
    );
    let report = rebalancer.rebalance().unwrap();

    assert_eq!(
        report.gather().flagged(),
        &vec![PositionId::from(1), PositionId::from(2)]
    );
    assert_eq!(
        report.topoff().topped_off(),
        &vec![PositionId::from(1), PositionId::from(2)]
    );
    assert_eq!(rebalancer.pooled_collateral(), Collateral::zero());

    // Put 1 needs more than the pool holds and is closed, while put 2 is still saved.
    let mut rebalancer = setup(
        vec![put(1, 170, 70), put(2, 130, 50), put(3, 70, 20)],
        thirty_percent(),
    );
    let report = rebalancer.rebalance().unwrap();
    assert_eq!(report.topoff().closed()[0].id(), PositionId::from(1));
    assert_eq!(report.topoff().topped_off(), &vec![PositionId::from(2)]);
    assert_eq!(rebalancer.pooled_collateral(), Collateral::new(10, 0));
}

#[test]
fn tracking_beyond_capacity_changes_nothing() {
    let positions: Vec<_> = (0..11).map(|id| call(id, 60, 100)).collect();
    let config = Config::new(thirty_percent(), DEFAULT_CAPACITY, "ETH-USD").unwrap();
    let mut rebalancer = Rebalancer::new(
        config,
        InMemoryPositionSource::new(positions),
        FixedSpotOracle::new(QuoteCurrency::new(100, 0)),
        IntrinsicValueRiskModel,
        RecordingTradeExecutor::default(),
    );
    let ids: Vec<PositionId> = (0..11).map(PositionId::from).collect();

    assert_eq!(
        rebalancer.track(&ids),
        Err(Error::CapacityExceeded(CapacityExceeded {
            capacity: 10,
            tracked: 0,
            requested: 11,
        }))
    );
    assert!(rebalancer.registry().is_empty());

    rebalancer.track(&ids[..10]).unwrap();
    assert_eq!(rebalancer.registry().len(), 10);
}

#[test]
fn removed_positions_are_handed_back() {
    let mut rebalancer = setup(vec![put(1, 150, 100), call(2, 60, 50)], thirty_percent());
    let removed = rebalancer.remove(1.into()).unwrap();
    assert_eq!(removed, put(1, 150, 100));

    rebalancer.rebalance().unwrap();
    // Nothing to reclaim from, so the call is closed.
    assert_eq!(rebalancer.position_state(2.into()), Some(PositionState::Closed));
    assert!(rebalancer.registry().is_empty());
}

/// Requires puts to be cash secured at the strike and calls to be covered at the spot price.
#[derive(Debug, Clone, Copy)]
struct FullyCoveredRiskModel;

impl RiskModel<i64, 5> for FullyCoveredRiskModel {
    fn min_collateral(
        &self,
        option_kind: OptionKind,
        strike: QuoteCurrency<i64, 5>,
        _expiry: TimestampNs,
        spot: QuoteCurrency<i64, 5>,
        amount: BaseCurrency<i64, 5>,
    ) -> Collateral<i64, 5> {
        match option_kind {
            OptionKind::ShortPut => Collateral::from_notional(amount, strike),
            OptionKind::ShortCall => Collateral::from_notional(amount, spot),
        }
    }
}

#[test]
fn custom_risk_model() {
    let config = Config::new(thirty_percent(), DEFAULT_CAPACITY, "ETH-USD").unwrap();
    let mut rebalancer = Rebalancer::new(
        config,
        InMemoryPositionSource::new([put(1, 150, 200), call(2, 60, 100)]),
        FixedSpotOracle::new(QuoteCurrency::new(100, 0)),
        FullyCoveredRiskModel,
        RecordingTradeExecutor::default(),
    );
    rebalancer.track(&[1.into(), 2.into()]).unwrap();
    assert_eq!(
        rebalancer.target_collateral_of(2.into()),
        Ok(Collateral::new(130, 0))
    );

    let report = rebalancer.rebalance().unwrap();
    assert_eq!(report.gather().reclaimed(), Collateral::new(50, 0));
    assert_eq!(report.topoff().redistributed(), Collateral::new(30, 0));
    assert_eq!(rebalancer.collateral_of(1.into()), Some(Collateral::new(150, 0)));
    assert_eq!(rebalancer.collateral_of(2.into()), Some(Collateral::new(130, 0)));
    assert_eq!(rebalancer.pooled_collateral(), Collateral::new(20, 0));
}

/// Subtracts the strike from the spot price for puts as well, so out of the money puts get a negative requirement.
#[derive(Debug, Clone, Copy)]
struct SignErrorRiskModel;

impl RiskModel<i64, 5> for SignErrorRiskModel {
    fn min_collateral(
        &self,
        _option_kind: OptionKind,
        strike: QuoteCurrency<i64, 5>,
        _expiry: TimestampNs,
        spot: QuoteCurrency<i64, 5>,
        amount: BaseCurrency<i64, 5>,
    ) -> Collateral<i64, 5> {
        Collateral::from_notional(amount, spot - strike)
    }
}

#[test]
#[tracing_test::traced_test]
fn negative_requirement_reclaims_at_most_the_posted_collateral() {
    let config = Config::new(thirty_percent(), DEFAULT_CAPACITY, "ETH-USD").unwrap();
    let mut rebalancer = Rebalancer::new(
        config,
        InMemoryPositionSource::new([put(1, 150, 30)]),
        FixedSpotOracle::new(QuoteCurrency::new(100, 0)),
        SignErrorRiskModel,
        RecordingTradeExecutor::default(),
    );
    rebalancer.track(&[1.into()]).unwrap();
    assert_eq!(rebalancer.target_collateral_of(1.into()), Ok(Collateral::zero()));

    let report = rebalancer.rebalance().unwrap();
    assert_eq!(report.gather().reclaimed(), Collateral::new(30, 0));
    assert_eq!(rebalancer.collateral_of(1.into()), Some(Collateral::zero()));
    assert_eq!(rebalancer.pooled_collateral(), Collateral::new(30, 0));
    assert_eq!(
        rebalancer.trade_executor().trades(),
        &vec![ExecutedTrade::Adjust {
            position_id: 1.into(),
            collateral: Collateral::zero(),
        }]
    );
}
