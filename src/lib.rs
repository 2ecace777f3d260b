#![doc = include_str!("../README.md")]

pub mod collaborators;
mod collateral_requirement;
mod config;
mod ledger;
pub mod mock_collaborators;
mod position_registry;
mod rebalancer;
mod stress_price;
mod types;

/// Exports common types
pub mod prelude {
    pub use const_decimal::Decimal;

    pub use crate::{
        collaborators::*,
        collateral_requirement::{
            liquidation_threshold,
            target_collateral,
        },
        config::{
            Config,
            DEFAULT_CAPACITY,
        },
        ledger::RebalanceLedger,
        position_registry::PositionRegistry,
        rebalancer::{
            GatherReport,
            RebalanceReport,
            Rebalancer,
            TopoffReport,
        },
        stress_price::buffered_spot,
        types::*,
    };
}
