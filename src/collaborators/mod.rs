//! The external capabilities the rebalancing engine relies on.
//!
//! The engine never prices options, moves funds or talks to a ledger itself.
//! Instead each of these concerns is injected as a trait implementation when constructing a `Rebalancer`:
//!
//! 1. `PositionSource`: Provides the full position data for tracked ids.
//! 2. `SpotPriceOracle`: Provides the current spot price of the underlying market.
//! 3. `RiskModel`: Maps option terms and a spot price to the minimum collateral required.
//! 4. `TradeExecutor`: Adjusts the collateral of positions and closes them.
//!
//! All calls are synchronous and may block. Timeouts and retries belong to the implementations.

mod position_source_trait;
mod risk_model_trait;
mod spot_price_oracle_trait;
mod trade_executor_trait;

pub use position_source_trait::PositionSource;
pub use risk_model_trait::RiskModel;
pub use spot_price_oracle_trait::SpotPriceOracle;
pub use trade_executor_trait::TradeExecutor;
