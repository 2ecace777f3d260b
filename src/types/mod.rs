mod base_currency;
mod buffer_fraction;
mod collateral;
mod errors;
mod market;
mod option_kind;
mod position;
mod position_id;
mod position_state;
mod price_tolerance;
mod quote_currency;
mod timestamp_ns;

pub use base_currency::BaseCurrency;
pub use buffer_fraction::BufferFraction;
pub use collateral::Collateral;
use const_decimal::ScaledInteger;
pub use errors::*;
pub use market::Market;
pub use option_kind::OptionKind;
pub use position::Position;
pub use position_id::PositionId;
pub use position_state::{
    PositionState,
    RebalancePhase,
};
pub use price_tolerance::PriceTolerance;
pub use quote_currency::QuoteCurrency;
pub use timestamp_ns::TimestampNs;

/// The numeric backing type of all fixed-point monetary values.
///
/// # Generics:
/// - `D`: The constant decimal precision.
pub trait Mon<const D: u8>:
    ScaledInteger<D>
    + Copy
    + Default
    + Ord
    + std::hash::Hash
    + std::fmt::Debug
    + std::fmt::Display
{
}

impl<I, const D: u8> Mon<D> for I where
    I: ScaledInteger<D>
        + Copy
        + Default
        + Ord
        + std::hash::Hash
        + std::fmt::Debug
        + std::fmt::Display
{
}
