use std::num::NonZeroU16;

use const_decimal::Decimal;
use getset::{
    CopyGetters,
    Getters,
};

use crate::types::{
    BufferFraction,
    ConfigError,
    Market,
    Mon,
};

/// The capacity of the position registry in the reference setup.
pub const DEFAULT_CAPACITY: u16 = 10;

#[derive(Debug, Clone, Getters, CopyGetters)]
/// Define the `Rebalancer` configuration.
///
/// Generics:
/// - `I`: The numeric data type of currencies.
/// - `D`: The constant decimal precision of the currencies.
pub struct Config<I, const D: u8>
where
    I: Mon<D>,
{
    /// The magnitude of the adverse spot move every position is collateralized against.
    #[getset(get_copy = "pub")]
    buffer_fraction: BufferFraction<I, D>,

    /// The maximum number of positions the `Rebalancer` tracks at once.
    #[getset(get_copy = "pub")]
    capacity: NonZeroU16,

    /// The underlying market whose spot price is used.
    #[getset(get = "pub")]
    market: Market,
}

impl<I, const D: u8> Config<I, D>
where
    I: Mon<D>,
{
    /// Create a new Config.
    ///
    /// # Arguments:
    /// `buffer_fraction`: The stress scenario as a fraction in `[0, 1)`, e.g. 0.3 for a 30% adverse move.
    /// `capacity`: The maximum number of tracked positions, must be > 0.
    /// `market`: The market of the underlying whose spot price is used.
    ///
    /// # Returns:
    /// Either a valid `Config` or a `ConfigError`.
    pub fn new(
        buffer_fraction: Decimal<I, D>,
        capacity: u16,
        market: impl Into<Market>,
    ) -> Result<Self, ConfigError> {
        let buffer_fraction = BufferFraction::new(buffer_fraction)?;
        let capacity = NonZeroU16::new(capacity).ok_or(ConfigError::InvalidCapacity)?;

        Ok(Config {
            buffer_fraction,
            capacity,
            market: market.into(),
        })
    }
}
