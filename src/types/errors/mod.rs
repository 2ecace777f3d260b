mod config;
mod main;
mod oracle;
mod registry;
mod trade;

pub use config::ConfigError;
pub use main::*;
pub use oracle::SpotPriceUnavailable;
pub use registry::*;
pub use trade::*;
