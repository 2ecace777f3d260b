/// An error with the configuration.
#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
#[allow(missing_docs, reason = "Self documenting")]
pub enum ConfigError {
    #[error("The buffer fraction must lie in [0, 1)")]
    InvalidBufferFraction,

    #[error("The position registry capacity must be > 0")]
    InvalidCapacity,
}
