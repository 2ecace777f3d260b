/// Identifies the underlying market whose spot price drives the stress scenario, e.g. "ETH-USD".
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    std::hash::Hash,
    derive_more::Display,
    derive_more::From,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Market(String);

impl From<&str> for Market {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for Market {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
