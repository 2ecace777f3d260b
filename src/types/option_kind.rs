use std::fmt::Formatter;

/// The kind of option position tracked by the engine.
/// Only written (short) options require collateral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, std::hash::Hash, serde::Serialize, serde::Deserialize)]
pub enum OptionKind {
    /// A written call, which loses value as the spot price rises.
    ShortCall,
    /// A written put, which loses value as the spot price falls.
    ShortPut,
}

impl std::fmt::Display for OptionKind {
    #[mutants::skip]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}
