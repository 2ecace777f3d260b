use std::fmt::Display;

/// The unique and stable identifier of an option position, as assigned by the position source.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    std::hash::Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct PositionId(u64);

impl From<u64> for PositionId {
    #[inline(always)]
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<PositionId> for u64 {
    #[inline(always)]
    fn from(val: PositionId) -> Self {
        val.0
    }
}

impl Display for PositionId {
    #[mutants::skip]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
