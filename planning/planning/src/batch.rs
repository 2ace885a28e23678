use std::fmt::{Display, Formatter};

/// Identifies every assignment record created by a single assignment action.
///
/// Ids are minted from a session-scoped monotonic counter; the counter is
/// serialized with the session so a restored session keeps minting unique ids.
#[derive(
    Debug,
    serde::Serialize,
    serde::Deserialize,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash
)]
pub struct BatchId(u64);

impl BatchId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl Display for BatchId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
