//! Public API surface for the gradebook backend.
//!
//! This file consolidates the identifier and record types shared by the
//! store, the service layer and the HTTP API.

pub use crate::models::{ExamResult, ExamType, Grade, ResultDraft, ResultPatch};
pub use crate::services::query::{ResultFilter, ResultPage};

use serde::{Deserialize, Serialize};

/// Result identifier assigned by the store.
///
/// Serialized as a decimal string on the wire (`"1"`, `"2"`, ...).
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(into = "String", try_from = "String")]
pub struct ResultId(pub u64);

impl ResultId {
    pub fn new(value: u64) -> Self {
        ResultId(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// Parse an id taken from a URL path segment.
    ///
    /// Only the canonical decimal spelling is accepted, so `"01"` or `"+1"`
    /// never alias record `"1"`.
    pub fn parse(raw: &str) -> Option<Self> {
        let canonical = !raw.is_empty()
            && raw.bytes().all(|b| b.is_ascii_digit())
            && (raw == "0" || !raw.starts_with('0'));
        if !canonical {
            return None;
        }
        raw.parse::<u64>().ok().map(ResultId)
    }
}

impl std::fmt::Display for ResultId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ResultId> for String {
    fn from(id: ResultId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for ResultId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ResultId::parse(&value).ok_or_else(|| format!("Invalid result id: {}", value))
    }
}

impl From<ResultId> for u64 {
    fn from(id: ResultId) -> Self {
        id.0
    }
}
