// model = "claude-opus-4-5"
// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! Precondition failures reported by `crate::validate`.

use thiserror::Error;

/// An input that an exercise does not accept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Precondition {
    /// `arr[index]` is smaller than the element before it.
    #[error("input is not ascending: element {index} is smaller than the one before it")]
    NotAscending { index: usize },
    /// `arr[index]` is not larger than the element before it.
    #[error("input is not strictly ascending: element {index} repeats or falls below the one before it")]
    NotStrictlyAscending { index: usize },
    /// Expected exactly one value occurring once.
    #[error("expected exactly one unpaired value, found {found}")]
    UnpairedCount { found: usize },
    /// A value occurs more than twice.
    #[error("value {value} occurs {count} times; at most twice is allowed")]
    Overrepresented { value: i64, count: usize },
    #[error("there are no versions to search")]
    NoVersions,
    #[error("first bad version {threshold} is outside 1..={versions}")]
    ThresholdOutOfRange { threshold: u64, versions: u64 },
}
