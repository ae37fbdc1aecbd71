// model = "claude-opus-4-5"
// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! Opt-in precondition checks.
//!
//! The exercises themselves never validate; an input outside their contract
//! gives an unspecified answer. Run these first to get a `Precondition`
//! error instead.

use rustc_hash::FxHashMap;

use crate::error::Precondition;

/// Every element is at least the one before it.
pub fn ascending<T: Ord>(arr: &[T]) -> Result<(), Precondition> {
    for (i, pair) in arr.windows(2).enumerate() {
        if pair[1] < pair[0] {
            return Err(Precondition::NotAscending { index: i + 1 });
        }
    }
    return Ok(());
}

/// Every element is larger than the one before it.
pub fn strictly_ascending<T: Ord>(arr: &[T]) -> Result<(), Precondition> {
    for (i, pair) in arr.windows(2).enumerate() {
        if pair[1] <= pair[0] {
            return Err(Precondition::NotStrictlyAscending { index: i + 1 });
        }
    }
    return Ok(());
}

/// Every value occurs exactly twice, except one value that occurs once.
pub fn paired_except_one(nums: &[i64]) -> Result<(), Precondition> {
    let mut counts: FxHashMap<i64, usize> = FxHashMap::default();
    for &num in nums {
        *counts.entry(num).or_insert(0) += 1;
    }

    let mut unpaired = 0;
    // Report the smallest offender so the message is deterministic.
    let mut worst: Option<(i64, usize)> = None;
    for (&value, &count) in &counts {
        match count {
            1 => unpaired += 1,
            2 => {}
            _ => {
                if worst.is_none_or(|(v, _)| value < v) {
                    worst = Some((value, count));
                }
            }
        }
    }

    if let Some((value, count)) = worst {
        return Err(Precondition::Overrepresented { value, count });
    }
    if unpaired != 1 {
        return Err(Precondition::UnpairedCount { found: unpaired });
    }
    return Ok(());
}

/// `1..=versions` is non-empty and contains `threshold`.
pub fn versions(versions: u64, threshold: u64) -> Result<(), Precondition> {
    if versions == 0 {
        return Err(Precondition::NoVersions);
    }
    if threshold == 0 || threshold > versions {
        return Err(Precondition::ThresholdOutOfRange { threshold, versions });
    }
    return Ok(());
}
