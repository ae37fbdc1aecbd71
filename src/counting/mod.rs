// model = "claude-opus-4-5"
// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! Frequency-counting exercises.
//!
//! Each exercise comes in two strategies that must agree on every valid
//! input:
//!
//! | Strategy | single_number | intersect | is_anagram |
//! |----------|---------------|-----------|------------|
//! | `Explicit` | count map, scan for 1 | count map, decrement | count map, decrement |
//! | `Assisted` | XOR fold | `Counter::take` | compare two `Counter`s |
//!
//! The `Counting` trait lets the conformance suite run the same checks
//! against both.

pub mod assisted;
pub mod counter;
pub mod explicit;

pub use counter::Counter;

/// The frequency-counting exercises, one method per problem.
pub trait Counting {
    /// Find the value that occurs once when every other value occurs twice.
    ///
    /// Returns `None` when the strategy can tell that no value is unpaired.
    /// Strategies that cannot tell (XOR) always return `Some`.
    fn single_number(&self, nums: &[i64]) -> Option<i64>;

    /// Multiset intersection of `nums1` and `nums2`.
    ///
    /// Each shared value appears `min(count1, count2)` times, in the order
    /// it is met while scanning `nums2`.
    fn intersect(&self, nums1: &[i64], nums2: &[i64]) -> Vec<i64>;

    /// True iff `t` is a permutation of the characters of `s`.
    fn is_anagram(&self, s: &str, t: &str) -> bool;

    /// A short name for reports.
    fn name(&self) -> &'static str;
}

/// Explicit associative counting with a hash map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Explicit;

/// Bitwise and library-assisted counting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Assisted;

impl Counting for Explicit {
    fn single_number(&self, nums: &[i64]) -> Option<i64> {
        return explicit::single_number(nums);
    }

    fn intersect(&self, nums1: &[i64], nums2: &[i64]) -> Vec<i64> {
        return explicit::intersect(nums1, nums2);
    }

    fn is_anagram(&self, s: &str, t: &str) -> bool {
        return explicit::is_anagram(s, t);
    }

    fn name(&self) -> &'static str {
        return "explicit";
    }
}

impl Counting for Assisted {
    fn single_number(&self, nums: &[i64]) -> Option<i64> {
        return Some(assisted::single_number(nums));
    }

    fn intersect(&self, nums1: &[i64], nums2: &[i64]) -> Vec<i64> {
        return assisted::intersect(nums1, nums2);
    }

    fn is_anagram(&self, s: &str, t: &str) -> bool {
        return assisted::is_anagram(s, t);
    }

    fn name(&self) -> &'static str {
        return "assisted";
    }
}
