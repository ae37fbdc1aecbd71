// model = "claude-opus-4-5"
// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! Counting with XOR and the `Counter` multiset.

use super::counter::Counter;

/// XOR every value together. Pairs cancel (`a ^ a == 0`), leaving the
/// unpaired value.
///
/// An input without exactly one unpaired value gives a meaningless answer;
/// the empty input gives 0.
pub fn single_number(nums: &[i64]) -> i64 {
    return nums.iter().fold(0, |acc, &num| acc ^ num);
}

pub fn intersect(nums1: &[i64], nums2: &[i64]) -> Vec<i64> {
    let mut counts: Counter<i64> = nums1.iter().copied().collect();
    return nums2
        .iter()
        .copied()
        .filter(|num| counts.take(num))
        .collect();
}

pub fn is_anagram(s: &str, t: &str) -> bool {
    return s.chars().collect::<Counter<char>>() == t.chars().collect::<Counter<char>>();
}
