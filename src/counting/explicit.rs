// model = "claude-opus-4-5"
// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! Counting with a hand-managed `FxHashMap`.

use rustc_hash::FxHashMap;

/// Count every value, then return the one seen exactly once.
pub fn single_number(nums: &[i64]) -> Option<i64> {
    let mut counts: FxHashMap<i64, usize> = FxHashMap::default();
    for &num in nums {
        *counts.entry(num).or_insert(0) += 1;
    }

    for (&num, &count) in &counts {
        if count == 1 {
            return Some(num);
        }
    }
    return None;
}

/// Count `nums1`, then keep each value of `nums2` while its count lasts.
pub fn intersect(nums1: &[i64], nums2: &[i64]) -> Vec<i64> {
    let mut counts: FxHashMap<i64, usize> = FxHashMap::default();
    for &num in nums1 {
        *counts.entry(num).or_insert(0) += 1;
    }

    let mut result = Vec::new();
    for &num in nums2 {
        if let Some(count) = counts.get_mut(&num) {
            if *count > 0 {
                result.push(num);
                *count -= 1;
            }
        }
    }
    return result;
}

/// Count the characters of `s`, then spend them on `t`.
pub fn is_anagram(s: &str, t: &str) -> bool {
    // Equal char multisets imply equal UTF-8 lengths.
    if s.len() != t.len() {
        return false;
    }

    let mut counts: FxHashMap<char, usize> = FxHashMap::default();
    for c in s.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }

    for c in t.chars() {
        match counts.get_mut(&c) {
            Some(count) if *count > 0 => *count -= 1,
            _ => return false,
        }
    }
    return true;
}
