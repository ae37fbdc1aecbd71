// model = "claude-opus-4-5"
// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! Inclusive-bounds binary search.
//!
//! Both searches keep `[left, right]` as the live range and stop once it is
//! empty. `right` is tracked one past its inclusive value so the range can
//! shrink to nothing at index 0 without underflow; the midpoint is still
//! the floor of the inclusive bounds.

use std::cmp::Ordering;

/// Narrow `[0, arr.len())` towards `target`.
///
/// Returns `Ok(index)` on an exact match, otherwise `Err(left)` where `left`
/// is the number of elements strictly less than `target`.
fn narrow<T: Ord>(arr: &[T], target: &T) -> Result<usize, usize> {
    let mut left = 0;
    let mut end = arr.len();

    while left < end {
        let mid = left + (end - 1 - left) / 2;
        match arr[mid].cmp(target) {
            Ordering::Equal => return Ok(mid),
            Ordering::Less => left = mid + 1,
            Ordering::Greater => end = mid,
        }
    }
    return Err(left);
}

/// Find the index of `target` in an ascending slice of distinct values.
///
/// ```
/// use drills::search::binary_search;
///
/// assert_eq!(binary_search(&[-1, 0, 3, 5, 9, 12], &9), Some(4));
/// assert_eq!(binary_search(&[-1, 0, 3, 5, 9, 12], &2), None);
/// ```
pub fn binary_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    return narrow(arr, target).ok();
}

/// Index of `target`, or the index where it would be inserted to keep the
/// slice sorted.
///
/// ```
/// use drills::search::search_insert;
///
/// assert_eq!(search_insert(&[1, 3, 5, 6], &5), 2);
/// assert_eq!(search_insert(&[1, 3, 5, 6], &2), 1);
/// assert_eq!(search_insert(&[1, 3, 5, 6], &7), 4);
/// ```
pub fn search_insert<T: Ord>(arr: &[T], target: &T) -> usize {
    return match narrow(arr, target) {
        Ok(index) => index,
        Err(left) => left,
    };
}
