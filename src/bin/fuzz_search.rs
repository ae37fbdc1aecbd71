// model = "claude-opus-4-5"
// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! AFL fuzz harness for the binary search family.
//!
//! Input bytes become a sorted, deduplicated slice plus a target. Each
//! search is checked against a linear scan over the same slice:
//! 1. `binary_search` finds exactly the elements that are present
//! 2. `search_insert` equals the count of smaller elements
//! 3. `sorted_squares` equals squaring then sorting
//! 4. `first_bad_version` recovers the threshold it was given

use afl::fuzz;
use drills::search::{Counted, Threshold, binary_search, first_bad_version, search_insert, sorted_squares};

/// Parse `[target, values...]` as signed bytes. A value byte with the high
/// bit of its low nibble set is stretched towards the ends of the `i64`
/// range so the squares stay exercised near overflow.
fn parse(data: &[u8]) -> Option<(i64, Vec<i64>)> {
    let (&first, rest) = data.split_first()?;
    let target = first as i8 as i64;
    let mut values: Vec<i64> = rest
        .iter()
        .map(|&b| {
            let small = b as i8 as i64;
            if b & 0x08 == 0 {
                return small;
            }
            return small.saturating_mul(i64::MAX / 128);
        })
        .collect();
    values.sort();
    return Some((target, values));
}

fn main() {
    fuzz!(|data: &[u8]| {
        let Some((target, values)) = parse(data) else {
            return;
        };

        // Squares accept duplicates.
        let mut expected: Vec<u128> = values
            .iter()
            .map(|v| (v.unsigned_abs() as u128) * (v.unsigned_abs() as u128))
            .collect();
        expected.sort();
        assert_eq!(sorted_squares(&values), expected);

        let mut distinct = values;
        distinct.dedup();

        let found = binary_search(&distinct, &target);
        let linear = distinct.iter().position(|&v| v == target);
        assert_eq!(found, linear, "target {} in {:?}", target, distinct);

        let smaller = distinct.iter().filter(|&&v| v < target).count();
        assert_eq!(search_insert(&distinct, &target), smaller);

        let n = distinct.len() as u64 + 1;
        let threshold = (target.unsigned_abs() % n) + 1;
        let mut oracle = Counted::new(Threshold::new(threshold));
        assert_eq!(first_bad_version(n, &mut oracle), threshold);
        assert!(oracle.queries() <= 64 - n.leading_zeros() as u64);
    });
}
