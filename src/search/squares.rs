// model = "claude-opus-4-5"
// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! Squares of a sorted slice, in sorted order, by two pointers.

/// Square every element of an ascending slice and return the squares in
/// ascending order.
///
/// The largest square is always at one of the two ends, so the pointers walk
/// inward and the output fills from the back. Runs in O(n).
///
/// Squares are `u128`: the square of any `i64`, `i64::MIN` included, fits.
///
/// ```
/// use drills::search::sorted_squares;
///
/// assert_eq!(sorted_squares(&[-4, -1, 0, 3, 10]), vec![0, 1, 9, 16, 100]);
/// ```
pub fn sorted_squares(arr: &[i64]) -> Vec<u128> {
    let mut result = vec![0; arr.len()];
    if arr.is_empty() {
        return result;
    }

    let mut left = 0;
    let mut right = arr.len() - 1;
    let mut position = arr.len();

    while left <= right {
        position -= 1;
        let (low, high) = (arr[left].unsigned_abs(), arr[right].unsigned_abs());
        if low > high {
            result[position] = square(low);
            left += 1;
        } else {
            result[position] = square(high);
            if right == 0 {
                break;
            }
            right -= 1;
        }
    }
    return result;
}

fn square(magnitude: u64) -> u128 {
    let wide = magnitude as u128;
    return wide * wide;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_signs() {
        assert_eq!(sorted_squares(&[-4, -1, 0, 3, 10]), vec![0, 1, 9, 16, 100]);
        assert_eq!(sorted_squares(&[-7, -3, 2, 3, 11]), vec![4, 9, 9, 49, 121]);
    }

    #[test]
    fn all_negative() {
        assert_eq!(sorted_squares(&[-5, -3, -1]), vec![1, 9, 25]);
    }

    #[test]
    fn all_non_negative() {
        assert_eq!(sorted_squares(&[0, 2, 4]), vec![0, 4, 16]);
    }

    #[test]
    fn single_and_empty() {
        assert_eq!(sorted_squares(&[-2]), vec![4]);
        assert!(sorted_squares(&[]).is_empty());
    }

    #[test]
    fn equal_magnitudes() {
        assert_eq!(sorted_squares(&[-3, -3, 3, 3]), vec![9, 9, 9, 9]);
    }

    #[test]
    fn large_magnitudes_do_not_overflow() {
        assert_eq!(
            sorted_squares(&[-4_000_000_000, 0, 1]),
            vec![0, 1, 16_000_000_000_000_000_000]
        );
    }

    #[test]
    fn extreme_values() {
        let min_square = 1u128 << 126;
        let max_square = (i64::MAX as u128) * (i64::MAX as u128);
        assert_eq!(sorted_squares(&[i64::MIN, i64::MAX]), vec![max_square, min_square]);
        assert_eq!(sorted_squares(&[i64::MIN, -1, 0]), vec![0, 1, min_square]);
    }
}
