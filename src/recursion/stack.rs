// model = "claude-opus-4-5"
// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! Iterative twins of the backtracking generators.
//!
//! Each stack entry is a partial path plus where to continue from. Children
//! are pushed in reverse so the first alternative is popped first, which
//! reproduces the recursive output order exactly.

use super::backtrack::{Path, has_case};

/// Same output as `letter_case_permutation`, without recursion.
pub fn letter_case_permutation_stack(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut result = Vec::new();
    let mut stack: Vec<(usize, String)> = vec![(0, String::with_capacity(s.len()))];

    while let Some((index, path)) = stack.pop() {
        if index == chars.len() {
            result.push(path);
            continue;
        }

        let c = chars[index];
        if !has_case(c) {
            let mut next = path;
            next.push(c);
            stack.push((index + 1, next));
            continue;
        }

        let mut upper = path.clone();
        upper.extend(c.to_uppercase());
        stack.push((index + 1, upper));

        let mut lower = path;
        lower.extend(c.to_lowercase());
        stack.push((index + 1, lower));
    }
    return result;
}

/// Same output as `combine`, without recursion.
pub fn combine_stack(n: u32, k: u32) -> Vec<Vec<u32>> {
    let k = k as usize;
    let mut result = Vec::new();
    let mut stack: Vec<(u32, Path)> = vec![(1, Path::new())];

    while let Some((start, path)) = stack.pop() {
        if path.len() == k {
            result.push(path.to_vec());
            continue;
        }

        for i in (start..=n).rev() {
            let mut next = path.clone();
            next.push(i);
            stack.push((i + 1, next));
        }
    }
    return result;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recursion::backtrack::{combine, letter_case_permutation};

    #[test]
    fn letter_case_matches_recursive_order() {
        for s in ["", "a1b2", "3z4", "xyz", "Q", "ab-CD"] {
            assert_eq!(letter_case_permutation_stack(s), letter_case_permutation(s), "{:?}", s);
        }
    }

    #[test]
    fn combine_matches_recursive_order() {
        for n in 0..=7 {
            for k in 0..=n + 1 {
                assert_eq!(combine_stack(n, k), combine(n, k), "n={} k={}", n, k);
            }
        }
    }
}
