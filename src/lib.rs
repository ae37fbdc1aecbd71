// model = "claude-opus-4-5"
// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! Drills - small algorithm exercises grouped by technique.
//!
//! Every function is pure: it takes explicit inputs, keeps its working
//! storage private, and returns a value.
//!
//! | Module | Technique | Exercises |
//! |--------|-----------|-----------|
//! | `counting` | Frequency counting | single number, intersection, anagram |
//! | `search` | Binary search, two pointers | search, insert position, squares, first bad version |
//! | `recursion` | Recursion, backtracking | fibonacci, tribonacci, letter case, combinations |
//!
//! The algorithms trust their inputs. The `validate` module checks the
//! preconditions up front for callers that want a `Precondition` error
//! instead of an unspecified answer.
//!
//! # Quick Start
//!
//! ```
//! use drills::counting::{Assisted, Counting, Explicit};
//! use drills::recursion::combine;
//! use drills::search::{Threshold, first_bad_version};
//!
//! assert_eq!(Explicit.single_number(&[4, 1, 2, 1, 2]), Some(4));
//! assert_eq!(Assisted.intersect(&[4, 9, 5], &[9, 4, 9, 8, 4]), vec![9, 4]);
//!
//! let mut oracle = Threshold::new(4);
//! assert_eq!(first_bad_version(5, &mut oracle), 4);
//!
//! assert_eq!(combine(3, 2), vec![vec![1, 2], vec![1, 3], vec![2, 3]]);
//! ```

pub mod counting;
pub mod error;
pub mod recursion;
pub mod search;
pub mod validate;
