// model = "claude-opus-4-5"
// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! Recursion and backtracking exercises.
//!
//! - `sequence`: naive recurrences (`fib`, `tribonacci`). These recompute
//!   shared subproblems on purpose so their exponential cost is visible.
//! - `backtrack`: depth-first generators that grow one path buffer, record
//!   it at the leaves, and undo each choice before trying the next.
//! - `stack`: the same generators driven by an explicit stack instead of
//!   the call stack. Output order is identical.

pub mod backtrack;
pub mod sequence;
pub mod stack;

pub use backtrack::{combine, letter_case_permutation};
pub use sequence::{fib, tribonacci};
pub use stack::{combine_stack, letter_case_permutation_stack};
