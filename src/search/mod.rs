// model = "claude-opus-4-5"
// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! Binary search and two-pointer exercises over sorted slices.
//!
//! All of these trust that their input is sorted ascending. Use
//! `crate::validate` first when that is not known.

pub mod binary;
pub mod oracle;
pub mod squares;

pub use binary::{binary_search, search_insert};
pub use oracle::{Counted, Oracle, Threshold, first_bad_version};
pub use squares::sorted_squares;
