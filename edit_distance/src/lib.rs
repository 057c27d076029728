//! A generalized sequence edit-distance engine.
//!
//! Lifts classical Wagner-Fischer from "strings" to "arbitrary indexed
//! sequences with caller-supplied per-position costs", and recovers an
//! optimal alignment and longest common subsequence on request. Pure
//! library core: no I/O, no persistent state, every call is
//! compute-and-return.

mod alignment;
mod dp;
mod matrix;
mod ops;

pub use alignment::Alignment;
pub use dp::{distance_general, distance_string};
pub use matrix::{align_general, distance_string_full};
pub use ops::Op;
