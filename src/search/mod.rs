//! Cover search
//!
//! The candidate index and the backtracking engine that enumerates
//! letter-disjoint word combinations.

mod engine;
mod index;

pub use engine::{Combination, SearchEngine};
pub use index::CandidateIndex;
