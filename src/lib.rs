//! Letter Cover
//!
//! Exhaustively enumerates combinations of 5-letter words whose letters are
//! pairwise distinct and together span the alphabet, with a one-letter skip
//! allowance (five words cover 25 letters; one letter goes uncovered).
//!
//! # Quick Start
//!
//! ```rust
//! use letter_cover::core::LetterRanks;
//! use letter_cover::search::{CandidateIndex, SearchEngine};
//! use letter_cover::wordlists::words_from_slice;
//!
//! let ranks = LetterRanks::standard();
//! let words = words_from_slice(&["abcde", "fghij", "klmno", "pqrst", "uvwxy"]);
//!
//! let index = CandidateIndex::from_words(&words, &ranks);
//! let engine = SearchEngine::new(&index);
//!
//! // These five words cover every letter except 'z'.
//! assert_eq!(engine.collect().len(), 1);
//! ```

// Core domain types
pub mod core;

// Candidate index and backtracking engine
pub mod search;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
