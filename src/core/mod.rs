//! Core domain types
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod encoded;
mod letters;
mod word;

pub use encoded::{EncodeError, EncodedWord};
pub use letters::{FULL_COVER, LetterRanks, letter_counts};
pub use word::{Word, WordError};
