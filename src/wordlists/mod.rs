//! Word lists
//!
//! Loading and normalization of candidate word lists. All per-line rejection
//! is silent; only an unreadable file is an error.

pub mod loader;

pub use loader::{load_from_file, words_from_slice};
