//! Command implementations

pub mod analyze;
pub mod count;
pub mod search;
pub mod stats;

pub use analyze::{AnalysisResult, analyze_word};
pub use count::{CountResult, run_count};
pub use search::{SearchSummary, run_search};
pub use stats::{WordlistStats, wordlist_stats};
