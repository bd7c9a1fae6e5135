//! Letter Cover - CLI
//!
//! Enumerates sets of 5-letter words with pairwise-distinct letters that
//! cover the alphabet minus at most one skipped letter.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use letter_cover::{
    commands::{analyze_word, run_count, run_search, wordlist_stats},
    core::{LetterRanks, Word},
    output::{print_analysis_result, print_count_result, print_search_summary, print_stats},
    wordlists::load_from_file,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "letter_cover",
    about = "Finds sets of five-letter words with 25 distinct letters via frequency-ordered backtracking",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the wordlist file (shorthand for the `search` subcommand)
    wordlist: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Enumerate every cover in a wordlist (default)
    Search {
        /// Path to the wordlist file
        wordlist: PathBuf,
    },

    /// Count covers using the parallel search, without printing them
    Count {
        /// Path to the wordlist file
        wordlist: PathBuf,
    },

    /// Show how a single word encodes (mask, ranks, bucket)
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Profile a wordlist: bucket sizes and letter frequencies
    Stats {
        /// Path to the wordlist file
        wordlist: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let ranks = LetterRanks::standard();

    match cli.command {
        Some(Commands::Search { wordlist }) => run_search_command(&wordlist, &ranks),
        Some(Commands::Count { wordlist }) => run_count_command(&wordlist, &ranks),
        Some(Commands::Analyze { word }) => run_analyze_command(&word, &ranks),
        Some(Commands::Stats { wordlist }) => run_stats_command(&wordlist, &ranks),
        None => match cli.wordlist {
            Some(wordlist) => run_search_command(&wordlist, &ranks),
            None => bail!("specify a wordlist file (or see --help)"),
        },
    }
}

fn load_words(path: &Path) -> Result<Vec<Word>> {
    load_from_file(path)
        .with_context(|| format!("Failed to read wordlist '{}'", path.display()))
}

fn run_search_command(wordlist: &Path, ranks: &LetterRanks) -> Result<()> {
    let words = load_words(wordlist)?;
    let summary = run_search(&words, ranks);
    print_search_summary(&summary);
    Ok(())
}

fn run_count_command(wordlist: &Path, ranks: &LetterRanks) -> Result<()> {
    let words = load_words(wordlist)?;
    let result = run_count(&words, ranks);
    print_count_result(&result);
    Ok(())
}

fn run_analyze_command(word: &str, ranks: &LetterRanks) -> Result<()> {
    let result = analyze_word(word, ranks).map_err(|e| anyhow::anyhow!(e))?;
    print_analysis_result(&result, ranks);
    Ok(())
}

fn run_stats_command(wordlist: &Path, ranks: &LetterRanks) -> Result<()> {
    let words = load_words(wordlist)?;
    let stats = wordlist_stats(&words, ranks);
    print_stats(&stats, ranks);
    Ok(())
}
