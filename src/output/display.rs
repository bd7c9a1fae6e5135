//! Display functions for command results

use super::formatters::{bucket_bar, mask_to_letters};
use crate::commands::{AnalysisResult, CountResult, SearchSummary, WordlistStats};
use crate::core::LetterRanks;
use colored::Colorize;

/// Print the summary of a streaming search run
pub fn print_search_summary(summary: &SearchSummary) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Words loaded:     {} ({} rejected for repeated letters)",
        summary.candidates.to_string().bright_yellow(),
        summary.rejected
    );
    println!(
        "Covers found:     {}",
        summary.solutions.to_string().bright_yellow().bold()
    );
    println!("Time taken:       {:.2}s", summary.duration.as_secs_f64());
    println!("{}", "─".repeat(60).cyan());
}

/// Print the result of a counting run
pub fn print_count_result(result: &CountResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "COVER COUNT".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Words loaded:     {}", result.words);
    println!(
        "   Candidates:       {} ({} rejected)",
        result.candidates, result.rejected
    );
    println!(
        "   Covers found:     {}",
        result.solutions.to_string().bright_yellow().bold()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!(
        "   Candidates/sec:   {:.1}",
        result.candidates_per_second()
    );
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult, ranks: &LetterRanks) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENCODING:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n   Mask:          {:#08x} ({:026b})",
        result.mask, result.mask
    );
    println!(
        "   Letters:       {} (rarest first)",
        mask_to_letters(result.mask, ranks).bright_yellow()
    );
    for &(letter, rank) in &result.letter_ranks {
        println!("      {letter}  rank {rank:2}");
    }
    println!(
        "   Bucket:        {} (rarest letter '{}')",
        result.rarest_rank,
        result.rarest_letter.to_string().green()
    );
}

/// Print a wordlist profile
pub fn print_stats(stats: &WordlistStats, ranks: &LetterRanks) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORDLIST PROFILE".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Words loaded:     {}", stats.words);
    println!(
        "   Candidates:       {} ({} rejected for repeated letters)",
        stats.candidates.to_string().bright_yellow(),
        stats.rejected
    );

    println!("\n📊 {}", "Bucket sizes (rarest rank first):".bright_cyan().bold());
    let largest = stats.bucket_sizes.iter().copied().max().unwrap_or(0);
    for rank in (0..26u8).rev() {
        let size = stats.bucket_sizes[usize::from(rank)];
        let bar = bucket_bar(size, largest, 40);
        let letter = ranks.letter(rank) as char;
        println!("   {letter} (rank {rank:2}): {} {size:5}", bar.green());
    }

    println!("\n📈 {}", "Letter ordering (commonest first):".bright_cyan().bold());
    println!("   Built-in:  {}", stats.standard_order);
    println!("   Observed:  {}", stats.observed_order.bright_yellow());
    if stats.standard_order == stats.observed_order {
        println!("   {}", "The wordlist matches the built-in ordering.".green());
    }
}
