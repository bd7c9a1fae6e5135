//! Formatting utilities for terminal output

use crate::core::LetterRanks;

/// Render a letter-set mask as letters, rarest first.
#[must_use]
pub fn mask_to_letters(mask: u32, ranks: &LetterRanks) -> String {
    (0..26u8)
        .rev()
        .filter(|&rank| mask & (1 << rank) != 0)
        .map(|rank| ranks.letter(rank) as char)
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max.max(f64::EPSILON)) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a bucket size as a bar scaled against the largest bucket
#[must_use]
pub fn bucket_bar(size: usize, largest: usize, width: usize) -> String {
    create_progress_bar(size as f64, largest as f64, width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EncodedWord, Word};

    #[test]
    fn mask_to_letters_rarest_first() {
        let ranks = LetterRanks::standard();
        let word = EncodedWord::encode(Word::new("fjord").unwrap(), &ranks).unwrap();
        // Ranks: j=25, f=14, d=9, r=7, o=3.
        assert_eq!(mask_to_letters(word.mask(), &ranks), "jfdro");
    }

    #[test]
    fn mask_to_letters_empty_mask() {
        let ranks = LetterRanks::standard();
        assert_eq!(mask_to_letters(0, &ranks), "");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn bucket_bar_zero_largest_stays_empty() {
        let bar = bucket_bar(0, 0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }
}
