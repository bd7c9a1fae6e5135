//! Word analysis command
//!
//! Shows how a single word encodes: its letter-set mask, per-letter ranks,
//! and the bucket it would land in.

use crate::core::{EncodedWord, LetterRanks, Word};

/// Result of analyzing a word
#[derive(Debug)]
pub struct AnalysisResult {
    pub word: String,
    pub mask: u32,
    /// The word's letters with their ranks, rarest first.
    pub letter_ranks: Vec<(char, u8)>,
    pub rarest_letter: char,
    pub rarest_rank: u8,
}

/// Encode a word and report its search-relevant properties
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (not 5 letters or contains non-ASCII)
/// - The word repeats a letter and so can never join a cover
pub fn analyze_word(word: &str, ranks: &LetterRanks) -> Result<AnalysisResult, String> {
    let word_obj = Word::new(word).map_err(|e| format!("Invalid word: {e}"))?;
    let encoded = EncodedWord::encode(word_obj, ranks)
        .map_err(|e| format!("Word cannot join any cover: {e}"))?;

    let mut letter_ranks: Vec<(char, u8)> = encoded
        .word()
        .chars()
        .iter()
        .map(|&b| (b as char, ranks.rank(b)))
        .collect();
    letter_ranks.sort_by_key(|&(_, rank)| std::cmp::Reverse(rank));

    Ok(AnalysisResult {
        word: encoded.text().to_string(),
        mask: encoded.mask(),
        letter_ranks,
        rarest_letter: ranks.letter(encoded.rarest_rank()) as char,
        rarest_rank: encoded.rarest_rank(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_valid_word() {
        let ranks = LetterRanks::standard();
        let result = analyze_word("fjord", &ranks).unwrap();

        assert_eq!(result.word, "fjord");
        assert_eq!(result.mask.count_ones(), 5);
        assert_eq!(result.rarest_letter, 'j');
        assert_eq!(result.rarest_rank, ranks.rank(b'j'));
    }

    #[test]
    fn analyze_orders_letters_rarest_first() {
        let ranks = LetterRanks::standard();
        let result = analyze_word("fjord", &ranks).unwrap();

        assert_eq!(result.letter_ranks.first().map(|&(c, _)| c), Some('j'));
        for pair in result.letter_ranks.windows(2) {
            assert!(pair[0].1 > pair[1].1);
        }
    }

    #[test]
    fn analyze_invalid_word() {
        let ranks = LetterRanks::standard();
        assert!(analyze_word("toolong", &ranks).is_err());
        assert!(analyze_word("abc", &ranks).is_err());
    }

    #[test]
    fn analyze_repeated_letter_word() {
        let ranks = LetterRanks::standard();
        let result = analyze_word("apple", &ranks);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains('p'));
    }
}
