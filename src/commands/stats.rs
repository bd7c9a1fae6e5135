//! Wordlist profiling command
//!
//! Summarizes a wordlist for the search: candidate counts, bucket sizes,
//! and how the observed letter frequencies compare to the built-in ordering.

use crate::core::{LetterRanks, Word, letter_counts};
use crate::search::CandidateIndex;

/// Profile of a loaded wordlist
pub struct WordlistStats {
    pub words: usize,
    pub candidates: usize,
    pub rejected: usize,
    /// Candidate count per rank bucket.
    pub bucket_sizes: [usize; 26],
    /// Letter occurrence counts, indexed by `a..=z`.
    pub letter_counts: [usize; 26],
    /// Built-in ordering, commonest letter first.
    pub standard_order: String,
    /// Ordering derived from this wordlist, commonest letter first.
    pub observed_order: String,
}

/// Profile `words` against the rank table the search uses.
#[must_use]
pub fn wordlist_stats(words: &[Word], ranks: &LetterRanks) -> WordlistStats {
    let index = CandidateIndex::from_words(words, ranks);
    let observed = LetterRanks::from_words(words);

    WordlistStats {
        words: words.len(),
        candidates: index.len(),
        rejected: words.len() - index.len(),
        bucket_sizes: index.bucket_sizes(),
        letter_counts: letter_counts(words),
        standard_order: order_string(ranks),
        observed_order: order_string(&observed),
    }
}

fn order_string(ranks: &LetterRanks) -> String {
    (0..26).map(|rank| ranks.letter(rank) as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::words_from_slice;

    #[test]
    fn stats_counts_candidates_and_rejections() {
        let words = words_from_slice(&["fjord", "apple", "waltz"]);
        let stats = wordlist_stats(&words, &LetterRanks::standard());

        assert_eq!(stats.words, 3);
        assert_eq!(stats.candidates, 2);
        assert_eq!(stats.rejected, 1);
    }

    #[test]
    fn stats_bucket_sizes_sum_to_candidates() {
        let words = words_from_slice(&["fjord", "waltz", "nymph", "gucks", "apple"]);
        let stats = wordlist_stats(&words, &LetterRanks::standard());

        assert_eq!(stats.bucket_sizes.iter().sum::<usize>(), stats.candidates);
    }

    #[test]
    fn stats_standard_order_starts_with_e() {
        let stats = wordlist_stats(&[], &LetterRanks::standard());
        assert!(stats.standard_order.starts_with('e'));
        assert!(stats.standard_order.ends_with('j'));
        assert_eq!(stats.standard_order.len(), 26);
    }

    #[test]
    fn stats_observed_order_reflects_the_wordlist() {
        // 'a' is the only letter in every word.
        let words = words_from_slice(&["abcde", "afghi"]);
        let stats = wordlist_stats(&words, &LetterRanks::standard());
        assert!(stats.observed_order.starts_with('a'));
    }

    #[test]
    fn stats_letter_counts_match_occurrences() {
        let words = words_from_slice(&["abcde"]);
        let stats = wordlist_stats(&words, &LetterRanks::standard());
        assert_eq!(stats.letter_counts[0], 1); // a
        assert_eq!(stats.letter_counts[25], 0); // z
    }
}
