//! Candidate index
//!
//! Buckets encoded words by the rank of their rarest letter. The engine only
//! ever looks at the bucket for the frontier rank, which keeps the branching
//! factor down to the words that can actually cover the next letter.

use crate::core::{EncodedWord, LetterRanks, Word};

/// 26 buckets of candidate words, one per rank.
///
/// Bucket `r` holds every word whose rarest letter has rank `r`, in input
/// order. Built once from the validated wordlist and read-only during the
/// search; first-seen words are tried first, which fixes the enumeration
/// order of results.
#[derive(Debug, Clone, Default)]
pub struct CandidateIndex {
    buckets: [Vec<EncodedWord>; 26],
}

impl CandidateIndex {
    /// Build an index from already-encoded words.
    pub fn build(words: impl IntoIterator<Item = EncodedWord>) -> Self {
        let mut index = Self::default();
        for word in words {
            index.buckets[usize::from(word.rarest_rank())].push(word);
        }
        index
    }

    /// Encode `words` against `ranks` and bucket the encodable ones.
    ///
    /// Words with a repeated letter are silently dropped; the rejection
    /// count is `words.len() - index.len()`.
    #[must_use]
    pub fn from_words(words: &[Word], ranks: &LetterRanks) -> Self {
        Self::build(
            words
                .iter()
                .filter_map(|w| EncodedWord::encode(w.clone(), ranks).ok()),
        )
    }

    /// The words whose rarest letter has the given rank.
    ///
    /// # Panics
    /// Panics if `rank >= 26`.
    #[inline]
    #[must_use]
    pub fn bucket(&self, rank: u8) -> &[EncodedWord] {
        &self.buckets[usize::from(rank)]
    }

    /// Number of words in each bucket, indexed by rank.
    #[must_use]
    pub fn bucket_sizes(&self) -> [usize; 26] {
        std::array::from_fn(|r| self.buckets[r].len())
    }

    /// Total number of indexed words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Whether the index holds no words at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }
}
