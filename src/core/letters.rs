//! Letter rank table
//!
//! Maps each of the 26 Latin letters to a rank in a fixed rarity ordering.
//! Rank doubles as the letter's bit position in coverage masks, so rarer
//! letters occupy higher bits and the search walks the frontier from bit 25
//! downward.

use crate::core::Word;

/// Coverage mask with all 26 letter bits set.
pub const FULL_COVER: u32 = 0x03FF_FFFF;

/// English letters ordered most common first.
///
/// A letter's rank is its position in this string, so `e` gets rank 0 and
/// `j` gets rank 25. Higher rank means rarer letter.
const COMMONEST_FIRST: &[u8; 26] = b"etaoinsrhdlucmfywgpbvkxqzj";

/// Immutable letter-to-rank table.
///
/// Built once at startup and passed by reference into the encoder and the
/// search engine. The table is always a permutation of `0..26`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterRanks {
    rank_of: [u8; 26],
    letter_of: [u8; 26],
}

impl LetterRanks {
    /// The standard ordering used for searching.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_order(COMMONEST_FIRST)
    }

    /// Build a table where rank equals position in `order` (commonest first).
    fn from_order(order: &[u8; 26]) -> Self {
        let mut rank_of = [0u8; 26];
        let mut letter_of = [0u8; 26];
        for (rank, &letter) in order.iter().enumerate() {
            rank_of[usize::from(letter - b'a')] = rank as u8;
            letter_of[rank] = letter;
        }
        Self { rank_of, letter_of }
    }

    /// Derive an ordering from the letter frequencies observed in `words`.
    ///
    /// Letters that occur more often get lower ranks; ties break
    /// alphabetically so the result is reproducible. The search itself uses
    /// [`LetterRanks::standard`]; this exists to profile a wordlist against
    /// the built-in ordering.
    #[must_use]
    pub fn from_words(words: &[Word]) -> Self {
        let counts = letter_counts(words);

        let mut letters: Vec<u8> = (b'a'..=b'z').collect();
        letters.sort_by_key(|&l| {
            let idx = usize::from(l - b'a');
            (std::cmp::Reverse(counts[idx]), l)
        });

        let order: [u8; 26] = letters.try_into().expect("exactly 26 letters");
        Self::from_order(&order)
    }

    /// Rank of a lowercase ASCII letter (0 = most common, 25 = rarest).
    #[inline]
    #[must_use]
    pub fn rank(&self, letter: u8) -> u8 {
        debug_assert!(letter.is_ascii_lowercase());
        self.rank_of[usize::from(letter - b'a')]
    }

    /// Letter holding a given rank.
    ///
    /// # Panics
    /// Panics if `rank >= 26`.
    #[inline]
    #[must_use]
    pub fn letter(&self, rank: u8) -> u8 {
        self.letter_of[usize::from(rank)]
    }
}

/// Count how often each letter occurs across `words`, indexed by `a..=z`.
#[must_use]
pub fn letter_counts(words: &[Word]) -> [usize; 26] {
    let mut counts = [0usize; 26];
    for word in words {
        for &b in word.chars() {
            counts[usize::from(b - b'a')] += 1;
        }
    }
    counts
}
