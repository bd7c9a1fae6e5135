//! Word encoding
//!
//! Turns a validated [`Word`] into a 26-bit letter-set mask plus the rank of
//! its rarest letter. Words with a repeated letter are not encodable and drop
//! out of the search universe here.

use crate::core::{LetterRanks, Word};
use std::fmt;

/// A word together with its letter-set mask and rarest-letter rank.
///
/// The mask has one bit per distinct letter, at the letter's rank position,
/// so `mask.count_ones() == 5` for every encodable word. `rarest_rank` is
/// the maximum rank among the word's letters and decides which candidate
/// bucket the word lands in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedWord {
    word: Word,
    mask: u32,
    rarest_rank: u8,
}

/// Error type for unencodable words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// The word uses the same letter twice.
    RepeatedLetter(char),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RepeatedLetter(c) => write!(f, "Word repeats the letter '{c}'"),
        }
    }
}

impl std::error::Error for EncodeError {}

impl EncodedWord {
    /// Encode a word against a rank table.
    ///
    /// Pure and deterministic: the same word and table always produce the
    /// same mask and rank.
    ///
    /// # Errors
    /// Returns `EncodeError::RepeatedLetter` if any letter occurs twice.
    ///
    /// # Examples
    /// ```
    /// use letter_cover::core::{EncodedWord, LetterRanks, Word};
    ///
    /// let ranks = LetterRanks::standard();
    /// let fjord = EncodedWord::encode(Word::new("fjord").unwrap(), &ranks).unwrap();
    /// assert_eq!(fjord.mask().count_ones(), 5);
    /// assert_eq!(fjord.rarest_rank(), ranks.rank(b'j'));
    ///
    /// assert!(EncodedWord::encode(Word::new("apple").unwrap(), &ranks).is_err());
    /// ```
    pub fn encode(word: Word, ranks: &LetterRanks) -> Result<Self, EncodeError> {
        let mut mask = 0u32;
        let mut rarest_rank = 0u8;

        for &letter in word.chars() {
            let rank = ranks.rank(letter);
            let bit = 1u32 << rank;
            if mask & bit != 0 {
                return Err(EncodeError::RepeatedLetter(letter as char));
            }
            mask |= bit;
            rarest_rank = rarest_rank.max(rank);
        }

        Ok(Self {
            word,
            mask,
            rarest_rank,
        })
    }

    /// The underlying word
    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// The word's text
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        self.word.text()
    }

    /// The 26-bit letter-set mask
    #[inline]
    #[must_use]
    pub const fn mask(&self) -> u32 {
        self.mask
    }

    /// Rank of the word's rarest letter
    #[inline]
    #[must_use]
    pub const fn rarest_rank(&self) -> u8 {
        self.rarest_rank
    }
}

impl fmt::Display for EncodedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}
