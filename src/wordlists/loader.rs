//! Word list loading utilities
//!
//! Provides functions to load candidate word lists from files or string slices.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Lines are trimmed and lowercased; blank lines, lines that are not exactly
/// five ASCII letters, and exact repeats of earlier lines are skipped
/// silently. The surviving words keep their first-seen order, which fixes
/// the enumeration order of search results.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use letter_cover::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words_alpha.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(content.lines()))
}

/// Convert a string slice to a Word vector, skipping invalid entries.
///
/// # Examples
/// ```
/// use letter_cover::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["fjord", "toolong", "waltz"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    words_from_lines(slice.iter().copied())
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<Word> {
    let mut seen: FxHashSet<String> = FxHashSet::default();
    lines
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            let word = Word::new(trimmed).ok()?;
            seen.insert(word.text().to_string()).then_some(word)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["fjord", "waltz", "nymph"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "fjord");
        assert_eq!(words[1].text(), "waltz");
        assert_eq!(words[2].text(), "nymph");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["fjord", "toolong", "abc", "waltz"];
        let words = words_from_slice(input);

        // Only "fjord" and "waltz" are valid 5-letter words
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "fjord");
        assert_eq!(words[1].text(), "waltz");
    }

    #[test]
    fn words_from_slice_keeps_repeated_letter_words() {
        // "apple" passes loading; it drops out at encoding time instead.
        let words = words_from_slice(&["apple", "fjord"]);
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn words_from_slice_dedups_first_seen() {
        let input = &["fjord", "waltz", "fjord", "FJORD"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "fjord");
        assert_eq!(words[1].text(), "waltz");
    }

    #[test]
    fn words_from_slice_trims_whitespace() {
        let words = words_from_slice(&["  fjord ", "\twaltz"]);
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        let words = words_from_slice(input);
        assert_eq!(words.len(), 0);
    }

    #[test]
    fn load_from_missing_file_errors() {
        assert!(load_from_file("definitely/not/a/real/file.txt").is_err());
    }
}
