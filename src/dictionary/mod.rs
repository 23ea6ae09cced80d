//! Dictionary of playable words
//!
//! Holds the word list in file order, an exact-membership index, and a
//! precomputed letter signature for every word that could ever be played.

pub mod loader;

pub use loader::{DictionaryError, load_from_file, parse};

use crate::core::{MIN_WORD_LEN, Puzzle, Signature, alphabet};
use rustc_hash::FxHashSet;

/// A word that passed the alphabet and length filters
#[derive(Debug, Clone, Copy)]
struct Candidate {
    word: usize,
    signature: Signature,
    len: usize,
}

/// Immutable word list, lowercase, blank lines removed
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
    index: FxHashSet<String>,
    candidates: Vec<Candidate>,
}

impl Dictionary {
    /// Build a dictionary from raw entries
    ///
    /// Each entry is trimmed and lowercased; blank entries and repeats are
    /// dropped, keeping the first occurrence's position.
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::dictionary::Dictionary;
    ///
    /// let dict = Dictionary::from_words(["Katt ", "", "katt", "tak"]);
    /// assert_eq!(dict.words(), &["katt", "tak"]);
    /// assert!(dict.contains("katt"));
    /// ```
    pub fn from_words<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Self::default();

        for entry in entries {
            let word = entry.as_ref().trim().to_lowercase();
            if word.is_empty() || dict.index.contains(&word) {
                continue;
            }

            let len = word.chars().count();
            if len >= MIN_WORD_LEN
                && let Some(signature) = alphabet::signature(&word)
            {
                dict.candidates.push(Candidate {
                    word: dict.words.len(),
                    signature,
                    len,
                });
            }

            dict.index.insert(word.clone());
            dict.words.push(word);
        }

        dict
    }

    /// Exact membership of an already-lowercased word
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    /// All words in load order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of words long enough and spelled entirely within the alphabet
    ///
    /// Only these can ever count towards a puzzle.
    #[inline]
    #[must_use]
    pub fn playable_count(&self) -> usize {
        self.candidates.len()
    }

    /// Count the words playable under `puzzle`
    #[must_use]
    pub fn count_matches(&self, puzzle: &Puzzle) -> usize {
        self.candidates
            .iter()
            .filter(|c| puzzle.accepts(c.signature, c.len))
            .count()
    }

    /// Words playable under `puzzle`, in load order
    pub fn matches<'a>(&'a self, puzzle: &'a Puzzle) -> impl Iterator<Item = &'a str> + 'a {
        self.candidates
            .iter()
            .filter(|c| puzzle.accepts(c.signature, c.len))
            .map(|c| self.words[c.word].as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dictionary {
        Dictionary::from_words([
            "katt", "tak", "kakta", "mat", "rat", "at", "hund", "e-post", "ost", "",
        ])
    }

    #[test]
    fn from_words_normalizes_entries() {
        let dict = Dictionary::from_words(["  KATT\r", "Ö", "Åsna"]);
        assert_eq!(dict.words(), &["katt", "ö", "åsna"]);
    }

    #[test]
    fn from_words_drops_blanks_and_repeats() {
        let dict = Dictionary::from_words(["", "   ", "tak", "TAK", "tak"]);
        assert_eq!(dict.len(), 1);
        assert!(!dict.is_empty());
    }

    #[test]
    fn contains_is_exact() {
        let dict = sample();
        assert!(dict.contains("kakta"));
        assert!(!dict.contains("kak"));
        assert!(!dict.contains("KATT")); // Callers fold first
    }

    #[test]
    fn playable_count_excludes_short_and_foreign() {
        let dict = sample();
        // "at" is too short and "e-post" has a hyphen
        assert_eq!(dict.len(), 9);
        assert_eq!(dict.playable_count(), 7);
    }

    #[test]
    fn count_matches_uses_central_and_set() {
        let dict = sample();
        let puzzle = Puzzle::parse("KATMRSO", 'A').unwrap();
        assert_eq!(dict.count_matches(&puzzle), 5);

        let matched: Vec<&str> = dict.matches(&puzzle).collect();
        assert_eq!(matched, ["katt", "tak", "kakta", "mat", "rat"]);
    }

    #[test]
    fn count_matches_agrees_with_is_playable() {
        let dict = sample();
        let puzzle = Puzzle::parse("KATMRSO", 'O').unwrap();
        let expected = dict.words().iter().filter(|w| puzzle.is_playable(w)).count();
        assert_eq!(dict.count_matches(&puzzle), expected);
        assert_eq!(expected, 1); // "ost"
    }

    #[test]
    fn empty_dictionary() {
        let dict = Dictionary::default();
        assert!(dict.is_empty());
        assert_eq!(dict.playable_count(), 0);
    }
}
