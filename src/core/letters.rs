//! Letter sets and puzzles
//!
//! A [`LetterSet`] is seven distinct alphabet letters; a [`Puzzle`] pairs it
//! with the central letter every answer must contain.

use super::alphabet::{self, Signature};
use std::fmt;
use thiserror::Error;

/// Number of letters in every puzzle
pub const SET_SIZE: usize = 7;

/// Minimum length of a playable word, in characters
pub const MIN_WORD_LEN: usize = 3;

/// Error type for invalid letter sets
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LetterSetError {
    #[error("a letter set needs exactly 7 letters, got {0}")]
    WrongSize(usize),
    #[error("letter '{0}' appears more than once")]
    Duplicate(char),
    #[error("'{0}' is not a letter of the Swedish alphabet")]
    NotInAlphabet(char),
    #[error("central letter '{0}' is not part of the letter set")]
    CentralNotInSet(char),
}

/// Seven distinct uppercase letters
///
/// Letters keep the order they were given in; the signature is what matching
/// and membership use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterSet {
    letters: [char; SET_SIZE],
    signature: Signature,
}

impl LetterSet {
    /// Build a letter set from any seven letters, case-folded
    ///
    /// # Errors
    /// Returns `LetterSetError` if:
    /// - A character is not part of the alphabet
    /// - A letter occurs twice
    /// - There are not exactly 7 letters
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::core::LetterSet;
    ///
    /// let set = LetterSet::new("katrose".chars()).unwrap();
    /// assert!(set.contains('K'));
    /// assert!(set.contains('s'));
    /// assert!(!set.contains('B'));
    ///
    /// assert!(LetterSet::new("kat".chars()).is_err());
    /// ```
    pub fn new(letters: impl IntoIterator<Item = char>) -> Result<Self, LetterSetError> {
        let mut folded = Vec::with_capacity(SET_SIZE);
        let mut signature: Signature = 0;

        for c in letters {
            let upper = alphabet::fold_upper(c).ok_or(LetterSetError::NotInAlphabet(c))?;
            let bit = alphabet::bit(upper).ok_or(LetterSetError::NotInAlphabet(c))?;
            if signature & bit != 0 {
                return Err(LetterSetError::Duplicate(upper));
            }
            signature |= bit;
            folded.push(upper);
        }

        let letters: [char; SET_SIZE] = folded
            .as_slice()
            .try_into()
            .map_err(|_| LetterSetError::WrongSize(folded.len()))?;

        Ok(Self { letters, signature })
    }

    /// Build from letters already known to be distinct alphabet members
    pub(crate) fn from_drawn(letters: [char; SET_SIZE]) -> Self {
        let signature = letters
            .iter()
            .filter_map(|&c| alphabet::bit(c))
            .fold(0, |acc, bit| acc | bit);
        debug_assert_eq!(signature.count_ones() as usize, SET_SIZE);
        Self { letters, signature }
    }

    /// The letters in construction order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[char; SET_SIZE] {
        &self.letters
    }

    /// Bitmask of the set's letters
    #[inline]
    #[must_use]
    pub const fn signature(&self) -> Signature {
        self.signature
    }

    /// Check membership of a single character, case-insensitively
    #[inline]
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        alphabet::bit(c).is_some_and(|bit| self.signature & bit != 0)
    }

    /// Check that a word (already known to have a signature) only uses letters
    /// from this set
    #[inline]
    #[must_use]
    pub const fn covers(&self, word_signature: Signature) -> bool {
        word_signature & !self.signature == 0
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.letters {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// A letter set plus its central letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Puzzle {
    letters: LetterSet,
    central: char,
    central_bit: Signature,
}

impl Puzzle {
    /// Pair a letter set with a central letter
    ///
    /// # Errors
    /// Returns `LetterSetError::CentralNotInSet` if the central letter is not
    /// a member of `letters`.
    pub fn new(letters: LetterSet, central: char) -> Result<Self, LetterSetError> {
        let upper = alphabet::fold_upper(central).ok_or(LetterSetError::NotInAlphabet(central))?;
        let central_bit = alphabet::bit(upper).ok_or(LetterSetError::NotInAlphabet(central))?;
        if !letters.contains(upper) {
            return Err(LetterSetError::CentralNotInSet(upper));
        }
        Ok(Self {
            letters,
            central: upper,
            central_bit,
        })
    }

    /// Pick the central letter by position in the set
    pub(crate) fn from_drawn(letters: LetterSet, central_index: usize) -> Self {
        let central = letters.letters[central_index % SET_SIZE];
        Self {
            letters,
            central,
            central_bit: alphabet::bit(central).unwrap_or_default(),
        }
    }

    /// Parse a puzzle from a 7-letter string and a central letter
    ///
    /// # Errors
    /// Returns `LetterSetError` if the letters or the central letter are invalid.
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::core::Puzzle;
    ///
    /// let puzzle = Puzzle::parse("KATROSE", 'a').unwrap();
    /// assert_eq!(puzzle.central(), 'A');
    /// assert!(Puzzle::parse("KATROSE", 'B').is_err());
    /// ```
    pub fn parse(letters: &str, central: char) -> Result<Self, LetterSetError> {
        Self::new(LetterSet::new(letters.chars())?, central)
    }

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &LetterSet {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub const fn central(&self) -> char {
        self.central
    }

    /// Whether a word with the given signature and length is playable here
    ///
    /// Playable means at least [`MIN_WORD_LEN`] characters, containing the
    /// central letter, and using only letters of the set. Letters may repeat.
    #[inline]
    #[must_use]
    pub const fn accepts(&self, word_signature: Signature, char_len: usize) -> bool {
        char_len >= MIN_WORD_LEN
            && word_signature & self.central_bit != 0
            && self.letters.covers(word_signature)
    }

    /// Same as [`Puzzle::accepts`], for an arbitrary string
    #[must_use]
    pub fn is_playable(&self, word: &str) -> bool {
        alphabet::signature(word).is_some_and(|sig| self.accepts(sig, word.chars().count()))
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.letters, self.central)
    }
}
