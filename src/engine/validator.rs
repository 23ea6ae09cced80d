//! Word validation
//!
//! Checks run in a fixed order and the first failure wins, since only one
//! message is shown to the player:
//! 1. contains the central letter
//! 2. at least three characters
//! 3. only letters from the set
//! 4. present in the dictionary

use crate::core::{LetterSet, MIN_WORD_LEN, Puzzle, alphabet};
use crate::dictionary::Dictionary;
use thiserror::Error;

/// Why a submitted word was turned down
///
/// The display text is the message shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Rejection {
    #[error("Ditt ord saknar den centrala bokstaven!")]
    MissingCentralLetter,
    #[error("Ditt ord är för kort, det måste ha minst 3 bokstäver.")]
    TooShort,
    #[error("Ditt ord innehåller bokstäver som inte finns bland de tillåtna.")]
    InvalidLetters,
    #[error("Ditt ord finns inte i den svenska ordlistan.")]
    NotInDictionary,
}

impl Rejection {
    /// Stable identifier, independent of the message language
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::MissingCentralLetter => "MISSING_CENTRAL_LETTER",
            Self::TooShort => "TOO_SHORT",
            Self::InvalidLetters => "INVALID_LETTERS",
            Self::NotInDictionary => "NOT_IN_DICTIONARY",
        }
    }
}

/// Validate a candidate word
///
/// `central` does not have to belong to `letters`; a central letter outside
/// the set simply makes every word fail the first check.
///
/// # Errors
///
/// Returns the first failed check as a [`Rejection`].
///
/// # Examples
/// ```
/// use spelling_bee::core::LetterSet;
/// use spelling_bee::dictionary::Dictionary;
/// use spelling_bee::engine::{Rejection, validate};
///
/// let letters = LetterSet::new("KATROSE".chars()).unwrap();
/// let dict = Dictionary::from_words(["kata"]);
///
/// assert_eq!(validate("Kata", &letters, 'A', &dict), Ok(()));
/// assert_eq!(validate("kas", &letters, 'A', &dict), Err(Rejection::NotInDictionary));
/// ```
pub fn validate(
    word: &str,
    letters: &LetterSet,
    central: char,
    dictionary: &Dictionary,
) -> Result<(), Rejection> {
    // Letters are folded one at a time, the same way word signatures are
    let central = alphabet::fold_upper(central);
    if central.is_none() || !word.chars().any(|c| alphabet::fold_upper(c) == central) {
        return Err(Rejection::MissingCentralLetter);
    }

    if word.chars().count() < MIN_WORD_LEN {
        return Err(Rejection::TooShort);
    }

    if !word.chars().all(|c| letters.contains(c)) {
        return Err(Rejection::InvalidLetters);
    }

    if !dictionary.contains(&word.to_lowercase()) {
        return Err(Rejection::NotInDictionary);
    }

    Ok(())
}

/// [`validate`] against a puzzle's letters and central letter
///
/// # Errors
///
/// Returns the first failed check as a [`Rejection`].
pub fn validate_for(word: &str, puzzle: &Puzzle, dictionary: &Dictionary) -> Result<(), Rejection> {
    validate(word, puzzle.letters(), puzzle.central(), dictionary)
}
