//! Check command
//!
//! Validates a single word against letters given on the command line.

use crate::core::{LetterSet, LetterSetError};
use crate::dictionary::Dictionary;
use crate::engine::{Rejection, validate};

/// Result of checking one word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub word: String,
    pub letters: LetterSet,
    pub central: char,
    pub verdict: Result<(), Rejection>,
}

impl CheckResult {
    /// Points the word would score if accepted
    #[must_use]
    pub fn points(&self) -> usize {
        if self.verdict.is_ok() {
            self.word.chars().count()
        } else {
            0
        }
    }
}

/// Validate `word` against `letters` and `central`
///
/// The central letter need not be one of the seven; such a check always
/// fails on the central letter.
///
/// # Errors
///
/// Returns `LetterSetError` if `letters` is not seven distinct alphabet letters.
pub fn check_word(
    letters: &str,
    central: char,
    word: &str,
    dictionary: &Dictionary,
) -> Result<CheckResult, LetterSetError> {
    let letters = LetterSet::new(letters.chars())?;
    let verdict = validate(word, &letters, central, dictionary);

    Ok(CheckResult {
        word: word.to_string(),
        letters,
        central,
        verdict,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict() -> Dictionary {
        Dictionary::from_words(["kata", "katt", "ab"])
    }

    #[test]
    fn check_accepted_word() {
        let result = check_word("KATROSE", 'A', "kata", &dict()).unwrap();
        assert_eq!(result.verdict, Ok(()));
        assert_eq!(result.points(), 4);
    }

    #[test]
    fn check_central_outside_set() {
        let result = check_word("ABCDEFG", 'Z', "ab", &dict()).unwrap();
        assert_eq!(result.verdict, Err(Rejection::MissingCentralLetter));
        assert_eq!(result.points(), 0);
    }

    #[test]
    fn check_bad_letters() {
        assert_eq!(
            check_word("KAT", 'A', "kata", &dict()),
            Err(LetterSetError::WrongSize(3))
        );
    }
}
