//! The 29-letter Swedish alphabet
//!
//! Letters are addressed by their index into [`ALPHABET`], which lets a set of
//! letters be packed into a single `u32` bitmask (a "signature"). Word matching
//! against a letter set then reduces to two mask operations.

/// All letters a puzzle can be drawn from: A–Z followed by Å, Ä, Ö
pub const ALPHABET: [char; 29] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'Å', 'Ä', 'Ö',
];

/// Bitmask of letters, one bit per [`ALPHABET`] index
pub type Signature = u32;

/// Fold a character to uppercase
///
/// Uses Unicode case mapping rather than any locale, so `å`, `ä` and `ö`
/// fold the same way everywhere. Characters whose uppercase form expands to
/// several characters (e.g. `ß`) return `None`: they can never be a letter.
#[inline]
#[must_use]
pub fn fold_upper(c: char) -> Option<char> {
    let mut upper = c.to_uppercase();
    let first = upper.next()?;
    upper.next().is_none().then_some(first)
}

/// Index of a letter in [`ALPHABET`], after case folding
#[must_use]
pub fn index_of(c: char) -> Option<usize> {
    let upper = fold_upper(c)?;
    ALPHABET.iter().position(|&letter| letter == upper)
}

/// Single-bit mask for one letter
#[inline]
#[must_use]
pub fn bit(c: char) -> Option<Signature> {
    index_of(c).map(|i| 1 << i)
}

/// Signature of every letter used in `word`
///
/// Returns `None` if the word contains anything outside the alphabet
/// (digits, hyphens, accented letters such as `é`, ...).
#[must_use]
pub fn signature(word: &str) -> Option<Signature> {
    word.chars().try_fold(0, |acc, c| bit(c).map(|b| acc | b))
}
