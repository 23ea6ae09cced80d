//! Letter-set generation
//!
//! Rejection sampling: draw seven distinct letters and a central letter, count
//! the dictionary words they admit, and keep the first draw that reaches the
//! threshold. The loop is bounded; see [`GeneratorConfig`].

use crate::core::{ALPHABET, LetterSet, Puzzle, SET_SIZE};
use crate::dictionary::Dictionary;
use log::{debug, warn};
use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

/// Playable words a letter set must admit
pub const MIN_WORDS: usize = 15;

/// Draws before giving up
pub const DEFAULT_MAX_ATTEMPTS: usize = 20_000;

/// Generation tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Minimum number of playable words
    pub min_words: usize,
    /// Upper bound on candidate draws
    pub max_attempts: usize,
    /// On exhaustion, fall back to the best draw seen (if it has any word)
    pub allow_relaxed: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_words: MIN_WORDS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            allow_relaxed: true,
        }
    }
}

/// A generated puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generated {
    pub puzzle: Puzzle,
    /// Playable dictionary words for `puzzle`
    pub matches: usize,
    /// Draws used, including the accepted one
    pub attempts: usize,
    /// True when `matches` is below the configured minimum
    pub relaxed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("the dictionary has no playable words")]
    EmptyDictionary,
    #[error(
        "no letter set with {required} playable words found in {attempts} attempts \
         (best had {best_matches})"
    )]
    Exhausted {
        attempts: usize,
        best_matches: usize,
        required: usize,
    },
}

/// Draw one candidate puzzle
///
/// Seven letters uniformly without replacement from the alphabet, then a
/// central letter uniformly among them.
pub fn draw_candidate<R: Rng + ?Sized>(rng: &mut R) -> Puzzle {
    let mut pool = ALPHABET;
    let (drawn, _) = pool.partial_shuffle(rng, SET_SIZE);

    let mut letters = [ALPHABET[0]; SET_SIZE];
    letters.copy_from_slice(drawn);

    let central = rng.random_range(0..SET_SIZE);
    Puzzle::from_drawn(LetterSet::from_drawn(letters), central)
}

/// Generate a puzzle admitting at least `config.min_words` dictionary words
///
/// # Errors
///
/// Returns `GenerationError::EmptyDictionary` when no dictionary word could
/// ever be played, and `GenerationError::Exhausted` when `max_attempts` draws
/// fail and no relaxed fallback applies.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use spelling_bee::dictionary::Dictionary;
/// use spelling_bee::engine::{GeneratorConfig, generate};
///
/// let dict = Dictionary::from_words(["kat"]);
/// let config = GeneratorConfig { allow_relaxed: false, max_attempts: 10, ..Default::default() };
/// assert!(generate(&dict, &config, &mut StdRng::seed_from_u64(7)).is_err());
/// ```
pub fn generate<R: Rng + ?Sized>(
    dictionary: &Dictionary,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Generated, GenerationError> {
    if dictionary.playable_count() == 0 {
        return Err(GenerationError::EmptyDictionary);
    }

    let mut best: Option<(Puzzle, usize)> = None;

    for attempt in 1..=config.max_attempts {
        let puzzle = draw_candidate(rng);
        let matches = dictionary.count_matches(&puzzle);

        if matches >= config.min_words {
            debug!("Accepted {puzzle} with {matches} words after {attempt} attempts");
            return Ok(Generated {
                puzzle,
                matches,
                attempts: attempt,
                relaxed: false,
            });
        }

        if best.is_none_or(|(_, best_matches)| matches > best_matches) {
            best = Some((puzzle, matches));
        }
    }

    match best {
        Some((puzzle, matches)) if config.allow_relaxed && matches > 0 => {
            warn!(
                "No letter set reached {} words in {} attempts; using {puzzle} with {matches}",
                config.min_words, config.max_attempts
            );
            Ok(Generated {
                puzzle,
                matches,
                attempts: config.max_attempts,
                relaxed: true,
            })
        }
        _ => Err(GenerationError::Exhausted {
            attempts: config.max_attempts,
            best_matches: best.map_or(0, |(_, m)| m),
            required: config.min_words,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Every three-letter string over `letters`
    fn trigrams(letters: &str) -> Dictionary {
        let chars: Vec<char> = letters.chars().collect();
        let mut words = Vec::new();
        for &a in &chars {
            for &b in &chars {
                for &c in &chars {
                    words.push(format!("{a}{b}{c}"));
                }
            }
        }
        Dictionary::from_words(words)
    }

    fn strict(max_attempts: usize) -> GeneratorConfig {
        GeneratorConfig {
            max_attempts,
            allow_relaxed: false,
            ..GeneratorConfig::default()
        }
    }

    #[test]
    fn draw_candidate_is_well_formed() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..200 {
            let puzzle = draw_candidate(&mut rng);
            let mut letters = puzzle.letters().letters().to_vec();
            letters.sort_unstable();
            letters.dedup();
            assert_eq!(letters.len(), SET_SIZE);
            assert!(puzzle.letters().contains(puzzle.central()));
            assert_eq!(puzzle.letters().signature().count_ones(), 7);
        }
    }

    #[test]
    fn draw_candidate_reaches_swedish_letters() {
        let mut rng = StdRng::seed_from_u64(2);
        let seen_swedish = (0..500)
            .map(|_| draw_candidate(&mut rng))
            .any(|p| p.letters().letters().iter().any(|c| "ÅÄÖ".contains(*c)));
        assert!(seen_swedish);
    }

    #[test]
    fn dense_dictionary_accepts_first_draw() {
        let dict = trigrams("abcdefghijklmnopqrstuvwxyzåäö");
        let generated = generate(&dict, &strict(1), &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(generated.attempts, 1);
        // 7^3 strings over the set minus 6^3 without the central letter
        assert_eq!(generated.matches, 127);
        assert!(!generated.relaxed);
    }

    #[test]
    fn empty_dictionary_fails_fast() {
        let dict = Dictionary::from_words(["", "ab", "x1z"]);
        let result = generate(&dict, &GeneratorConfig::default(), &mut StdRng::seed_from_u64(4));
        assert_eq!(result, Err(GenerationError::EmptyDictionary));
    }

    #[test]
    fn small_dictionary_exhausts_when_strict() {
        let dict = Dictionary::from_words(["katt", "tak", "mat"]);
        let result = generate(&dict, &strict(100), &mut StdRng::seed_from_u64(5));
        assert!(matches!(
            result,
            Err(GenerationError::Exhausted {
                attempts: 100,
                required: MIN_WORDS,
                ..
            })
        ));
    }

    #[test]
    fn relaxed_fallback_returns_best_draw() {
        // One word per letter: every draw admits exactly its central letter's word
        let words: Vec<String> = ALPHABET
            .iter()
            .map(|c| c.to_lowercase().collect::<String>().repeat(3))
            .collect();
        let dict = Dictionary::from_words(words);
        let config = GeneratorConfig {
            max_attempts: 20,
            ..GeneratorConfig::default()
        };

        let generated = generate(&dict, &config, &mut StdRng::seed_from_u64(6)).unwrap();
        assert!(generated.relaxed);
        assert_eq!(generated.matches, 1);
        assert_eq!(generated.attempts, 20);
    }

    #[test]
    fn zero_attempts_is_exhausted() {
        let dict = trigrams("abc");
        let result = generate(&dict, &strict(0), &mut StdRng::seed_from_u64(8));
        assert_eq!(
            result,
            Err(GenerationError::Exhausted {
                attempts: 0,
                best_matches: 0,
                required: MIN_WORDS,
            })
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn accepted_puzzle_meets_threshold(seed in any::<u64>()) {
            let dict = trigrams("abcdefghij");
            let mut rng = StdRng::seed_from_u64(seed);
            let generated = generate(&dict, &strict(DEFAULT_MAX_ATTEMPTS), &mut rng).unwrap();
            let puzzle = generated.puzzle;

            let mut letters = puzzle.letters().letters().to_vec();
            letters.sort_unstable();
            letters.dedup();
            prop_assert_eq!(letters.len(), SET_SIZE);
            prop_assert!(puzzle.letters().contains(puzzle.central()));

            let brute_force = dict.words().iter().filter(|w| puzzle.is_playable(w)).count();
            prop_assert_eq!(brute_force, generated.matches);
            prop_assert!(generated.matches >= MIN_WORDS);
        }
    }
}
