//! Generate command
//!
//! Produces one puzzle and, optionally, every word it admits.

use crate::dictionary::Dictionary;
use crate::engine::{Generated, GenerationError, GeneratorConfig, generate};
use rand::Rng;

/// A generated puzzle with its answer list
#[derive(Debug, Clone)]
pub struct GenerateResult {
    pub generated: Generated,
    /// Playable words, longest first, then alphabetical
    pub words: Vec<String>,
}

/// Generate one puzzle and collect its playable words
///
/// # Errors
///
/// Propagates `GenerationError` from the generator.
pub fn generate_puzzle<R: Rng + ?Sized>(
    dictionary: &Dictionary,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<GenerateResult, GenerationError> {
    let generated = generate(dictionary, config, rng)?;

    let mut words: Vec<String> = dictionary
        .matches(&generated.puzzle)
        .map(str::to_string)
        .collect();
    words.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });

    Ok(GenerateResult { generated, words })
}
