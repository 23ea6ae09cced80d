//! Background dictionary loading and puzzle generation
//!
//! The worker thread owns nothing shared: it receives payload-free
//! [`LoadRequest`]s and answers each with a [`LoadOutcome`] over a channel.
//! Generation only starts once the whole dictionary has been read.

use crate::dictionary::{self, Dictionary, DictionaryError};
use crate::engine::{Generated, GenerationError, GeneratorConfig, generate};
use log::{debug, error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;
use thiserror::Error;

/// Trigger for one load-and-generate cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadRequest;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error("the background loader has stopped")]
    WorkerGone,
}

/// Reply to a [`LoadRequest`]
#[derive(Debug)]
pub enum LoadOutcome {
    Ready {
        dictionary: Arc<Dictionary>,
        generated: Generated,
    },
    Failed(SetupError),
}

/// Handle to the background worker
///
/// Dropping the handle closes the request channel, which ends the worker
/// after any load in progress.
pub struct Loader {
    requests: Sender<LoadRequest>,
    outcomes: Receiver<LoadOutcome>,
}

impl Loader {
    /// Start the worker for a word list file
    ///
    /// `seed` makes generation reproducible; without it the generator is
    /// seeded from the OS.
    #[must_use]
    pub fn spawn(source: PathBuf, config: GeneratorConfig, seed: Option<u64>) -> Self {
        let (request_tx, request_rx) = mpsc::channel::<LoadRequest>();
        let (outcome_tx, outcome_rx) = mpsc::channel::<LoadOutcome>();

        thread::spawn(move || {
            let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

            for LoadRequest in request_rx {
                debug!("Worker received load request for {}", source.display());
                let outcome = load_and_generate(&source, &config, &mut rng);
                if outcome_tx.send(outcome).is_err() {
                    break;
                }
            }
            debug!("Loader worker exiting");
        });

        Self {
            requests: request_tx,
            outcomes: outcome_rx,
        }
    }

    /// Ask the worker for a dictionary and a puzzle
    ///
    /// Returns false if the worker has gone away.
    pub fn request(&self) -> bool {
        self.requests.send(LoadRequest).is_ok()
    }

    /// Non-blocking check for a finished load
    ///
    /// A worker that has gone away is reported as a failed load.
    #[must_use]
    pub fn try_outcome(&self) -> Option<LoadOutcome> {
        match self.outcomes.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                error!("Loader worker disconnected");
                Some(LoadOutcome::Failed(SetupError::WorkerGone))
            }
        }
    }

    /// A handle whose worker accepts requests but never answers
    #[cfg(test)]
    pub(crate) fn disconnected() -> Self {
        let (requests, request_rx) = mpsc::channel();
        let (_, outcomes) = mpsc::channel();
        std::mem::forget(request_rx);
        Self { requests, outcomes }
    }

    /// Block until the next outcome arrives
    #[must_use]
    pub fn wait(&self) -> Option<LoadOutcome> {
        self.outcomes.recv().ok()
    }
}

fn load_and_generate(source: &Path, config: &GeneratorConfig, rng: &mut StdRng) -> LoadOutcome {
    setup(source, config, rng).unwrap_or_else(|e| {
        error!("Setup failed: {e}");
        LoadOutcome::Failed(e)
    })
}

fn setup(
    source: &Path,
    config: &GeneratorConfig,
    rng: &mut StdRng,
) -> Result<LoadOutcome, SetupError> {
    let dictionary = dictionary::load_from_file(source)?;
    let generated = generate(&dictionary, config, rng)?;
    info!(
        "Generated {} with {} words in {} attempts",
        generated.puzzle, generated.matches, generated.attempts
    );
    Ok(LoadOutcome::Ready {
        dictionary: Arc::new(dictionary),
        generated,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;

    fn word_file(name: &str, words: &[String]) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "spelling_bee_worker_{}_{name}.txt",
            std::process::id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        for word in words {
            writeln!(file, "{word}").unwrap();
        }
        path
    }

    fn all_trigrams() -> Vec<String> {
        let letters: Vec<char> = "abcdefghijklmnopqrstuvwxyzåäö".chars().collect();
        let mut words = Vec::new();
        for &a in &letters {
            for &b in &letters {
                for &c in &letters {
                    words.push(format!("{a}{b}{c}"));
                }
            }
        }
        words
    }

    #[test]
    fn delivers_dictionary_and_puzzle() {
        let path = word_file("ok", &all_trigrams());
        let loader = Loader::spawn(path.clone(), GeneratorConfig::default(), Some(11));

        assert!(loader.request());
        match loader.wait() {
            Some(LoadOutcome::Ready {
                dictionary,
                generated,
            }) => {
                assert_eq!(dictionary.len(), 29 * 29 * 29);
                assert!(generated.matches >= GeneratorConfig::default().min_words);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        fs::remove_file(path).ok();
    }

    #[test]
    fn missing_file_is_typed_failure() {
        let loader = Loader::spawn(
            PathBuf::from("/definitely/not/here.txt"),
            GeneratorConfig::default(),
            Some(12),
        );
        assert!(loader.request());
        assert!(matches!(
            loader.wait(),
            Some(LoadOutcome::Failed(SetupError::Dictionary(_)))
        ));
    }

    #[test]
    fn unplayable_dictionary_fails_instead_of_looping() {
        let path = word_file("short", &["ab".to_string(), "c".to_string()]);
        let loader = Loader::spawn(path.clone(), GeneratorConfig::default(), Some(13));
        assert!(loader.request());
        assert!(matches!(
            loader.wait(),
            Some(LoadOutcome::Failed(SetupError::Generation(
                GenerationError::EmptyDictionary
            )))
        ));
        fs::remove_file(path).ok();
    }

    #[test]
    fn dead_worker_reports_failure() {
        let loader = Loader::disconnected();
        assert!(loader.request());
        assert!(matches!(
            loader.try_outcome(),
            Some(LoadOutcome::Failed(SetupError::WorkerGone))
        ));
    }

    #[test]
    fn try_outcome_is_empty_before_request() {
        let loader = Loader::spawn(PathBuf::from("unused.txt"), GeneratorConfig::default(), None);
        assert!(loader.try_outcome().is_none());
    }
}
