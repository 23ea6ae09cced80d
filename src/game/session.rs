//! Game session state
//!
//! A [`Session`] is owned by one controller and only changes through
//! [`Session::apply`] (or the equivalent named methods).

use crate::core::{Arrangement, Puzzle};
use crate::dictionary::Dictionary;
use crate::engine::{Rejection, validate_for};
use log::debug;
use rand::Rng;
use rustc_hash::FxHashSet;
use std::sync::Arc;

/// Player actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Click on a tile of the arrangement
    PressTile(usize),
    /// Append a letter to the input
    AppendLetter(char),
    /// Replace the input with free text
    SetInput(String),
    /// Remove the last input character
    Backspace,
    Submit,
    Shuffle,
    ResetInput,
}

/// Result of a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted { word: String, points: usize },
    /// Already found; nothing changed
    Duplicate,
    Rejected(Rejection),
}

/// Mutable state of one game
#[derive(Debug, Clone)]
pub struct Session {
    puzzle: Puzzle,
    arrangement: Arrangement,
    dictionary: Arc<Dictionary>,
    total_words: usize,
    input: String,
    submitted: Vec<String>,
    seen: FxHashSet<String>,
    score: usize,
    error: Option<Rejection>,
}

impl Session {
    /// Start a fresh session for a puzzle
    #[must_use]
    pub fn new(puzzle: Puzzle, dictionary: Arc<Dictionary>) -> Self {
        let total_words = dictionary.count_matches(&puzzle);
        Self {
            puzzle,
            arrangement: Arrangement::new(&puzzle),
            dictionary,
            total_words,
            input: String::new(),
            submitted: Vec::new(),
            seen: FxHashSet::default(),
            score: 0,
            error: None,
        }
    }

    /// Apply one action
    ///
    /// Returns the submission outcome for [`Action::Submit`], `None` otherwise.
    pub fn apply<R: Rng + ?Sized>(&mut self, action: Action, rng: &mut R) -> Option<SubmitOutcome> {
        match action {
            Action::PressTile(index) => {
                self.press_tile(index);
                None
            }
            Action::AppendLetter(c) => {
                self.append_letter(c);
                None
            }
            Action::SetInput(text) => {
                self.set_input(text);
                None
            }
            Action::Backspace => {
                self.input.pop();
                None
            }
            Action::Submit => Some(self.submit()),
            Action::Shuffle => {
                self.shuffle(rng);
                None
            }
            Action::ResetInput => {
                self.reset_input();
                None
            }
        }
    }

    /// Append the letter on a tile; out-of-range indices are ignored
    pub fn press_tile(&mut self, index: usize) -> bool {
        match self.arrangement.tile(index) {
            Some(letter) => {
                self.input.push(letter);
                true
            }
            None => false,
        }
    }

    pub fn append_letter(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Submit the current input
    ///
    /// Duplicates are checked before validation and change nothing. An
    /// accepted word scores its length in characters and clears the input and
    /// any error; a rejected one sets the error and keeps the input.
    pub fn submit(&mut self) -> SubmitOutcome {
        let word = self.input.to_lowercase();

        if self.seen.contains(&word) {
            debug!("Ignoring duplicate submission '{word}'");
            return SubmitOutcome::Duplicate;
        }

        match validate_for(&self.input, &self.puzzle, &self.dictionary) {
            Ok(()) => {
                let points = word.chars().count();
                self.score += points;
                self.seen.insert(word.clone());
                self.submitted.push(word.clone());
                self.input.clear();
                self.error = None;
                debug!("Accepted '{word}' for {points} points (score {})", self.score);
                SubmitOutcome::Accepted { word, points }
            }
            Err(rejection) => {
                debug!("Rejected '{}': {}", self.input, rejection.code());
                self.error = Some(rejection);
                SubmitOutcome::Rejected(rejection)
            }
        }
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.arrangement.shuffle(rng);
    }

    pub fn reset_input(&mut self) {
        self.input.clear();
    }

    #[inline]
    #[must_use]
    pub const fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    #[inline]
    #[must_use]
    pub const fn arrangement(&self) -> &Arrangement {
        &self.arrangement
    }

    #[inline]
    #[must_use]
    pub fn dictionary(&self) -> &Arc<Dictionary> {
        &self.dictionary
    }

    #[inline]
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Accepted words in submission order, lowercase
    #[inline]
    #[must_use]
    pub fn submitted_words(&self) -> &[String] {
        &self.submitted
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Last rejection, cleared by the next accepted word
    #[inline]
    #[must_use]
    pub const fn error(&self) -> Option<Rejection> {
        self.error
    }

    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        self.error.map(|e| e.to_string())
    }

    /// Playable dictionary words for this puzzle
    #[inline]
    #[must_use]
    pub const fn total_words(&self) -> usize {
        self.total_words
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.submitted.len() >= self.total_words
    }
}
