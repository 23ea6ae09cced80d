//! Spelling Bee
//!
//! A Swedish "Spelling Bee" word puzzle: seven letters, one of them central,
//! and every word must use the central letter. The generator only hands out
//! letter sets that admit at least fifteen dictionary words.
//!
//! # Quick Start
//!
//! ```rust
//! use spelling_bee::core::Puzzle;
//! use spelling_bee::dictionary::Dictionary;
//! use spelling_bee::game::{Session, SubmitOutcome};
//! use std::sync::Arc;
//!
//! let dict = Arc::new(Dictionary::from_words(["kata", "tak", "katt"]));
//! let puzzle = Puzzle::parse("KATROSE", 'A').unwrap();
//! let mut session = Session::new(puzzle, dict);
//!
//! session.set_input("Kata");
//! assert!(matches!(session.submit(), SubmitOutcome::Accepted { points: 4, .. }));
//! assert_eq!(session.score(), 4);
//! ```

// Core domain types
pub mod core;

// Word list and loading
pub mod dictionary;

// Generation and validation
pub mod engine;

// Session state and background loader
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
