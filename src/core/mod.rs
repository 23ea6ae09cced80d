//! Core domain types for the puzzle
//!
//! This module contains the alphabet, letter sets and puzzles. Everything here
//! is pure and has no knowledge of dictionaries or sessions.

pub mod alphabet;
mod arrangement;
mod letters;

pub use alphabet::{ALPHABET, Signature};
pub use arrangement::{Arrangement, CENTRAL_SLOT};
pub use letters::{LetterSet, LetterSetError, MIN_WORD_LEN, Puzzle, SET_SIZE};
