//! Puzzle engine: letter-set generation and word validation

pub mod generator;
pub mod validator;

pub use generator::{
    DEFAULT_MAX_ATTEMPTS, Generated, GenerationError, GeneratorConfig, MIN_WORDS, draw_candidate,
    generate,
};
pub use validator::{Rejection, validate, validate_for};
