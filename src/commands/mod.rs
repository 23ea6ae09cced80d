//! Command implementations

pub mod benchmark;
pub mod check;
pub mod generate;
pub mod simple;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use check::{CheckResult, check_word};
pub use generate::{GenerateResult, generate_puzzle};
pub use simple::run_simple;
