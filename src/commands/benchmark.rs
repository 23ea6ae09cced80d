//! Benchmark command
//!
//! Runs many independent generations and reports how hard the dictionary
//! makes it to find a playable letter set.

use crate::dictionary::Dictionary;
use crate::engine::{GeneratorConfig, generate};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub runs: usize,
    pub succeeded: usize,
    pub relaxed: usize,
    pub failed: usize,
    pub average_attempts: f64,
    pub min_attempts: usize,
    pub max_attempts: usize,
    pub average_matches: f64,
    /// Successful runs bucketed by attempts, in powers of two
    pub attempt_buckets: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub generations_per_second: f64,
}

/// Run `runs` generations in parallel
///
/// Run `i` is seeded with `base_seed + i`, so a benchmark is reproducible.
pub fn run_benchmark(
    dictionary: &Dictionary,
    config: &GeneratorConfig,
    runs: usize,
    base_seed: u64,
    show_progress: bool,
) -> BenchmarkResult {
    let start = Instant::now();

    let pb = if show_progress {
        ProgressBar::new(runs as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );
    pb.set_message("generating");

    let outcomes: Vec<_> = (0..runs)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(i as u64));
            let outcome = generate(dictionary, config, &mut rng);
            pb.inc(1);
            outcome
        })
        .collect();

    pb.finish_with_message("done");
    let duration = start.elapsed();

    let mut succeeded = 0;
    let mut relaxed = 0;
    let mut failed = 0;
    let mut total_attempts = 0;
    let mut total_matches = 0;
    let mut min_attempts = usize::MAX;
    let mut max_attempts = 0;
    let mut attempt_buckets = BTreeMap::new();

    for outcome in &outcomes {
        match outcome {
            Ok(generated) if !generated.relaxed => {
                succeeded += 1;
                total_attempts += generated.attempts;
                total_matches += generated.matches;
                min_attempts = min_attempts.min(generated.attempts);
                max_attempts = max_attempts.max(generated.attempts);
                *attempt_buckets
                    .entry(generated.attempts.next_power_of_two())
                    .or_insert(0) += 1;
            }
            Ok(_) => relaxed += 1,
            Err(_) => failed += 1,
        }
    }

    let average = |total: usize| {
        if succeeded == 0 {
            0.0
        } else {
            total as f64 / succeeded as f64
        }
    };

    BenchmarkResult {
        runs,
        succeeded,
        relaxed,
        failed,
        average_attempts: average(total_attempts),
        min_attempts: if succeeded == 0 { 0 } else { min_attempts },
        max_attempts,
        average_matches: average(total_matches),
        attempt_buckets,
        duration,
        generations_per_second: runs as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
