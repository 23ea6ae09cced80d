//! Display functions for command results

use super::formatters::{create_progress_bar, format_tiles};
use crate::commands::{BenchmarkResult, CheckResult, GenerateResult};
use crate::core::Arrangement;
use colored::Colorize;

/// Print a generated puzzle
pub fn print_generated(result: &GenerateResult, show_words: bool) {
    let generated = &result.generated;

    println!("\n{}", "─".repeat(60).yellow());
    println!(
        "Letters: {}   Central: {}",
        generated.puzzle.letters().to_string().bright_yellow().bold(),
        generated.puzzle.central().to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).yellow());
    println!("\n{}\n", format_tiles(&Arrangement::new(&generated.puzzle)).bold());

    println!("Playable words: {}", generated.matches);
    println!("Attempts:       {}", generated.attempts);
    if generated.relaxed {
        println!(
            "{}",
            "Relaxed: no letter set reached the minimum word count".yellow()
        );
    }

    if show_words {
        let total_points: usize = result.words.iter().map(|w| w.chars().count()).sum();
        println!("Max score:      {total_points}\n");
        for word in &result.words {
            println!("  {:<14} {}", word.to_uppercase(), word.chars().count());
        }
    }
    println!();
}

/// Print the verdict for a single word
pub fn print_check_result(result: &CheckResult) {
    println!(
        "\n{} with letters {} (central {})",
        result.word.to_uppercase().bright_yellow().bold(),
        result.letters,
        result.central.to_uppercase()
    );

    match result.verdict {
        Ok(()) => println!(
            "{}",
            format!("✅ Accepted: {} points", result.points()).green().bold()
        ),
        Err(rejection) => {
            println!("{}", format!("❌ {}", rejection.code()).red().bold());
            println!("   {rejection}");
        }
    }
    println!();
}

/// Print benchmark results
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "GENERATOR BENCHMARK".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("Runs:              {}", result.runs);
    println!(
        "Succeeded:         {}",
        result.succeeded.to_string().green()
    );
    if result.relaxed > 0 {
        println!("Relaxed:           {}", result.relaxed.to_string().yellow());
    }
    if result.failed > 0 {
        println!("Failed:            {}", result.failed.to_string().red());
    }
    println!("Average attempts:  {:.2}", result.average_attempts);
    println!(
        "Attempts range:    {}-{}",
        result.min_attempts, result.max_attempts
    );
    println!("Average words:     {:.1}", result.average_matches);
    println!(
        "Time:              {:.2}s ({:.1} puzzles/s)",
        result.duration.as_secs_f64(),
        result.generations_per_second
    );

    if !result.attempt_buckets.is_empty() {
        println!("\nAttempts needed:");
        let max_count = result.attempt_buckets.values().copied().max().unwrap_or(1);
        for (&bucket, &count) in &result.attempt_buckets {
            let bar = create_progress_bar(count as f64, max_count as f64, 30);
            println!("  ≤{bucket:<6} {bar} {count}");
        }
    }
    println!();
}
