//! Spelling Bee - CLI
//!
//! Swedish Spelling Bee with a TUI, a line-based mode, and puzzle tools.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use spelling_bee::{
    commands::{check_word, generate_puzzle, run_benchmark, run_simple},
    dictionary::{Dictionary, load_from_file},
    engine::{DEFAULT_MAX_ATTEMPTS, GeneratorConfig, MIN_WORDS},
    game::Loader,
    output::{print_benchmark_result, print_check_result, print_generated},
};
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "spelling_bee",
    about = "Swedish Spelling Bee: find words using seven letters, always including the central one",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: one word per line, UTF-8
    #[arg(
        short,
        long,
        global = true,
        default_value = "data/swedish_words.txt"
    )]
    dictionary: PathBuf,

    /// Playable words a letter set must admit
    #[arg(long, global = true, default_value_t = MIN_WORDS)]
    min_words: usize,

    /// Letter sets to try before giving up
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Fail instead of falling back to the best letter set found
    #[arg(long, global = true)]
    strict: bool,

    /// Seed for reproducible puzzles
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file instead of stderr (RUST_LOG sets the level)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode (no TUI)
    Simple,

    /// Generate a puzzle and print it
    Generate {
        /// Also list every playable word
        #[arg(short = 'w', long)]
        show_words: bool,
    },

    /// Check a single word against given letters
    Check {
        /// The seven letters, e.g. KATROSE
        letters: String,

        /// The central letter
        central: char,

        /// Word to check
        word: String,
    },

    /// Measure how quickly playable letter sets are found
    Benchmark {
        /// Number of generations to run
        #[arg(short = 'n', long, default_value = "200")]
        count: usize,
    },
}

impl Cli {
    fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            min_words: self.min_words,
            max_attempts: self.max_attempts,
            allow_relaxed: !self.strict,
        }
    }

    fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }
}

/// Where log records go
///
/// The TUI owns the terminal, so without a log file its records are dropped
/// rather than written over the alternate screen.
fn log_target(log_file: Option<&Path>, tui: bool) -> Result<env_logger::Target> {
    match log_file {
        Some(path) => {
            let log_output = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            Ok(env_logger::Target::Pipe(Box::new(log_output)))
        }
        None if tui => Ok(env_logger::Target::Pipe(Box::new(io::sink()))),
        None => Ok(env_logger::Target::Stderr),
    }
}

/// Initialize logging, optionally into a file
fn init_logging(log_file: Option<&Path>, tui: bool) -> Result<()> {
    env_logger::Builder::from_default_env()
        .target(log_target(log_file, tui)?)
        .init();
    Ok(())
}

fn load_dictionary(path: &Path) -> Result<Arc<Dictionary>> {
    let dictionary = load_from_file(path)
        .context("could not load the word list (use --dictionary to pick another)")?;
    Ok(Arc::new(dictionary))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let tui = matches!(cli.command, None | Some(Commands::Play));
    init_logging(cli.log_file.as_deref(), tui)?;

    let config = cli.generator_config();
    info!("Generator config: {config:?}");

    // Default to Play mode if no command given
    match cli.command.as_ref().unwrap_or(&Commands::Play) {
        Commands::Play => run_play_command(&cli, config),
        Commands::Simple => {
            let dictionary = load_dictionary(&cli.dictionary)?;
            run_simple(dictionary, &config, &mut cli.rng())
        }
        Commands::Generate { show_words } => {
            let dictionary = load_dictionary(&cli.dictionary)?;
            let result = generate_puzzle(&dictionary, &config, &mut cli.rng())?;
            print_generated(&result, *show_words);
            Ok(())
        }
        Commands::Check {
            letters,
            central,
            word,
        } => run_check_command(&cli.dictionary, letters, *central, word),
        Commands::Benchmark { count } => {
            let dictionary = load_dictionary(&cli.dictionary)?;
            let base_seed = cli.seed.unwrap_or_else(rand::random);
            println!("Running {count} generations (base seed {base_seed})...");
            let result = run_benchmark(&dictionary, &config, *count, base_seed, true);
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(cli: &Cli, config: GeneratorConfig) -> Result<()> {
    use spelling_bee::interactive::{App, run_tui};

    let loader = Loader::spawn(cli.dictionary.clone(), config, cli.seed);
    let app = App::new(loader, config, cli.seed);
    run_tui(app)
}

fn run_check_command(dictionary: &Path, letters: &str, central: char, word: &str) -> Result<()> {
    let dictionary = load_dictionary(dictionary)?;
    let result = check_word(letters, central, word, &dictionary)?;
    print_check_result(&result);

    if result.verdict.is_err() {
        std::process::exit(1);
    }
    Ok(())
}
