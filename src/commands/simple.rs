//! Simple interactive CLI mode
//!
//! Line-based game without the TUI. Every line is submitted as a word unless
//! it is one of the `:` commands.

use super::generate::generate_puzzle;
use crate::dictionary::Dictionary;
use crate::engine::GeneratorConfig;
use crate::game::{Action, Session, SubmitOutcome};
use crate::output::formatters::{format_tile_keys, format_tiles, found_bar};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

/// What the main loop should do after a line
enum Flow {
    Continue,
    NewGame,
    Quit,
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if no puzzle
/// can be generated from the dictionary.
pub fn run_simple<R: Rng + ?Sized>(
    dictionary: Arc<Dictionary>,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play(stdin.lock(), stdout.lock(), dictionary, config, rng)
}

/// Play on arbitrary input and output streams
///
/// # Errors
///
/// Returns an error on I/O failure or if generation fails.
pub fn play<I, O, R>(
    input: I,
    mut out: O,
    dictionary: Arc<Dictionary>,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<()>
where
    I: BufRead,
    O: Write,
    R: Rng + ?Sized,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                  Spelling Bee - Svenska                      ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Bilda ord med bokstäverna. Varje ord måste innehålla mittenbokstaven.")?;
    writeln!(out, "Kommandon: :blanda, :återställ, :nytt, :avsluta (siffror 1-7 väljer bokstäver)\n")?;

    let mut lines = input.lines();

    'game: loop {
        let result = generate_puzzle(&dictionary, config, rng)?;
        let mut session = Session::new(result.generated.puzzle, Arc::clone(&dictionary));
        if result.generated.relaxed {
            writeln!(
                out,
                "{}",
                format!("(bara {} ord finns för dessa bokstäver)", result.generated.matches)
                    .yellow()
            )?;
        }
        print_board(&mut out, &session)?;

        loop {
            write!(out, "> ")?;
            out.flush()?;

            let Some(line) = lines.next() else {
                break 'game;
            };
            let line = line?;

            match handle_line(&mut out, &mut session, line.trim_end(), rng)? {
                Flow::Continue => {}
                Flow::NewGame => continue 'game,
                Flow::Quit => break 'game,
            }
        }
    }

    writeln!(out, "\n👋 Tack för att du spelade!\n")?;
    Ok(())
}

fn handle_line<O: Write, R: Rng + ?Sized>(
    out: &mut O,
    session: &mut Session,
    line: &str,
    rng: &mut R,
) -> Result<Flow> {
    match line {
        ":avsluta" | ":quit" | ":q" => {
            writeln!(
                out,
                "Slutpoäng: {} ({} ord)",
                session.score(),
                session.submitted_words().len()
            )?;
            return Ok(Flow::Quit);
        }
        ":nytt" | ":new" => {
            writeln!(out, "\n🔄 Nytt spel!\n")?;
            return Ok(Flow::NewGame);
        }
        ":blanda" | ":shuffle" => {
            session.apply(Action::Shuffle, rng);
            print_board(out, session)?;
            return Ok(Flow::Continue);
        }
        ":återställ" | ":reset" => {
            session.apply(Action::ResetInput, rng);
            writeln!(out, "Inmatningen är tömd.")?;
            return Ok(Flow::Continue);
        }
        "" => return Ok(Flow::Continue),
        _ => {}
    }

    // A line of only tile numbers presses those tiles
    if line.chars().all(|c| ('1'..='7').contains(&c)) {
        session.apply(Action::ResetInput, rng);
        for c in line.chars() {
            session.apply(Action::PressTile(c as usize - '1' as usize), rng);
        }
    } else {
        session.apply(Action::SetInput(line.to_string()), rng);
    }

    let word = session.input().to_uppercase();
    match session.apply(Action::Submit, rng) {
        Some(SubmitOutcome::Accepted { word, points }) => {
            writeln!(
                out,
                "{} {}  {}",
                "✓".green().bold(),
                word.to_uppercase().green().bold(),
                format!("+{points}").green()
            )?;
            writeln!(
                out,
                "  Poäng: {}  [{}] {}/{}",
                session.score(),
                found_bar(session.submitted_words().len(), session.total_words(), 20),
                session.submitted_words().len(),
                session.total_words()
            )?;
            if session.is_complete() {
                writeln!(out, "{}", "🎉 Alla ord hittade!".bright_yellow().bold())?;
            }
        }
        Some(SubmitOutcome::Duplicate) => {
            writeln!(out, "{word} är redan hittat.")?;
        }
        Some(SubmitOutcome::Rejected(rejection)) => {
            writeln!(out, "{} {}", "✗".red().bold(), rejection.to_string().red())?;
        }
        None => {}
    }
    session.apply(Action::ResetInput, rng);

    Ok(Flow::Continue)
}

fn print_board<O: Write>(out: &mut O, session: &Session) -> io::Result<()> {
    writeln!(out, "────────────────────────────────────────────────────────────")?;
    writeln!(out, "{}", format_tiles(session.arrangement()).bold())?;
    writeln!(out, "{}", format_tile_keys(session.arrangement()).dimmed())?;
    writeln!(
        out,
        "Poäng: {} | {}/{} ord",
        session.score(),
        session.submitted_words().len(),
        session.total_words()
    )?;
    writeln!(out, "────────────────────────────────────────────────────────────")
}
