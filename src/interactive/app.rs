//! TUI application state and logic

use crate::engine::{GeneratorConfig, generate};
use crate::game::{Action, LoadOutcome, Loader, Phase, Session, SubmitOutcome};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// How long to wait for input before redrawing (drives the loading spinner)
const TICK: Duration = Duration::from_millis(120);

/// Messages kept in the log panel
const MAX_MESSAGES: usize = 6;

/// Application state
pub struct App {
    pub phase: Phase,
    pub loader: Loader,
    pub config: GeneratorConfig,
    pub rng: StdRng,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    pub tick: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    /// Create the app and ask the loader for the first puzzle
    #[must_use]
    pub fn new(loader: Loader, config: GeneratorConfig, seed: Option<u64>) -> Self {
        let mut app = Self {
            phase: Phase::Loading,
            loader,
            config,
            rng: seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64),
            messages: Vec::new(),
            should_quit: false,
            tick: 0,
        };
        app.start_loading();
        app
    }

    fn start_loading(&mut self) {
        self.phase = Phase::Loading;
        if !self.loader.request() {
            self.phase = Phase::Failed("Bakgrundsladdaren har avslutats".to_string());
        }
    }

    /// Pick up a finished load, if any
    pub fn poll_loader(&mut self) {
        if !self.phase.is_loading() {
            return;
        }

        match self.loader.try_outcome() {
            Some(LoadOutcome::Ready {
                dictionary,
                generated,
            }) => {
                info!("Puzzle ready: {}", generated.puzzle);
                if generated.relaxed {
                    self.add_message(
                        &format!(
                            "Inga bokstäver gav {} ord, spelar med {}",
                            self.config.min_words, generated.matches
                        ),
                        MessageStyle::Info,
                    );
                }
                self.phase = Phase::Ready(Box::new(Session::new(generated.puzzle, dictionary)));
                self.add_message("Nytt spel! Hitta ord med mittenbokstaven.", MessageStyle::Info);
            }
            Some(LoadOutcome::Failed(e)) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                self.phase = Phase::Failed(e.to_string());
            }
            None => {}
        }
    }

    /// Apply a player action and report accepted words
    pub fn handle_action(&mut self, action: Action) {
        if let Some(SubmitOutcome::Accepted { word, points }) =
            self.phase.apply(action, &mut self.rng)
        {
            self.add_message(
                &format!("{} +{points}", word.to_uppercase()),
                MessageStyle::Success,
            );
            if self.phase.session().is_some_and(Session::is_complete) {
                self.add_message("Alla ord hittade! 🎉 Ctrl+N för nytt spel.", MessageStyle::Success);
            }
        }
    }

    /// Generate a new puzzle from the dictionary in hand
    ///
    /// After a failed load this retries the load instead.
    pub fn new_puzzle(&mut self) {
        let dictionary = match &self.phase {
            Phase::Ready(session) => session.dictionary().clone(),
            Phase::Failed(_) => {
                self.start_loading();
                return;
            }
            Phase::Loading => return,
        };

        match generate(&dictionary, &self.config, &mut self.rng) {
            Ok(generated) => {
                info!(
                    "Regenerated {} ({} words, {} attempts)",
                    generated.puzzle, generated.matches, generated.attempts
                );
                self.phase = Phase::Ready(Box::new(Session::new(generated.puzzle, dictionary)));
                self.add_message("Nya bokstäver!", MessageStyle::Info);
            }
            Err(e) => {
                warn!("Regeneration failed: {e}");
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Map a key press to app behavior
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c' | 'q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_puzzle(),
                _ => {}
            }
            return;
        }

        match self.phase {
            Phase::Loading => {}
            Phase::Failed(_) => match key.code {
                KeyCode::Char('r') => self.start_loading(),
                KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
            Phase::Ready(_) => {
                let action = match key.code {
                    KeyCode::Char(c @ '1'..='7') => {
                        Action::PressTile(c as usize - '1' as usize)
                    }
                    KeyCode::Char(' ') => Action::Shuffle,
                    KeyCode::Char(c) => Action::AppendLetter(c),
                    KeyCode::Backspace => Action::Backspace,
                    KeyCode::Enter => Action::Submit,
                    KeyCode::Esc => Action::ResetInput,
                    _ => return,
                };
                self.handle_action(action);
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.poll_loader();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        } else {
            app.tick = app.tick.wrapping_add(1);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CENTRAL_SLOT, Puzzle};
    use crate::dictionary::Dictionary;
    use crate::engine::Rejection;
    use std::path::PathBuf;
    use std::sync::Arc;

    fn ready_app() -> App {
        let loader = Loader::spawn(
            PathBuf::from("/definitely/not/here.txt"),
            GeneratorConfig::default(),
            Some(1),
        );
        let mut app = App::new(loader, GeneratorConfig::default(), Some(1));
        let puzzle = Puzzle::parse("KATROSE", 'A').unwrap();
        let dict = Arc::new(Dictionary::from_words(["kata", "tak", "katt"]));
        app.phase = Phase::Ready(Box::new(Session::new(puzzle, dict)));
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn session(app: &App) -> &Session {
        app.phase.session().unwrap()
    }

    #[test]
    fn starts_loading() {
        let loader = Loader::spawn(PathBuf::from("unused.txt"), GeneratorConfig::default(), None);
        let app = App::new(loader, GeneratorConfig::default(), None);
        assert!(app.phase.is_loading());
    }

    #[test]
    fn failed_load_moves_to_failed_phase() {
        let loader = Loader::spawn(
            PathBuf::from("/definitely/not/here.txt"),
            GeneratorConfig::default(),
            Some(2),
        );
        let mut app = App::new(loader, GeneratorConfig::default(), Some(2));
        for _ in 0..200 {
            app.poll_loader();
            if !app.phase.is_loading() {
                break;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        assert!(matches!(app.phase, Phase::Failed(_)));
        assert_eq!(app.messages.last().map(|m| m.style), Some(MessageStyle::Error));
    }

    #[test]
    fn dead_loader_fails_once() {
        let mut app = App::new(Loader::disconnected(), GeneratorConfig::default(), Some(4));
        assert!(app.phase.is_loading());

        app.poll_loader();
        app.poll_loader();
        assert!(matches!(app.phase, Phase::Failed(_)));
        let errors = app
            .messages
            .iter()
            .filter(|m| m.style == MessageStyle::Error)
            .count();
        assert_eq!(errors, 1);
    }

    #[test]
    fn typing_and_submitting() {
        let mut app = ready_app();
        for c in "kata".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        assert_eq!(session(&app).score(), 4);
        assert_eq!(
            app.messages.last().map(|m| m.text.as_str()),
            Some("KATA +4")
        );
    }

    #[test]
    fn digit_keys_press_tiles() {
        let mut app = ready_app();
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(session(&app).input(), "A");
        assert_eq!(session(&app).arrangement().tiles()[CENTRAL_SLOT], 'A');
    }

    #[test]
    fn escape_resets_and_backspace_deletes() {
        let mut app = ready_app();
        press(&mut app, KeyCode::Char('k'));
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Backspace);
        assert_eq!(session(&app).input(), "k");
        press(&mut app, KeyCode::Esc);
        assert_eq!(session(&app).input(), "");
    }

    #[test]
    fn rejected_word_shows_error() {
        let mut app = ready_app();
        for c in "tk".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            session(&app).error(),
            Some(Rejection::MissingCentralLetter)
        );
        assert_eq!(session(&app).input(), "tk");
    }

    #[test]
    fn space_shuffles_without_touching_input() {
        let mut app = ready_app();
        press(&mut app, KeyCode::Char('k'));
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(session(&app).input(), "k");
        assert_eq!(session(&app).arrangement().central(), 'A');
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = ready_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn new_puzzle_replaces_session() {
        let mut app = ready_app();
        app.config = GeneratorConfig {
            min_words: 1,
            max_attempts: 100_000,
            allow_relaxed: false,
        };
        press(&mut app, KeyCode::Char('k'));
        app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));

        let s = session(&app);
        assert_eq!(s.input(), "");
        assert!(s.total_words() >= 1);
    }
}
