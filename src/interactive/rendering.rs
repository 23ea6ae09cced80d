//! TUI rendering with ratatui
//!
//! Tiles are drawn as a small honeycomb: two letters, three with the central
//! letter in the middle, then two more.

use super::app::{App, MessageStyle};
use crate::core::CENTRAL_SLOT;
use crate::game::{Phase, Session};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Tile indices per honeycomb row
const ROWS: [&[usize]; 3] = [&[0, 1], &[2, 3, 4], &[5, 6]];

const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    match &app.phase {
        Phase::Loading => render_loading(f, app, chunks[1]),
        Phase::Failed(reason) => render_failed(f, reason, chunks[1]),
        Phase::Ready(session) => render_game(f, app, session, chunks[1]),
    }

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🐝 SPELLING BEE - Svenska")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(header, area);
}

fn render_loading(f: &mut Frame, app: &App, area: Rect) {
    let spinner = SPINNER[app.tick % SPINNER.len()];
    let content = vec![
        Line::from(""),
        Line::from(format!("{spinner} Laddar ordlistan och väljer bokstäver...")),
    ];
    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_failed(f: &mut Frame, reason: &str, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Kunde inte starta spelet",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(reason.to_string()),
        Line::from(""),
        Line::from("r: försök igen | Esc: avsluta"),
    ];
    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Red)),
        );
    f.render_widget(paragraph, area);
}

fn render_game(f: &mut Frame, app: &App, session: &Session, area: Rect) {
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Tiles and input
            Constraint::Percentage(45), // Progress and words
        ])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(11),   // Tiles
            Constraint::Length(3), // Input
            Constraint::Length(3), // Error
        ])
        .split(main_chunks[0]);

    render_tiles(f, session, left[0]);
    render_input(f, session, left[1]);
    render_error(f, session, left[2]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Score gauge
            Constraint::Percentage(60), // Found words
            Constraint::Min(4),         // Messages
        ])
        .split(main_chunks[1]);

    render_score(f, session, right[0]);
    render_words(f, session, right[1]);
    render_messages(f, app, right[2]);
}

fn render_tiles(f: &mut Frame, session: &Session, area: Rect) {
    let block = Block::default()
        .title(" Bokstäver ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::vertical([Constraint::Length(3); 3])
        .flex(Flex::Center)
        .split(inner);

    let tiles = session.arrangement().tiles();
    for (row_area, indices) in rows.iter().zip(ROWS) {
        let cells = Layout::horizontal(vec![Constraint::Length(7); indices.len()])
            .flex(Flex::Center)
            .spacing(1)
            .split(*row_area);

        for (cell, &index) in cells.iter().zip(indices) {
            let style = if index == CENTRAL_SLOT {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            };

            let tile = Paragraph::new(tiles[index].to_string())
                .alignment(Alignment::Center)
                .style(style)
                .block(
                    Block::default()
                        .title(format!("{}", index + 1))
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded),
                );
            f.render_widget(tile, *cell);
        }
    }
}

fn render_input(f: &mut Frame, session: &Session, area: Rect) {
    let input = Paragraph::new(session.input().to_uppercase())
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Ditt ord | Enter: skicka ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(input, area);
}

fn render_error(f: &mut Frame, session: &Session, area: Rect) {
    let text = session.error_message().unwrap_or_default();
    let error = Paragraph::new(text)
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: true });
    f.render_widget(error, area);
}

fn render_score(f: &mut Frame, session: &Session, area: Rect) {
    let found = session.submitted_words().len();
    let total = session.total_words();
    let percent = if total == 0 {
        0
    } else {
        ((found * 100) / total).min(100) as u16
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Poäng ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Yellow))
        .percent(percent)
        .label(format!(
            "{} poäng | {found}/{total} ord",
            session.score()
        ));
    f.render_widget(gauge, area);
}

fn render_words(f: &mut Frame, session: &Session, area: Rect) {
    let items: Vec<ListItem> = session
        .submitted_words()
        .iter()
        .rev()
        .map(|word| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<12}", word.to_uppercase()),
                    Style::default().fg(Color::Green),
                ),
                Span::styled(
                    format!("+{}", word.chars().count()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let words = List::new(items).block(
        Block::default()
            .title(" Hittade ord ")
            .borders(Borders::ALL),
    );
    f.render_widget(words, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Meddelanden ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.phase {
        Phase::Loading => "Ctrl+C: avsluta",
        Phase::Failed(_) => "r: försök igen | Ctrl+C: avsluta",
        Phase::Ready(_) => {
            "1-7: bokstav | Enter: skicka | Mellanslag: blanda | Esc: återställ | Ctrl+N: nytt spel | Ctrl+C: avsluta"
        }
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Puzzle;
    use crate::dictionary::Dictionary;
    use crate::engine::GeneratorConfig;
    use crate::game::Loader;
    use ratatui::{Terminal, backend::TestBackend};
    use std::path::PathBuf;
    use std::sync::Arc;

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn app() -> App {
        let loader = Loader::spawn(PathBuf::from("unused.txt"), GeneratorConfig::default(), None);
        App::new(loader, GeneratorConfig::default(), Some(3))
    }

    #[test]
    fn loading_screen() {
        let screen = draw(&app());
        assert!(screen.contains("Laddar ordlistan"));
    }

    #[test]
    fn game_screen_shows_tiles_and_score() {
        let mut app = app();
        let puzzle = Puzzle::parse("KATROSE", 'A').unwrap();
        let dict = Arc::new(Dictionary::from_words(["kata", "tak"]));
        let mut session = Session::new(puzzle, dict);
        session.set_input("kata");
        session.submit();
        app.phase = Phase::Ready(Box::new(session));

        let screen = draw(&app);
        assert!(screen.contains("Bokstäver"));
        assert!(screen.contains("4 poäng | 1/2 ord"));
        assert!(screen.contains("KATA"));
    }

    #[test]
    fn failed_screen() {
        let mut app = app();
        app.phase = Phase::Failed("word list missing".to_string());
        let screen = draw(&app);
        assert!(screen.contains("word list missing"));
    }
}
