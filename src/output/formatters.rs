//! Formatting utilities for terminal output

use crate::core::{Arrangement, CENTRAL_SLOT};

/// Format the tiles as a three-row honeycomb
///
/// The central letter is bracketed.
///
/// ```
/// use spelling_bee::core::{Arrangement, Puzzle};
/// use spelling_bee::output::formatters::format_tiles;
///
/// let arrangement = Arrangement::new(&Puzzle::parse("KATROSE", 'A').unwrap());
/// assert_eq!(format_tiles(&arrangement), "   K   T\n R  [A]  O\n   S   E");
/// ```
#[must_use]
pub fn format_tiles(arrangement: &Arrangement) -> String {
    let t = arrangement.tiles();
    format!(
        "   {}   {}\n {}  [{}]  {}\n   {}   {}",
        t[0], t[1], t[2], t[CENTRAL_SLOT], t[4], t[5], t[6]
    )
}

/// Tiles with their key numbers, for the line-based game
#[must_use]
pub fn format_tile_keys(arrangement: &Arrangement) -> String {
    arrangement
        .tiles()
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{}={c}", i + 1))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Progress through a puzzle's words as a bar
#[must_use]
pub fn found_bar(found: usize, total: usize, width: usize) -> String {
    create_progress_bar(found as f64, total as f64, width)
}
