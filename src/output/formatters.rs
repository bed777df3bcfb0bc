//! Formatting utilities for terminal output

use crate::core::Score;

/// Format a score as key pegs: `●` full, `○` partial, `·` empty
#[must_use]
pub fn score_pegs(score: Score, nr_columns: usize) -> String {
    let empty = nr_columns.saturating_sub(score.pegs());

    let mut result = String::with_capacity(nr_columns * 3);
    result.push_str(&"●".repeat(score.full));
    result.push_str(&"○".repeat(score.partial));
    result.push_str(&"·".repeat(empty));
    result
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
