//! Formatting utilities for terminal output

use crate::core::{COLS, Evaluation, Letter, row_to_emoji};

/// Format a committed row as letters followed by its emoji pattern
#[must_use]
pub fn format_row(letters: &[Letter; COLS], evaluations: &[Evaluation; COLS]) -> String {
    let word: String = letters.iter().map(|l| l.as_char()).collect();
    format!("{word} {}", row_to_emoji(evaluations))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
