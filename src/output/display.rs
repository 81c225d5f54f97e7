//! Display functions for command results

use super::formatters::{create_progress_bar, format_row};
use crate::commands::ShowResult;
use crate::core::{COLS, Evaluation, Letter, ROWS};
use crate::popup::StatsSummary;
use colored::{ColoredString, Colorize};

fn colored_letter(letter: Letter, evaluation: Evaluation) -> ColoredString {
    let text = format!(" {letter} ");
    match evaluation {
        Evaluation::Correct => text.black().on_green().bold(),
        Evaluation::Present => text.black().on_yellow().bold(),
        Evaluation::Absent => text.white().on_bright_black().bold(),
    }
}

/// Print the current game board
pub fn print_board(result: &ShowResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(" {}", "WORDLE".bright_cyan().bold());
    println!("{}", "─".repeat(40).cyan());

    let board = &result.board;
    for (letters, evaluations) in board.guesses().iter().zip(board.evaluations()) {
        let tiles: Vec<String> = letters
            .iter()
            .zip(evaluations)
            .map(|(&letter, &evaluation)| colored_letter(letter, evaluation).to_string())
            .collect();
        println!("  {}   {}", tiles.join(" "), format_row(letters, evaluations).dimmed());
    }
    for _ in board.rows()..ROWS {
        println!("  {}", vec!["[ ]"; COLS].join(" ").bright_black());
    }

    println!();
    if result.has_won {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", board.rows())
                .green()
                .bold()
        );
    } else if result.game_over {
        println!("{}", "❌ Out of guesses".red().bold());
    } else {
        println!("{} guesses left", result.guesses_left);
    }
    if let Some(word) = board.target_word() {
        println!("The word was: {}", word.bright_yellow().bold());
    }
}

/// Print player statistics with the guess distribution
pub fn print_stats(stats: &StatsSummary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Games:".bright_cyan().bold());
    println!("   Played:           {}", stats.games_total);
    println!(
        "   Win rate:         {}",
        format!("{}%", stats.win_percentage).bright_yellow().bold()
    );
    println!("   Current streak:   {}", stats.current_streak);
    println!("   Longest streak:   {}", stats.longest_streak);
    println!(
        "   Average guesses:  {}",
        stats.average_display().bright_yellow()
    );

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let bars = stats.bar_percentages();
    for (index, (&count, &percent)) in stats.distribution.iter().zip(bars.iter()).enumerate() {
        let bar = create_progress_bar(percent, 100.0, 40);
        println!("   {}: {} {count:4}", index + 1, bar.green());
    }
    println!("   Lost: {}", stats.games_lost);
}
