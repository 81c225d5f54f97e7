//! TUI rendering with ratatui
//!
//! Draws the board as the `BoardView` currently shows it, so animations
//! appear exactly as far as the reconciler has advanced them.

use super::app::App;
use super::layout::{ScreenLayout, TILE_HEIGHT};
use crate::core::{Coord, Evaluation};
use crate::input::KeyId;
use crate::output::formatters::create_progress_bar;
use crate::popup::{Outcome, PopupPhase};
use crate::render::{Flip, TileView};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};
use std::time::Duration;

const POPUP_WIDTH: u16 = 52;
const POPUP_HEIGHT: u16 = 22;
const BAR_WIDTH: usize = 24;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App, now: Duration) {
    let layout = ScreenLayout::compute(f.area());

    render_header(f, layout.header);
    render_grid(f, app, &layout, now);
    render_keyboard(f, app, &layout);
    render_status(f, app, layout.status);

    if app.popup().is_visible() {
        render_popup(f, app, now);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(header, area);
}

const fn evaluation_color(evaluation: Evaluation) -> Color {
    match evaluation {
        Evaluation::Correct => Color::Green,
        Evaluation::Present => Color::Yellow,
        Evaluation::Absent => Color::DarkGray,
    }
}

fn render_grid(f: &mut Frame, app: &App, layout: &ScreenLayout, now: Duration) {
    let view = app.reconciler().view();
    let shake = app.reconciler().shake_offset(now);

    for coord in Coord::all() {
        let mut area = layout.tile(coord);
        let on_current_row = view.current_row() == Some(coord.row());
        if on_current_row && shake != 0 {
            area = shifted(area, shake * 2, f.area());
        }
        render_tile(
            f,
            view.tile(coord),
            area,
            on_current_row,
            view.selected() == Some(coord),
        );
    }
}

fn shifted(area: Rect, dx: i16, bounds: Rect) -> Rect {
    let x = area.x.saturating_add_signed(dx);
    Rect { x, ..area }.intersection(bounds)
}

fn render_tile(f: &mut Frame, tile: &TileView, area: Rect, current_row: bool, selected: bool) {
    if tile.flip == Flip::EdgeOn {
        // Seen edge-on: a thin vertical line in the middle of the cell
        let edge = Rect::new(area.x + area.width / 2, area.y, 1, area.height);
        f.render_widget(
            Paragraph::new(vec![Line::from("│"); usize::from(TILE_HEIGHT)])
                .style(Style::default().fg(Color::Gray)),
            edge.intersection(area),
        );
        return;
    }

    let (border_type, border_color) = if selected {
        (BorderType::Double, Color::White)
    } else if tile.enlarged {
        (BorderType::Thick, Color::White)
    } else if current_row {
        (BorderType::Plain, Color::Gray)
    } else {
        (BorderType::Plain, Color::DarkGray)
    };

    let mut text_style = Style::default().add_modifier(Modifier::BOLD);
    let mut block_style = Style::default();
    if let Some(evaluation) = tile.color {
        block_style = block_style.bg(evaluation_color(evaluation));
        text_style = text_style.fg(Color::Black);
    } else {
        text_style = text_style.fg(Color::White);
    }

    let label = tile.letter.map(|l| l.to_string()).unwrap_or_default();
    let paragraph = Paragraph::new(Span::styled(label, text_style))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(Style::default().fg(border_color))
                .style(block_style),
        );
    f.render_widget(paragraph, area);
}

fn render_keyboard(f: &mut Frame, app: &App, layout: &ScreenLayout) {
    let view = app.reconciler().view();

    for (key, area) in layout.keys() {
        let color = match key {
            KeyId::Letter(letter) => view.key_color(letter).map(evaluation_color),
            KeyId::Enter | KeyId::Backspace | KeyId::Left | KeyId::Right => None,
        };

        let mut style = match color {
            Some(bg) => Style::default().bg(bg).fg(Color::Black),
            None => Style::default().fg(Color::White),
        };
        if view.is_pressed(key) {
            style = style.add_modifier(Modifier::REVERSED);
        }

        let paragraph = Paragraph::new(key.label())
            .alignment(Alignment::Center)
            .style(style.add_modifier(Modifier::BOLD))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        f.render_widget(paragraph, area);
    }
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.input_blocked() {
        "Checking guess..."
    } else if app.state().is_terminal() {
        "Tab: Stats | Enter (in stats): New Game | Ctrl+R: Refresh | Ctrl+C: Quit"
    } else {
        "Type letters | ←/→: Move | Enter: Submit | Tab: Stats | Ctrl+R: Refresh | Ctrl+C: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

/// Popup rectangle, slid down by up to half its height while animating
fn popup_area(screen: Rect, progress: f64) -> Rect {
    let width = POPUP_WIDTH.min(screen.width);
    let height = POPUP_HEIGHT.min(screen.height);
    let x = screen.x + (screen.width - width) / 2;
    let y = screen.y + (screen.height - height) / 2;
    // Cast is safe: offset is within [0, height / 2]
    let offset = ((1.0 - progress.clamp(0.0, 1.0)) * f64::from(height / 2)) as u16;
    Rect::new(x, y + offset, width, height).intersection(screen)
}

fn render_popup(f: &mut Frame, app: &App, now: Duration) {
    let progress = app.popup().progress(now);
    let area = popup_area(f.area(), progress);

    // Dim the board behind the popup while it is at least half visible
    if progress >= 0.5 {
        f.render_widget(
            Block::default().style(Style::default().add_modifier(Modifier::DIM)),
            f.area(),
        );
    }
    f.render_widget(Clear, area);

    let outcome = app.outcome();
    let feedback = app.feedback();

    let mut feedback_spans = vec![Span::raw(feedback.lead)];
    if let Some(word) = feedback.word {
        feedback_spans.push(Span::styled(
            word,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));
    }
    feedback_spans.push(Span::raw(feedback.tail));

    let mut lines = vec![Line::from(feedback_spans), Line::from("")];

    match app.stats() {
        Some(stats) => {
            lines.push(Line::from(vec![
                Span::styled(format!("{:>4}", stats.games_total), bold()),
                Span::raw(" Played   "),
                Span::styled(format!("{:>3}%", stats.win_percentage), bold()),
                Span::raw(" Win   "),
                Span::styled(format!("{:>3}", stats.current_streak), bold()),
                Span::raw(" Streak   "),
                Span::styled(format!("{:>3}", stats.longest_streak), bold()),
                Span::raw(" Best"),
            ]));
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::raw("Guess distribution  (average "),
                Span::styled(stats.average_display(), bold()),
                Span::raw(")"),
            ]));

            let bars = stats.bar_percentages();
            let winning_row = match outcome {
                Outcome::Won(row) => Some(row),
                Outcome::Lost | Outcome::InProgress => None,
            };
            for (index, (&count, &percent)) in
                stats.distribution.iter().zip(bars.iter()).enumerate()
            {
                let row = index + 1;
                let color = if winning_row == Some(row) {
                    Color::Green
                } else {
                    Color::Gray
                };
                lines.push(Line::from(vec![
                    Span::raw(format!(" {row} ")),
                    Span::styled(
                        create_progress_bar(percent, 100.0, BAR_WIDTH),
                        Style::default().fg(color),
                    ),
                    Span::raw(format!(" {count}")),
                ]));
            }
        }
        None => lines.push(Line::from(Span::styled(
            "Loading statistics...",
            Style::default().fg(Color::DarkGray),
        ))),
    }

    lines.push(Line::from(""));
    if outcome.offers_reset() {
        lines.push(Line::from(Span::styled(
            "Press Enter to play again",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::from(Span::styled(
        "Esc / Tab: close",
        Style::default().fg(Color::DarkGray),
    )));

    let closing = matches!(app.popup().phase(), PopupPhase::Closing { .. });
    let border_color = if closing { Color::DarkGray } else { Color::Cyan };

    let popup = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {} ", outcome.heading()))
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_color)),
        );
    f.render_widget(popup, area);
}

fn bold() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}
