//! Terminal event loop

use super::app::App;
use super::layout::{Hit, ScreenLayout};
use super::rendering;
use crate::config::ClientConfig;
use crate::input::KeyId;
use crate::render::{Clock, MonotonicClock};
use crate::sync::{ApiRequest, HttpTransport, SyncGateway};
use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        MouseButton, MouseEvent, MouseEventKind, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        supports_keyboard_enhancement,
    },
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::Duration;

/// Redraw at roughly 60 frames per second so animations stay smooth
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if the server URL is invalid, if terminal setup/cleanup
/// fails or if there's an I/O error during rendering or event handling.
pub fn run_tui(config: ClientConfig) -> Result<()> {
    let transport = HttpTransport::new(&config.server_url, config.request_timeout)
        .context("Failed to create HTTP client")?;
    let gateway = SyncGateway::spawn(transport, config.failure_policy);
    let app = App::new(config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )?;
    let release_events = supports_keyboard_enhancement().unwrap_or(false);
    if release_events {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }
    log::info!("terminal reports key releases: {release_events}");
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app, gateway, release_events);

    // Restore terminal
    if release_events {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        log::error!("TUI stopped: {err:#}");
    }
    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    mut gateway: SyncGateway,
    release_events: bool,
) -> Result<()> {
    let clock = MonotonicClock::new();
    gateway.dispatch_all(app.start());

    loop {
        let now = clock.now();
        for completion in gateway.poll() {
            let requests = app.on_completion(completion, now);
            gateway.dispatch_all(requests);
        }
        let requests = app.tick(now);
        gateway.dispatch_all(requests);

        let screen = terminal.draw(|f| rendering::ui(f, &app, now))?.area;

        if event::poll(FRAME_INTERVAL)? {
            let now = clock.now();
            let requests = match event::read()? {
                Event::Key(key) => handle_key(&mut app, key, release_events, now),
                Event::Mouse(mouse) => handle_mouse(&mut app, mouse, screen, now),
                Event::FocusLost => {
                    app.release_all();
                    Vec::new()
                }
                _ => Vec::new(),
            };
            gateway.dispatch_all(requests);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent, release_events: bool, now: Duration) -> Vec<ApiRequest> {
    let pressed = key.kind == KeyEventKind::Press;

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if pressed {
            match key.code {
                KeyCode::Char('c' | 'q') => app.should_quit = true,
                KeyCode::Char('r') => return app.refresh(),
                _ => {}
            }
        }
        return Vec::new();
    }

    match key.code {
        KeyCode::Esc if pressed => {
            app.close_popup(now);
            return Vec::new();
        }
        KeyCode::Tab if pressed => return app.toggle_stats(now),
        _ => {}
    }

    let Some(id) = KeyId::from_key_code(key.code) else {
        return Vec::new();
    };
    match key.kind {
        // Without release reporting a repeat cannot be told from a new press
        KeyEventKind::Repeat if !release_events => Vec::new(),
        KeyEventKind::Press | KeyEventKind::Repeat => {
            let requests = app.key_down(id, now);
            if !release_events {
                // No release will ever arrive for this press
                app.key_up(id);
            }
            requests
        }
        KeyEventKind::Release => {
            app.key_up(id);
            Vec::new()
        }
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent, screen: Rect, now: Duration) -> Vec<ApiRequest> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return Vec::new();
    }
    match ScreenLayout::compute(screen).hit(mouse.column, mouse.row) {
        Some(Hit::Tile(coord)) => {
            app.click_tile(coord);
            Vec::new()
        }
        Some(Hit::Key(key)) => app.click_key(key, now),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Coord, GameSnapshot};
    use crate::sync::{ApiResponse, GatewayEvent};
    use crossterm::event::KeyEventState;

    fn loaded_app() -> App {
        let mut app = App::new(ClientConfig::default());
        app.on_completion(
            GatewayEvent::Completed {
                request: ApiRequest::FetchGame,
                response: ApiResponse::Game(Board::from_snapshot(&GameSnapshot::default()).unwrap()),
            },
            Duration::ZERO,
        );
        app
    }

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    #[test]
    fn ctrl_c_quits_and_ctrl_r_refreshes() {
        let mut app = loaded_app();
        assert_eq!(
            handle_key(&mut app, ctrl('r'), false, Duration::ZERO),
            vec![ApiRequest::FetchGame]
        );
        assert!(!app.should_quit);

        handle_key(&mut app, ctrl('c'), false, Duration::ZERO);
        assert!(app.should_quit);
    }

    #[test]
    fn synthetic_release_without_enhancement() {
        let mut app = loaded_app();
        let press = key(KeyCode::Char('a'), KeyEventKind::Press);

        handle_key(&mut app, press, false, Duration::ZERO);
        handle_key(&mut app, press, false, Duration::ZERO);
        assert_eq!(app.state().guess_text(), "AA");
    }

    #[test]
    fn repeats_dropped_with_release_reporting() {
        let mut app = loaded_app();
        let code = KeyCode::Char('a');

        handle_key(&mut app, key(code, KeyEventKind::Press), true, Duration::ZERO);
        handle_key(&mut app, key(code, KeyEventKind::Repeat), true, Duration::ZERO);
        assert_eq!(app.state().guess_text(), "A");

        handle_key(&mut app, key(code, KeyEventKind::Release), true, Duration::ZERO);
        handle_key(&mut app, key(code, KeyEventKind::Press), true, Duration::ZERO);
        assert_eq!(app.state().guess_text(), "AA");
    }

    #[test]
    fn tab_and_esc_drive_popup() {
        let mut app = loaded_app();
        let requests = handle_key(
            &mut app,
            key(KeyCode::Tab, KeyEventKind::Press),
            true,
            Duration::ZERO,
        );
        assert_eq!(requests, vec![ApiRequest::FetchStats]);
        assert!(app.popup().is_open());

        handle_key(&mut app, key(KeyCode::Esc, KeyEventKind::Press), true, Duration::ZERO);
        assert!(!app.popup().is_open());
    }

    #[test]
    fn left_click_selects_tile() {
        let mut app = loaded_app();
        let screen = Rect::new(0, 0, 100, 40);
        let tile = ScreenLayout::compute(screen).tile(Coord::new(0, 2).unwrap());
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: tile.x + 1,
            row: tile.y + 1,
            modifiers: KeyModifiers::NONE,
        };

        handle_mouse(&mut app, click, screen, Duration::ZERO);
        assert_eq!(app.state().cursor().selected, Some(2));
    }
}
