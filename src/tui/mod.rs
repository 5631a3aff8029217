// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks)
// - Rendering the UI

pub mod app;
pub mod components;
pub mod input;
pub mod layout;
pub mod modal;
pub mod theme;
pub mod views;

use crate::catalog::{MOOD_OPTIONS, RESOURCE_CATEGORIES, WELLNESS_FACTORS};
use crate::config::Config;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::{App, CheckinFocus, Section};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modal::{Modal, ModalAction};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and cleans up when done.
pub async fn run_tui(log_buffer: LogBuffer, config: Config) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Create app state with config (initializes theme from config)
    let mut app = App::with_config(log_buffer, config);

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Handles two types of events:
/// 1. Keyboard input (for navigation and the check-in form)
/// 2. Timer ticks (toast expiry and the pending post-submit jump)
///
/// tokio::select! waits on both simultaneously, responding to whichever
/// completes first.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    // Ticker for periodic redraws and timed state (5 FPS is plenty here)
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        // Draw the UI
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        handle_key_event(app, key_event);
                    }
                }
            } => {}

            // Periodic tick: toast expiry, pending dashboard jump
            _ = tick_interval.tick() => {
                app.tick();
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Modal → Notes text capture → Global → Section-specific
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    // Layer 1: Modal captures all input when active
    if handle_modal_input(app, &key_event) {
        return;
    }

    // Layer 2: Notes text capture. Typing goes straight into the form and
    // suppresses the letter shortcuts; without this, writing "dinner" would
    // bounce the user to the Dashboard.
    if handle_notes_input(app, &key_event) {
        return;
    }

    // Layer 3: Global keys (work regardless of section)
    if handle_global_keys(app, &key_event) {
        return;
    }

    // Layer 4: Section-specific keys (through InputHandler for debounce)
    match key_event.kind {
        KeyEventKind::Press => match app.section {
            Section::CheckIn => handle_checkin_keys(app, key_event.code),
            Section::Resources => handle_resources_keys(app, key_event.code),
            _ => {}
        },
        KeyEventKind::Release => {
            app.handle_key_release(key_event.code);
        }
        _ => {}
    }
}

/// Handle modal input - returns true if modal absorbed the input
fn handle_modal_input(app: &mut App, key_event: &KeyEvent) -> bool {
    let Some(ref mut modal) = app.modal else {
        return false;
    };

    // Always process Release events to keep InputHandler in sync.
    // Without this, keys get stuck in "pressed" state after the modal closes.
    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return true;
    }

    if key_event.kind != KeyEventKind::Press {
        return true;
    }

    match modal.handle_input(key_event.code) {
        ModalAction::None => {}
        ModalAction::Close => app.modal = None,
    }

    true // Modal absorbed the input
}

/// Handle typing into the notes field - returns true if absorbed
///
/// Bypasses the InputHandler: debouncing typed characters drops keystrokes.
/// Tab/Shift+Tab still fall through so focus can move on.
fn handle_notes_input(app: &mut App, key_event: &KeyEvent) -> bool {
    if app.section != Section::CheckIn || app.cursor.focus != CheckinFocus::Notes {
        return false;
    }

    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return true;
    }
    if key_event.kind != KeyEventKind::Press {
        return true;
    }

    match key_event.code {
        KeyCode::Char(c) => {
            app.form.push_note_char(c);
            true
        }
        KeyCode::Backspace => {
            app.form.pop_note_char();
            true
        }
        // Done typing: move on to the submit row
        KeyCode::Enter | KeyCode::Esc => {
            if app.handle_key_press(key_event.code) {
                app.cursor.focus = CheckinFocus::Submit;
            }
            true
        }
        // Tab/Shift+Tab fall through to the focus cycle
        _ => false,
    }
}

/// Handle global keys - returns true if handled
/// Global keys work the same regardless of current section
/// Uses InputHandler for debounce (StateChange behavior = trigger once per press)
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    if key_event.kind != KeyEventKind::Press {
        return false;
    }

    let key = key_event.code;

    match key {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            if app.handle_key_press(key) {
                app.should_quit = true;
            }
            true
        }
        // Section switching - F-keys (primary) and letter shortcuts
        KeyCode::F(1) | KeyCode::Char('c') => {
            if app.handle_key_press(key) {
                app.set_section(Section::CheckIn);
            }
            true
        }
        KeyCode::F(2) | KeyCode::Char('d') => {
            if app.handle_key_press(key) {
                app.set_section(Section::Dashboard);
            }
            true
        }
        KeyCode::F(3) | KeyCode::Char('r') => {
            if app.handle_key_press(key) {
                app.set_section(Section::Resources);
            }
            true
        }
        KeyCode::F(4) | KeyCode::Char('p') => {
            if app.handle_key_press(key) {
                app.set_section(Section::Profile);
            }
            true
        }
        // Theme cycling
        KeyCode::Char('t') => {
            if app.handle_key_press(key) {
                app.next_theme();
            }
            true
        }
        // Help modal
        KeyCode::Char('?') => {
            if app.handle_key_press(key) {
                app.modal = Some(Modal::help());
            }
            true
        }
        _ => false,
    }
}

/// Check-in view keys: focus cycle, row movement, selection and submit
fn handle_checkin_keys(app: &mut App, key: KeyCode) {
    if !app.handle_key_press(key) {
        return;
    }

    match key {
        KeyCode::Tab => app.cursor.focus = app.cursor.focus.next(),
        KeyCode::BackTab => app.cursor.focus = app.cursor.focus.prev(),
        KeyCode::Left => app.cursor.move_left(),
        KeyCode::Right => app.cursor.move_right(),
        // Direct mood selection
        KeyCode::Char(c @ '1'..='5') => {
            app.form.select_mood(c as u8 - b'0');
        }
        KeyCode::Char(' ') | KeyCode::Enter => match app.cursor.focus {
            CheckinFocus::Mood => {
                app.form.select_mood(MOOD_OPTIONS[app.cursor.mood_index].value);
            }
            CheckinFocus::Factors => {
                app.form
                    .toggle_factor(WELLNESS_FACTORS[app.cursor.factor_index]);
            }
            CheckinFocus::Submit => {
                if key == KeyCode::Enter {
                    app.submit_checkin();
                }
            }
            // Notes focus never reaches here (text capture layer)
            CheckinFocus::Notes => {}
        },
        _ => {}
    }
}

/// Resources view keys: category tab switching
fn handle_resources_keys(app: &mut App, key: KeyCode) {
    if !app.handle_key_press(key) {
        return;
    }

    match key {
        KeyCode::Tab | KeyCode::Right => app.next_resources_tab(),
        KeyCode::BackTab | KeyCode::Left => app.prev_resources_tab(),
        KeyCode::Char(c @ '1'..='4') => {
            let idx = (c as usize) - ('1' as usize);
            if idx < RESOURCE_CATEGORIES.len() {
                app.resources_tab = idx;
            }
        }
        _ => {}
    }
}
