// Views module - screen-level rendering logic
//
// Each view is a full-screen experience within the TUI:
// - CheckIn: the daily mood check-in form
// - Dashboard: overview cards, trends and insights
// - Resources: emergency support and the resource library
// - Profile: preferences and session activity
//
// This module dispatches to the appropriate view based on app state.

mod checkin;
mod dashboard;
mod help;
mod profile;
mod resources;

use super::app::{App, Section};
use super::modal::Modal;
use crate::tui::components;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Main UI render function - called on every frame
///
/// Builds the shell layout (title, nav, content, status), then dispatches to
/// the active section's view.
pub fn draw(f: &mut Frame, app: &mut App) {
    // Apply theme background to the entire frame (respects the
    // use_theme_background toggle)
    if app.config.use_theme_background {
        let bg_block = Block::default().style(Style::default().bg(app.theme.background));
        f.render_widget(bg_block, f.area());
    }

    let nav_height = components::nav_bar::height(f.area().width);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),          // title bar
            Constraint::Length(nav_height), // nav bar
            Constraint::Min(10),            // section content
            Constraint::Length(2),          // status bar
        ])
        .split(f.area());

    components::render_title(f, chunks[0], app);
    components::render_nav(f, chunks[1], app);

    match app.section {
        Section::CheckIn => checkin::render(f, chunks[2], app),
        Section::Dashboard => dashboard::render(f, chunks[2], app),
        Section::Resources => resources::render(f, chunks[2], app),
        Section::Profile => profile::render(f, chunks[2], app),
    }

    components::render_status(f, chunks[3], app);

    // Modal overlay (on top of the section content)
    if let Some(Modal::Help) = app.modal {
        help::render(f, app);
    }

    // Toast notification (on top of the modal too)
    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), &app.theme);
    }
}
