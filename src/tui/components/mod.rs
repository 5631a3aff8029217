// Components module - reusable UI building blocks
//
// Shell components are rendered in every section:
// - Title bar: App name and tagline
// - Nav bar: The four section buttons
// - Status bar: Uptime, session check-in count, key hints
// - Toast: Transient confirmation overlay
//
// Each component is a focused, single-responsibility module.

pub mod nav_bar;
pub mod status_bar;
pub mod title_bar;
pub mod toast;

pub use toast::Toast;

use crate::tui::app::App;
use ratatui::{layout::Rect, Frame};

/// Render the title bar (convenience wrapper)
pub fn render_title(f: &mut Frame, area: Rect, app: &App) {
    title_bar::render(f, area, app);
}

/// Render the navigation bar (convenience wrapper)
pub fn render_nav(f: &mut Frame, area: Rect, app: &App) {
    nav_bar::render(f, area, app);
}

/// Render the status bar (convenience wrapper)
pub fn render_status(f: &mut Frame, area: Rect, app: &App) {
    status_bar::render(f, area, app);
}
