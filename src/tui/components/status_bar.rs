// Status bar component
//
// Renders session info at the bottom: uptime, check-ins this session,
// and key hints for the active section.

use crate::tui::app::{App, Section};
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar
///
/// Adapts to terminal width: key hints are dropped on narrow terminals.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);

    let hints = match app.section {
        Section::CheckIn => "Tab focus │ ←→ move │ Space toggle │ Enter submit",
        Section::Dashboard => "F1-F4 sections │ t theme │ ? help",
        Section::Resources => "Tab/←→ category │ 1-4 jump │ ? help",
        Section::Profile => "t theme │ ? help │ q quit",
    };

    let status_text = if bp.at_least(Breakpoint::Normal) {
        format!(
            " {} │ ✅ {} check-in{} │ {}",
            app.uptime(),
            app.submissions.len(),
            if app.submissions.len() == 1 { "" } else { "s" },
            hints,
        )
    } else {
        format!(" {} │ ✅ {}", app.uptime(), app.submissions.len())
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(app.theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
