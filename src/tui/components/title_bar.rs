// Title bar component
//
// Renders the app name and tagline at the top of the screen.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar
///
/// Shows the app name, the tagline on wider terminals, and a help hint.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);

    let title_text = if bp.at_least(Breakpoint::Normal) {
        " ❤️ MindCare ──── Your mental wellness companion".to_string()
    } else {
        " ❤️ MindCare".to_string()
    };

    let title = Paragraph::new(title_text)
        .style(
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.title))
                .title_top(ratatui::text::Line::from(" ? ").right_aligned()),
        );

    f.render_widget(title, area);
}
