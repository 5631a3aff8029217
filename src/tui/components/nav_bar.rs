// Navigation bar component
//
// Renders the four section buttons side by side, with the active section
// highlighted. On narrow terminals the descriptions are dropped and only
// icon + label remain.

use crate::catalog::NAV_ITEMS;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the section navigation bar
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);
    let active = app.section.nav_index();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for (i, item) in NAV_ITEMS.iter().enumerate() {
        let is_active = i == active;

        let (border_style, label_style) = if is_active {
            (
                Style::default().fg(app.theme.highlight),
                Style::default()
                    .fg(app.theme.highlight)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (
                Style::default().fg(app.theme.border),
                Style::default().fg(app.theme.foreground),
            )
        };

        let mut lines = vec![Line::styled(
            format!("{} {}", item.icon, item.label),
            label_style,
        )];
        if bp.at_least(Breakpoint::Wide) {
            lines.push(Line::styled(
                item.description,
                Style::default().fg(app.theme.muted),
            ));
        }

        let hint = format!(" F{} ", i + 1);
        let button = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(border_style)
                .title_top(Line::from(hint).right_aligned()),
        );

        f.render_widget(button, chunks[i]);
    }
}

/// Height the nav bar needs at a given width
pub fn height(width: u16) -> u16 {
    if Breakpoint::from_width(width).at_least(Breakpoint::Wide) {
        4 // icon+label, description, borders
    } else {
        3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_bar_shrinks_below_the_wide_breakpoint() {
        assert_eq!(height(120), 4);
        assert_eq!(height(80), 3);
        assert_eq!(height(50), 3);
    }
}
