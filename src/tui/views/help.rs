// Help modal rendering
//
// A centered overlay listing the keyboard shortcuts and the active theme.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Calculate centered rect for the modal dialog
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Render the help modal overlay
pub fn render(f: &mut Frame, app: &App) {
    let key_style = Style::default().fg(app.theme.border_focused);
    let desc_style = Style::default().fg(app.theme.foreground);
    let header_style = Style::default()
        .fg(app.theme.highlight)
        .add_modifier(Modifier::BOLD);
    let divider_style = Style::default().fg(app.theme.border);

    // Helper to create a keybind line: "    key         description"
    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Sections", header_style)),
        kb("F1, c", "Daily Check-in"),
        kb("F2, d", "Dashboard"),
        kb("F3, r", "Resources"),
        kb("F4, p", "Profile"),
        Line::raw(""),
        Line::from(Span::styled("  Check-in", header_style)),
        kb("Tab", "Next row (mood, factors, notes, submit)"),
        kb("Shift+Tab", "Previous row"),
        kb("←/→", "Move within a row"),
        kb("1-5", "Select mood directly"),
        kb("Space/Enter", "Select mood / toggle factor"),
        kb("Enter", "Submit (when submit row focused)"),
        kb("Esc", "Leave the notes field"),
        Line::raw(""),
        Line::from(Span::styled("  Resources", header_style)),
        kb("Tab, ←/→", "Switch category"),
        kb("1-4", "Jump to category"),
        Line::raw(""),
        Line::from(Span::styled("  General", header_style)),
        kb("t", "Cycle theme"),
        kb("?", "Toggle this help"),
        kb("q", "Quit"),
        Line::raw(""),
        Line::from(Span::styled(
            "  ──────────────────────────────────",
            divider_style,
        )),
        Line::from(vec![
            Span::styled("  Theme: ", desc_style),
            Span::styled(app.theme_kind.name(), key_style),
        ]),
    ]);

    let width = 52;
    let height = 28;
    let area = centered_rect(width, height, f.area());

    // Clear the area behind the modal
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(app.theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.highlight))
                .border_type(app.theme.border_type)
                .title(" Help ")
                .title_bottom(Line::from(" Press ? or Esc to close ").centered()),
        );

    f.render_widget(paragraph, area);
}
