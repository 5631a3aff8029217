// Profile view - preferences and session activity
//
// Left panel: current preferences (theme, config path, redirect behavior).
// Right panel: recent log entries from the in-memory buffer.

use crate::config::{Config, VERSION};
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Main render function for the profile view
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);

    let chunks: Vec<Rect> = if bp.at_least(Breakpoint::Normal) {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(44), Constraint::Min(30)])
            .split(area)
            .to_vec()
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(10), Constraint::Min(5)])
            .split(area)
            .to_vec()
    };

    render_preferences(f, chunks[0], app);
    render_activity(f, chunks[1], app);
}

fn render_preferences(f: &mut Frame, area: Rect, app: &App) {
    let label = Style::default().fg(app.theme.muted);
    let value = Style::default().fg(app.theme.foreground);

    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "unavailable".to_string());

    let redirect = if app.config.dashboard_redirect {
        format!("after {} ms", app.config.dashboard_redirect_delay_ms)
    } else {
        "off".to_string()
    };

    let lines = vec![
        Line::default(),
        Line::from(vec![
            Span::styled("  Version     ", label),
            Span::styled(VERSION, value),
        ]),
        Line::from(vec![
            Span::styled("  Theme       ", label),
            Span::styled(
                app.theme_kind.name(),
                Style::default()
                    .fg(app.theme.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  (t to cycle)", label),
        ]),
        Line::from(vec![
            Span::styled("  Redirect    ", label),
            Span::styled(redirect, value),
        ]),
        Line::from(vec![
            Span::styled("  Check-ins   ", label),
            Span::styled(app.submissions.len().to_string(), value),
        ]),
        Line::default(),
        Line::from(Span::styled("  Config file", label)),
        Line::from(Span::styled(format!("  {config_path}"), value)),
        Line::default(),
        Line::from(Span::styled(
            "  Accounts and sync are coming soon.",
            label,
        )),
    ];

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(app.theme.border_style())
            .title(" 👤 Profile "),
    );

    f.render_widget(panel, area);
}

/// Recent session activity straight from the log buffer
fn render_activity(f: &mut Frame, area: Rect, app: &App) {
    let visible = area.height.saturating_sub(2) as usize;
    let entries = app.log_buffer.recent(visible);

    let items: Vec<ListItem> = entries
        .iter()
        .map(|e| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    e.timestamp.format(" %H:%M:%S ").to_string(),
                    Style::default().fg(app.theme.muted),
                ),
                Span::styled(
                    format!("{:<5} ", e.level.as_str()),
                    Style::default().fg(app.theme.log_color(e.level)),
                ),
                Span::styled(e.message.clone(), Style::default().fg(app.theme.foreground)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(app.theme.border_style())
            .title(" Session Activity "),
    );

    f.render_widget(list, area);
}
