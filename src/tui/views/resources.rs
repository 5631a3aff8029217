// Resources view - wellness resource library
//
// Emergency support always renders on top, followed by the tabbed resource
// library and the quick actions row.

use crate::catalog::{EMERGENCY_RESOURCES, QUICK_ACTIONS, RESOURCE_CATEGORIES};
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Tabs},
    Frame,
};

/// Main render function for the resources view
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // emergency block
            Constraint::Min(8),    // tabbed library
            Constraint::Length(3), // quick actions
        ])
        .split(area);

    render_emergency(f, chunks[0], app);
    render_library(f, chunks[1], app);
    render_quick_actions(f, chunks[2], app);
}

/// Crisis support block, always visible above the library
fn render_emergency(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);

    let lines: Vec<Line> = EMERGENCY_RESOURCES
        .iter()
        .map(|e| {
            let mut spans = vec![
                Span::styled(
                    format!(" {} ", e.title),
                    Style::default()
                        .fg(app.theme.danger)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("— {}", e.contact),
                    Style::default().fg(app.theme.foreground),
                ),
            ];
            if bp.at_least(Breakpoint::Wide) {
                spans.push(Span::styled(
                    format!("  {}", e.description),
                    Style::default().fg(app.theme.muted),
                ));
            }
            Line::from(spans)
        })
        .collect();

    let block = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.danger))
            .title(" 🆘 Need immediate support? "),
    );

    f.render_widget(block, area);
}

/// Tabbed resource library: one tab per category, three resources each
fn render_library(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    let titles: Vec<Line> = RESOURCE_CATEGORIES
        .iter()
        .map(|c| Line::from(c.title))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.resources_tab)
        .style(Style::default().fg(app.theme.foreground))
        .highlight_style(
            Style::default()
                .fg(app.theme.highlight)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(app.theme.border_style())
                .title(" Resource Library "),
        );
    f.render_widget(tabs, chunks[0]);

    let category = &RESOURCE_CATEGORIES[app.resources_tab.min(RESOURCE_CATEGORIES.len() - 1)];

    let items: Vec<ListItem> = category
        .resources
        .iter()
        .map(|r| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::raw(format!("{} ", r.kind.icon())),
                    Span::styled(
                        r.title,
                        Style::default()
                            .fg(app.theme.foreground)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {} · {} · {}", r.duration, r.difficulty.label(), r.kind.label()),
                        Style::default().fg(app.theme.muted),
                    ),
                ]),
                Line::styled(
                    format!("   {}", r.description),
                    Style::default().fg(app.theme.foreground),
                ),
                Line::styled(
                    format!("   {}", r.tags.join(" · ")),
                    Style::default().fg(app.theme.muted),
                ),
            ])
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(app.theme.border_style()),
    );
    f.render_widget(list, chunks[1]);
}

/// One-tap shortcuts under the library
fn render_quick_actions(f: &mut Frame, area: Rect, app: &App) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for (i, action) in QUICK_ACTIONS.iter().enumerate() {
        let cell = Paragraph::new(format!("{} {}", action.icon, action.label))
            .alignment(Alignment::Center)
            .style(Style::default().fg(app.theme.foreground))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(app.theme.border_type)
                    .border_style(app.theme.border_style()),
            );
        f.render_widget(cell, cells[i]);
    }
}
