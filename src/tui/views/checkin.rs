// Check-in view - the daily mood check-in form
//
// Four focusable rows: the mood selector, the factor chips, the notes field
// and the submit button. Focus moves with Tab/Shift+Tab; the form state
// itself lives in `crate::checkin`.

use crate::catalog::{MOOD_OPTIONS, WELLNESS_FACTORS};
use crate::tui::app::{App, CheckinFocus};
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Main render function for the check-in view
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // mood selector
            Constraint::Length(5), // factor chips
            Constraint::Min(5),    // notes
            Constraint::Length(3), // submit
        ])
        .split(area);

    render_mood_row(f, chunks[0], app);
    render_factors(f, chunks[1], app);
    render_notes(f, chunks[2], app);
    render_submit(f, chunks[3], app);
}

fn row_border(app: &App, focus: CheckinFocus) -> Style {
    if app.cursor.focus == focus {
        app.theme.border_focused_style()
    } else {
        app.theme.border_style()
    }
}

/// The five mood options side by side, best first
fn render_mood_row(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.cursor.focus == CheckinFocus::Mood;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(row_border(app, CheckinFocus::Mood))
        .title(" How are you feeling today? ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 5); 5])
        .split(inner);

    let bp = Breakpoint::from_width(area.width);

    for (i, option) in MOOD_OPTIONS.iter().enumerate() {
        let is_selected = app.form.mood() == Some(option.value);
        let is_highlighted = focused && i == app.cursor.mood_index;

        let marker = if is_selected { "●" } else { "○" };
        let text = if bp.at_least(Breakpoint::Normal) {
            format!("{} {} {}", marker, option.emoji, option.label)
        } else {
            format!("{} {}", marker, option.emoji)
        };

        let style = if is_highlighted {
            app.theme.selected_style()
        } else if is_selected {
            Style::default()
                .fg(app.theme.mood_color(option.value))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.foreground)
        };

        let cell = Paragraph::new(Line::from(vec![
            Span::styled(text, style),
            Span::styled(
                format!(" {}", option.value),
                Style::default().fg(app.theme.muted),
            ),
        ]))
        .alignment(Alignment::Center);

        f.render_widget(cell, cells[i]);
    }
}

/// The seven factor chips, toggled with Space/Enter
fn render_factors(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.cursor.focus == CheckinFocus::Factors;

    let count = app.form.factor_count();
    let title = if count > 0 {
        format!(" What's affecting your wellness? ({count} selected) ")
    } else {
        " What's affecting your wellness? ".to_string()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(row_border(app, CheckinFocus::Factors))
        .title(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Chips flow onto two lines; widths are uneven so spans, not a grid
    let mut lines: Vec<Line> = vec![Line::default(), Line::default()];
    for (i, factor) in WELLNESS_FACTORS.iter().enumerate() {
        let toggled = app.form.has_factor(factor);
        let is_highlighted = focused && i == app.cursor.factor_index;

        let marker = if toggled { "☑" } else { "☐" };
        let style = if is_highlighted {
            app.theme.selected_style()
        } else if toggled {
            Style::default()
                .fg(app.theme.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.foreground)
        };

        let row = if i < 4 { 0 } else { 1 };
        lines[row].push_span(Span::raw(" "));
        lines[row].push_span(Span::styled(format!("{marker} {factor}"), style));
        lines[row].push_span(Span::raw(" "));
    }

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

/// Free-text notes field
fn render_notes(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.cursor.focus == CheckinFocus::Notes;

    let title = if focused {
        " Additional notes (typing captured, Esc to leave) "
    } else {
        " Additional notes (optional) "
    };

    let text = if app.form.notes().is_empty() && !focused {
        Line::styled(
            "How was your day? Any specific thoughts or feelings?",
            Style::default().fg(app.theme.muted),
        )
    } else {
        // Trailing block marks the insertion point
        let mut spans = vec![Span::styled(
            app.form.notes().to_string(),
            Style::default().fg(app.theme.foreground),
        )];
        if focused {
            spans.push(Span::styled("█", Style::default().fg(app.theme.highlight)));
        }
        Line::from(spans)
    };

    let notes = Paragraph::new(text).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(row_border(app, CheckinFocus::Notes))
            .title(title),
    );

    f.render_widget(notes, area);
}

/// Submit affordance; visually disabled until a mood is selected.
/// The real guard lives in the form - this is presentation only.
fn render_submit(f: &mut Frame, area: Rect, app: &App) {
    let ready = app.form.mood().is_some();
    let focused = app.cursor.focus == CheckinFocus::Submit;

    let (text, style) = if ready {
        (
            "✓ Complete Check-in",
            Style::default()
                .fg(app.theme.highlight)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            "Select a mood to complete your check-in",
            Style::default().fg(app.theme.muted),
        )
    };

    let button = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(if focused {
                app.theme.border_focused_style()
            } else {
                app.theme.border_style()
            }),
    );

    f.render_widget(button, area);
}
