// Dashboard view - wellness overview
//
// Overview cards, the week's mood and wellness sparklines, per-category
// gauges with trend arrows, and the insight list. The week is the static
// mock dataset; only the check-in count reflects the live session.

use crate::catalog::{
    self, Insight, Trend, INSIGHTS, MOCK_WEEK, WELLNESS_METRICS,
};
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Sparkline},
    Frame,
};

/// Main render function for the dashboard
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // overview cards
            Constraint::Length(6), // week sparklines
            Constraint::Length(6), // category gauges
            Constraint::Min(5),    // insights
        ])
        .split(area);

    render_overview(f, chunks[0], app);
    render_week(f, chunks[1], app, bp);
    render_metrics(f, chunks[2], app, bp);
    render_insights(f, chunks[3], app);
}

/// Three overview cards: current mood, weekly average, streak
fn render_overview(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    let mood = catalog::current_mood();
    render_card(
        f,
        cards[0],
        app,
        "Current Mood",
        Line::from(vec![
            Span::raw(format!("{} ", catalog::mood_emoji(mood))),
            Span::styled(
                catalog::mood_label(mood),
                Style::default()
                    .fg(app.theme.mood_color(mood))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    );

    let average = catalog::weekly_average();
    render_card(
        f,
        cards[1],
        app,
        "Weekly Average",
        Line::from(Span::styled(
            format!("{average}%"),
            Style::default()
                .fg(app.theme.score_color(average))
                .add_modifier(Modifier::BOLD),
        )),
    );

    render_card(
        f,
        cards[2],
        app,
        "Check-in Streak",
        Line::from(vec![
            Span::styled(
                "7 Days",
                Style::default()
                    .fg(app.theme.achievement)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" (+{} today)", app.submissions.len()),
                Style::default().fg(app.theme.muted),
            ),
        ]),
    );
}

fn render_card(f: &mut Frame, area: Rect, app: &App, title: &str, value: Line) {
    let card = Paragraph::new(vec![Line::default(), value])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(app.theme.border_style())
                .title(format!(" {title} ")),
        );
    f.render_widget(card, area);
}

/// Mood and wellness sparklines over the mock week
fn render_week(f: &mut Frame, area: Rect, app: &App, bp: Breakpoint) {
    let panes: Vec<Rect> = if bp.at_least(Breakpoint::Normal) {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 2); 2])
            .split(area)
            .to_vec()
    } else {
        // Narrow terminals only get the mood trend
        vec![area]
    };

    let moods: Vec<u64> = MOCK_WEEK.iter().map(|d| d.mood as u64).collect();
    let day_labels: String = MOCK_WEEK
        .iter()
        .map(|d| format!("{:<4}", d.day))
        .collect();

    let mood_spark = Sparkline::default()
        .data(&moods)
        .max(5)
        .style(Style::default().fg(app.theme.highlight))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(app.theme.border_style())
                .title(" Mood Trend (Mon-Sun) ")
                .title_bottom(Line::from(format!(" {day_labels}")).left_aligned()),
        );
    f.render_widget(mood_spark, panes[0]);

    if panes.len() > 1 {
        let scores: Vec<u64> = MOCK_WEEK.iter().map(|d| d.wellness as u64).collect();
        let score_spark = Sparkline::default()
            .data(&scores)
            .max(100)
            .style(Style::default().fg(app.theme.score_high))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(app.theme.border_type)
                    .border_style(app.theme.border_style())
                    .title(" Wellness Score "),
            );
        f.render_widget(score_spark, panes[1]);
    }
}

/// Per-category score gauges with trend arrows
fn render_metrics(f: &mut Frame, area: Rect, app: &App, bp: Breakpoint) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(app.theme.border_style())
        .title(" Wellness Categories ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Two columns of two gauges; single column when compact
    let columns: Vec<Rect> = if bp.at_least(Breakpoint::Normal) {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 2); 2])
            .split(inner)
            .to_vec()
    } else {
        vec![inner]
    };

    let per_column = WELLNESS_METRICS.len().div_ceil(columns.len());
    for (col_idx, column) in columns.iter().enumerate() {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(2); per_column])
            .split(*column);

        for row in 0..per_column {
            let Some(metric) = WELLNESS_METRICS.get(col_idx * per_column + row) else {
                break;
            };
            let trend_color = match metric.trend {
                Trend::Up => app.theme.positive,
                Trend::Down => app.theme.concern,
                Trend::Stable => app.theme.muted,
            };
            let gauge = Gauge::default()
                .gauge_style(Style::default().fg(app.theme.score_color(metric.score)))
                .ratio(f64::from(metric.score) / 100.0)
                .label(Span::styled(
                    format!("{} {} {}%", metric.category, metric.trend.arrow(), metric.score),
                    Style::default().fg(trend_color),
                ));
            f.render_widget(gauge, rows[row]);
        }
    }
}

/// The recent insights list
fn render_insights(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = INSIGHTS.iter().map(|i| insight_item(i, app)).collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(app.theme.border_style())
            .title(" Recent Insights "),
    );

    f.render_widget(list, area);
}

fn insight_item<'a>(insight: &'a Insight, app: &App) -> ListItem<'a> {
    let kind_color = match insight.kind {
        catalog::InsightKind::Positive => app.theme.positive,
        catalog::InsightKind::Concern => app.theme.concern,
        catalog::InsightKind::Achievement => app.theme.achievement,
    };

    ListItem::new(vec![
        Line::from(vec![
            Span::raw(format!("{} ", insight.kind.icon())),
            Span::styled(
                insight.title,
                Style::default().fg(kind_color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", insight.time),
                Style::default().fg(app.theme.muted),
            ),
        ]),
        Line::styled(
            format!("   {}", insight.description),
            Style::default().fg(app.theme.foreground),
        ),
    ])
}
