//! Toast notification component
//!
//! A non-blocking overlay that auto-dismisses after a configurable duration.
//! Renders in the bottom-right corner on top of all other content.

use crate::tui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

/// A toast notification that auto-dismisses
pub struct Toast {
    /// Headline ("Check-in Completed! ✨")
    pub title: String,
    /// Supporting line under the headline
    pub description: String,
    /// When the toast was created
    created_at: Instant,
    /// How long to show the toast
    duration: Duration,
}

impl Toast {
    pub fn new(title: impl Into<String>, description: impl Into<String>, duration: Duration) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            created_at: Instant::now(),
            duration,
        }
    }

    /// Check if the toast has expired and should be removed
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    /// Render the toast in the bottom-right corner
    ///
    /// Uses `Clear` widget to ensure toast is visible on top of other content.
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        // Emoji are double-width; measure, don't count chars
        let content_width = self.title.width().max(self.description.width()) as u16;
        let width = (content_width + 4).min(area.width.saturating_sub(4));
        let height = 4; // title + description + borders

        // Bottom-right corner, offset by 2 cells from the edge
        let x = area.right().saturating_sub(width + 2);
        let y = area.bottom().saturating_sub(height + 2);

        let toast_area = Rect::new(x, y, width, height);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.highlight))
            .style(Style::default().bg(theme.background));

        let lines = vec![
            Line::from(Span::styled(
                self.title.as_str(),
                Style::default()
                    .fg(theme.highlight)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.description.as_str(),
                Style::default().fg(theme.foreground),
            )),
        ];

        let text = Paragraph::new(lines).alignment(Alignment::Center).block(block);

        // Clear the area first so the toast appears on top
        f.render_widget(Clear, toast_area);
        f.render_widget(text, toast_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_expires_after_its_duration() {
        let toast = Toast::new("Title", "Description", Duration::from_millis(10));
        assert!(!toast.is_expired());
        std::thread::sleep(Duration::from_millis(15));
        assert!(toast.is_expired());
    }
}
