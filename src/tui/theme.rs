// Theme system for the TUI
//
// Provides customizable color themes that can be switched at runtime.
// Each theme defines colors for all UI elements, including the five mood
// levels and the wellness score bands.

use crate::logging::LogLevel;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
    Dawn,
    Forest,
}

impl ThemeKind {
    /// Get all available themes
    pub fn all() -> &'static [ThemeKind] {
        &[
            ThemeKind::Dark,
            ThemeKind::Light,
            ThemeKind::Dawn,
            ThemeKind::Forest,
        ]
    }

    /// Resolve a configured theme name; unknown names fall back to Dark
    pub fn from_name(name: &str) -> Self {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(name))
            .unwrap_or_default()
    }

    /// Get the next theme in the cycle
    pub fn next(self) -> Self {
        let themes = Self::all();
        let current = themes.iter().position(|&t| t == self).unwrap_or(0);
        themes[(current + 1) % themes.len()]
    }

    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Dark => "Dark",
            ThemeKind::Light => "Light",
            ThemeKind::Dawn => "Dawn",
            ThemeKind::Forest => "Forest",
        }
    }

    /// Get the theme configuration
    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
            ThemeKind::Dawn => Theme::dawn(),
            ThemeKind::Forest => Theme::forest(),
        }
    }
}

/// Complete theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub border_type: BorderType,

    // Title and status
    pub title: Color,
    pub status_bar: Color,

    // Selection and emphasis
    pub highlight: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,

    // Mood levels 1-5 (poor .. excellent)
    pub mood_poor: Color,
    pub mood_low: Color,
    pub mood_okay: Color,
    pub mood_good: Color,
    pub mood_excellent: Color,

    // Wellness score bands (0-100)
    pub score_low: Color,
    pub score_medium: Color,
    pub score_high: Color,

    // Insight kinds
    pub positive: Color,
    pub concern: Color,
    pub achievement: Color,

    // Emergency support block
    pub danger: Color,

    // Log levels
    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,
    pub log_trace: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::White,
            muted: Color::Gray,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            border_type: BorderType::Rounded,

            title: Color::Cyan,
            status_bar: Color::Green,

            highlight: Color::Yellow,
            selected_bg: Color::DarkGray,
            selected_fg: Color::Yellow,

            mood_poor: Color::Red,
            mood_low: Color::LightRed,
            mood_okay: Color::Yellow,
            mood_good: Color::LightBlue,
            mood_excellent: Color::Green,

            score_low: Color::Red,
            score_medium: Color::Yellow,
            score_high: Color::Green,

            positive: Color::Green,
            concern: Color::Yellow,
            achievement: Color::Magenta,

            danger: Color::Red,

            log_error: Color::Red,
            log_warn: Color::Yellow,
            log_info: Color::Blue,
            log_debug: Color::Gray,
            log_trace: Color::DarkGray,
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            background: Color::White,
            foreground: Color::Black,
            muted: Color::DarkGray,
            border: Color::Gray,
            border_focused: Color::Blue,
            border_type: BorderType::Rounded,

            title: Color::Blue,
            status_bar: Color::DarkGray,

            highlight: Color::Blue,
            selected_bg: Color::LightBlue,
            selected_fg: Color::Black,

            mood_poor: Color::Red,
            mood_low: Color::Rgb(204, 102, 0),
            mood_okay: Color::Rgb(184, 134, 11), // Dark goldenrod
            mood_good: Color::Blue,
            mood_excellent: Color::Green,

            score_low: Color::Red,
            score_medium: Color::Rgb(184, 134, 11),
            score_high: Color::Green,

            positive: Color::Green,
            concern: Color::Rgb(184, 134, 11),
            achievement: Color::Magenta,

            danger: Color::Red,

            log_error: Color::Red,
            log_warn: Color::Rgb(184, 134, 11),
            log_info: Color::Blue,
            log_debug: Color::DarkGray,
            log_trace: Color::Gray,
        }
    }

    /// Dawn theme - warm pastels
    pub fn dawn() -> Self {
        Self {
            background: Color::Rgb(40, 36, 52),
            foreground: Color::Rgb(230, 220, 235),
            muted: Color::Rgb(140, 130, 158),
            border: Color::Rgb(82, 74, 101),
            border_focused: Color::Rgb(235, 160, 172),
            border_type: BorderType::Rounded,

            title: Color::Rgb(245, 194, 231),
            status_bar: Color::Rgb(166, 227, 161),

            highlight: Color::Rgb(249, 226, 175),
            selected_bg: Color::Rgb(69, 62, 88),
            selected_fg: Color::Rgb(249, 226, 175),

            mood_poor: Color::Rgb(243, 139, 168),
            mood_low: Color::Rgb(250, 179, 135),
            mood_okay: Color::Rgb(249, 226, 175),
            mood_good: Color::Rgb(137, 180, 250),
            mood_excellent: Color::Rgb(166, 227, 161),

            score_low: Color::Rgb(243, 139, 168),
            score_medium: Color::Rgb(249, 226, 175),
            score_high: Color::Rgb(166, 227, 161),

            positive: Color::Rgb(166, 227, 161),
            concern: Color::Rgb(249, 226, 175),
            achievement: Color::Rgb(203, 166, 247),

            danger: Color::Rgb(243, 139, 168),

            log_error: Color::Rgb(243, 139, 168),
            log_warn: Color::Rgb(249, 226, 175),
            log_info: Color::Rgb(137, 180, 250),
            log_debug: Color::Rgb(140, 130, 158),
            log_trace: Color::Rgb(82, 74, 101),
        }
    }

    /// Forest theme - muted greens
    pub fn forest() -> Self {
        Self {
            background: Color::Rgb(43, 51, 57),
            foreground: Color::Rgb(211, 198, 170),
            muted: Color::Rgb(133, 146, 137),
            border: Color::Rgb(71, 82, 88),
            border_focused: Color::Rgb(167, 192, 128),
            border_type: BorderType::Rounded,

            title: Color::Rgb(167, 192, 128),
            status_bar: Color::Rgb(131, 192, 146),

            highlight: Color::Rgb(219, 188, 127),
            selected_bg: Color::Rgb(62, 75, 81),
            selected_fg: Color::Rgb(219, 188, 127),

            mood_poor: Color::Rgb(230, 126, 128),
            mood_low: Color::Rgb(230, 152, 117),
            mood_okay: Color::Rgb(219, 188, 127),
            mood_good: Color::Rgb(127, 187, 179),
            mood_excellent: Color::Rgb(167, 192, 128),

            score_low: Color::Rgb(230, 126, 128),
            score_medium: Color::Rgb(219, 188, 127),
            score_high: Color::Rgb(167, 192, 128),

            positive: Color::Rgb(167, 192, 128),
            concern: Color::Rgb(219, 188, 127),
            achievement: Color::Rgb(214, 153, 182),

            danger: Color::Rgb(230, 126, 128),

            log_error: Color::Rgb(230, 126, 128),
            log_warn: Color::Rgb(219, 188, 127),
            log_info: Color::Rgb(127, 187, 179),
            log_debug: Color::Rgb(133, 146, 137),
            log_trace: Color::Rgb(71, 82, 88),
        }
    }

    // Helper methods for creating styles

    /// Color for a mood value 1-5 (out-of-range uses the okay color)
    pub fn mood_color(&self, value: u8) -> Color {
        match value {
            1 => self.mood_poor,
            2 => self.mood_low,
            3 => self.mood_okay,
            4 => self.mood_good,
            5 => self.mood_excellent,
            _ => self.mood_okay,
        }
    }

    /// Color for a wellness score 0-100
    pub fn score_color(&self, score: u8) -> Color {
        if score < 50 {
            self.score_low
        } else if score < 75 {
            self.score_medium
        } else {
            self.score_high
        }
    }

    /// Color for a log level
    pub fn log_color(&self, level: LogLevel) -> Color {
        match level {
            LogLevel::Error => self.log_error,
            LogLevel::Warn => self.log_warn,
            LogLevel::Info => self.log_info,
            LogLevel::Debug => self.log_debug,
            LogLevel::Trace => self.log_trace,
        }
    }

    /// Title style
    pub fn title_style(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    /// Border style (unfocused)
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Border style (focused)
    pub fn border_focused_style(&self) -> Style {
        Style::default().fg(self.border_focused)
    }

    /// Selected item style
    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selected_bg)
            .fg(self.selected_fg)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_cycle_visits_every_theme() {
        let mut kind = ThemeKind::Dark;
        let mut seen = vec![kind];
        for _ in 0..ThemeKind::all().len() - 1 {
            kind = kind.next();
            seen.push(kind);
        }
        seen.sort_by_key(|t| t.name());
        seen.dedup();
        assert_eq!(seen.len(), ThemeKind::all().len());
        // Cycle wraps back to the start
        assert_eq!(ThemeKind::Forest.next(), ThemeKind::Dark);
    }

    #[test]
    fn unknown_config_name_falls_back_to_dark() {
        assert_eq!(ThemeKind::from_name("dawn"), ThemeKind::Dawn);
        assert_eq!(ThemeKind::from_name("no-such-theme"), ThemeKind::Dark);
    }

    #[test]
    fn score_bands() {
        let theme = Theme::dark();
        assert_eq!(theme.score_color(10), theme.score_low);
        assert_eq!(theme.score_color(60), theme.score_medium);
        assert_eq!(theme.score_color(90), theme.score_high);
    }
}
