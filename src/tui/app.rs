// TUI application state
//
// Holds the single page-level state: the active section, the check-in form,
// the session's recorded submissions, the toast overlay and the pending
// post-submit dashboard jump.

use super::components::Toast;
use super::input::InputHandler;
use super::modal::Modal;
use super::theme::{Theme, ThemeKind};
use crate::catalog::{MOOD_OPTIONS, RESOURCE_CATEGORIES, WELLNESS_FACTORS};
use crate::checkin::{CheckInForm, CheckInSubmission};
use crate::config::Config;
use crate::logging::LogBuffer;
use chrono::{DateTime, Utc};
use std::time::{Duration, Instant};

/// The four top-level sections of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    CheckIn,
    Dashboard,
    Resources,
    Profile,
}

impl Section {
    /// Resolve a section id. Unrecognized ids fall back to the default
    /// check-in view; this mirrors the navigation contract where an unknown
    /// id simply renders the default rather than erroring.
    pub fn from_id(id: &str) -> Self {
        match id {
            "check-in" => Section::CheckIn,
            "dashboard" => Section::Dashboard,
            "resources" => Section::Resources,
            "profile" => Section::Profile,
            _ => Section::default(),
        }
    }

    /// The section's id, matching the navigation catalog
    pub fn id(&self) -> &'static str {
        match self {
            Section::CheckIn => "check-in",
            Section::Dashboard => "dashboard",
            Section::Resources => "resources",
            Section::Profile => "profile",
        }
    }

    /// Position in the navigation bar
    pub fn nav_index(&self) -> usize {
        match self {
            Section::CheckIn => 0,
            Section::Dashboard => 1,
            Section::Resources => 2,
            Section::Profile => 3,
        }
    }
}

/// Which part of the check-in form has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckinFocus {
    #[default]
    Mood,
    Factors,
    Notes,
    Submit,
}

impl CheckinFocus {
    pub fn next(self) -> Self {
        match self {
            CheckinFocus::Mood => CheckinFocus::Factors,
            CheckinFocus::Factors => CheckinFocus::Notes,
            CheckinFocus::Notes => CheckinFocus::Submit,
            CheckinFocus::Submit => CheckinFocus::Mood,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            CheckinFocus::Mood => CheckinFocus::Submit,
            CheckinFocus::Factors => CheckinFocus::Mood,
            CheckinFocus::Notes => CheckinFocus::Factors,
            CheckinFocus::Submit => CheckinFocus::Notes,
        }
    }
}

/// Cursor state for the check-in view (presentation only; the form itself
/// lives in `crate::checkin`)
#[derive(Debug, Default)]
pub struct CheckinCursor {
    pub focus: CheckinFocus,
    /// Highlighted entry in the mood row (display order)
    pub mood_index: usize,
    /// Highlighted factor chip
    pub factor_index: usize,
}

impl CheckinCursor {
    /// Move the highlight left within the focused row
    pub fn move_left(&mut self) {
        match self.focus {
            CheckinFocus::Mood => self.mood_index = self.mood_index.saturating_sub(1),
            CheckinFocus::Factors => self.factor_index = self.factor_index.saturating_sub(1),
            _ => {}
        }
    }

    /// Move the highlight right within the focused row
    pub fn move_right(&mut self) {
        match self.focus {
            CheckinFocus::Mood => {
                if self.mood_index < MOOD_OPTIONS.len() - 1 {
                    self.mood_index += 1;
                }
            }
            CheckinFocus::Factors => {
                if self.factor_index < WELLNESS_FACTORS.len() - 1 {
                    self.factor_index += 1;
                }
            }
            _ => {}
        }
    }
}

/// Main application state for the TUI
pub struct App {
    /// The active section (the single page-level routing value)
    pub section: Section,

    /// The in-progress check-in form
    pub form: CheckInForm,

    /// Keyboard cursor within the check-in view
    pub cursor: CheckinCursor,

    /// Check-ins recorded this session, most recent last
    pub submissions: Vec<(DateTime<Utc>, CheckInSubmission)>,

    /// Transient confirmation overlay
    pub toast: Option<Toast>,

    /// Selected tab in the Resources view
    pub resources_tab: usize,

    /// Active modal overlay, if any
    pub modal: Option<Modal>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Current theme
    pub theme: Theme,
    pub theme_kind: ThemeKind,

    /// Application configuration
    pub config: Config,

    /// Log buffer for the Profile view's activity list
    pub log_buffer: LogBuffer,

    /// When the app started (for uptime display)
    pub start_time: Instant,

    /// Deadline of the pending post-submit dashboard jump.
    /// One-shot and uncancellable: it survives manual navigation and fires
    /// regardless of the section active at the deadline.
    pending_redirect: Option<Instant>,

    /// Input handler for flexible key behavior
    input_handler: InputHandler,
}

impl App {
    pub fn with_config(log_buffer: LogBuffer, config: Config) -> Self {
        let theme_kind = ThemeKind::from_name(&config.theme);
        Self {
            section: Section::default(),
            form: CheckInForm::new(),
            cursor: CheckinCursor::default(),
            submissions: Vec::new(),
            toast: None,
            resources_tab: 0,
            modal: None,
            should_quit: false,
            theme: theme_kind.theme(),
            theme_kind,
            config,
            log_buffer,
            start_time: Instant::now(),
            pending_redirect: None,
            input_handler: InputHandler::default(),
        }
    }

    /// Switch to the section identified by `id`; unknown ids land on the
    /// default check-in view
    pub fn select_section(&mut self, id: &str) {
        self.set_section(Section::from_id(id));
    }

    /// Switch to a specific section
    pub fn set_section(&mut self, section: Section) {
        if self.section != section {
            tracing::debug!("Switching section: {} -> {}", self.section.id(), section.id());
        }
        self.section = section;
    }

    /// Submit the check-in form.
    ///
    /// On success: records the submission, shows the confirmation toast and
    /// schedules the delayed dashboard jump. With no mood selected the form
    /// rejects silently and nothing here runs.
    pub fn submit_checkin(&mut self) {
        let mut produced = None;
        self.form.submit(|s| produced = Some(s));
        let Some(submission) = produced else {
            return;
        };

        match serde_json::to_string(&submission) {
            Ok(json) => tracing::info!("Check-in recorded: {}", json),
            Err(e) => tracing::warn!("Could not serialize check-in: {}", e),
        }

        self.submissions.push((Utc::now(), submission));
        self.cursor = CheckinCursor::default();

        self.show_toast(
            "Check-in Completed! ✨",
            "Your wellness data has been recorded. Thank you for taking care of yourself!",
        );

        if self.config.dashboard_redirect {
            self.pending_redirect = Some(
                Instant::now() + Duration::from_millis(self.config.dashboard_redirect_delay_ms),
            );
        }
    }

    /// Show a transient toast notification
    pub fn show_toast(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.toast = Some(Toast::new(
            title,
            description,
            Duration::from_millis(self.config.toast_duration_ms),
        ));
    }

    /// Periodic tick: expire the toast and fire the pending dashboard jump
    pub fn tick(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }

        if let Some(deadline) = self.pending_redirect {
            if Instant::now() >= deadline {
                self.pending_redirect = None;
                tracing::debug!("Post-submit jump to dashboard");
                self.set_section(Section::Dashboard);
            }
        }
    }

    /// Whether a post-submit jump is still pending
    pub fn redirect_pending(&self) -> bool {
        self.pending_redirect.is_some()
    }

    /// Cycle to the next theme and persist the choice
    pub fn next_theme(&mut self) {
        self.theme_kind = self.theme_kind.next();
        self.theme = self.theme_kind.theme();
        self.config.theme = self.theme_kind.name().to_string();
        if let Err(e) = self.config.save() {
            tracing::warn!("Could not save theme preference: {}", e);
        }
    }

    /// Switch to the next resource category tab (wraps)
    pub fn next_resources_tab(&mut self) {
        self.resources_tab = (self.resources_tab + 1) % RESOURCE_CATEGORIES.len();
    }

    /// Switch to the previous resource category tab (wraps)
    pub fn prev_resources_tab(&mut self) {
        self.resources_tab =
            (self.resources_tab + RESOURCE_CATEGORIES.len() - 1) % RESOURCE_CATEGORIES.len();
    }

    /// Handle a key press - returns true if the action should be triggered
    pub fn handle_key_press(&mut self, key: crossterm::event::KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    /// Handle a key release
    pub fn handle_key_release(&mut self, key: crossterm::event::KeyCode) {
        self.input_handler.handle_key_release(key);
    }

    /// Get uptime as a formatted string
    pub fn uptime(&self) -> String {
        let elapsed = self.start_time.elapsed();
        let seconds = elapsed.as_secs();
        let hours = seconds / 3600;
        let minutes = (seconds % 3600) / 60;
        let secs = seconds % 60;

        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        let mut config = Config::default();
        config.toast_duration_ms = 50;
        config.dashboard_redirect_delay_ms = 10;
        App::with_config(LogBuffer::new(), config)
    }

    #[test]
    fn default_section_is_check_in() {
        let app = test_app();
        assert_eq!(app.section, Section::CheckIn);
    }

    #[test]
    fn every_valid_id_routes_to_its_section() {
        let mut app = test_app();
        for (id, expected) in [
            ("dashboard", Section::Dashboard),
            ("resources", Section::Resources),
            ("profile", Section::Profile),
            ("check-in", Section::CheckIn),
        ] {
            app.select_section(id);
            assert_eq!(app.section, expected);
        }
    }

    #[test]
    fn unknown_id_falls_back_to_check_in() {
        let mut app = test_app();
        app.select_section("dashboard");
        app.select_section("no-such-section");
        assert_eq!(app.section, Section::CheckIn);
    }

    #[test]
    fn submit_records_toasts_and_schedules_jump() {
        let mut app = test_app();
        app.form.select_mood(4);
        app.form.toggle_factor("Sleep Quality");
        app.form.toggle_factor("Sleep Quality");
        app.form.set_notes("slept well");

        app.submit_checkin();

        assert_eq!(app.submissions.len(), 1);
        let (_, submission) = &app.submissions[0];
        assert_eq!(submission.mood, 4);
        assert!(submission.factors.is_empty());
        assert_eq!(submission.notes, "slept well");

        assert!(app.form.is_empty());
        assert!(app.toast.is_some());
        assert!(app.redirect_pending());
    }

    #[test]
    fn submit_without_mood_is_a_silent_no_op() {
        let mut app = test_app();
        app.form.set_notes("no mood selected");

        app.submit_checkin();

        assert!(app.submissions.is_empty());
        assert!(app.toast.is_none());
        assert!(!app.redirect_pending());
        assert_eq!(app.form.notes(), "no mood selected");
    }

    #[test]
    fn pending_jump_fires_after_delay() {
        let mut app = test_app();
        app.form.select_mood(5);
        app.submit_checkin();

        // Before the deadline the section is unchanged
        app.tick();
        assert_eq!(app.section, Section::CheckIn);

        std::thread::sleep(Duration::from_millis(20));
        app.tick();
        assert_eq!(app.section, Section::Dashboard);
        assert!(!app.redirect_pending());
    }

    #[test]
    fn pending_jump_overrides_manual_navigation() {
        // The jump is one-shot and uncancellable: navigating away during
        // the delay window does not stop it.
        let mut app = test_app();
        app.form.select_mood(3);
        app.submit_checkin();

        app.select_section("resources");
        assert_eq!(app.section, Section::Resources);

        std::thread::sleep(Duration::from_millis(20));
        app.tick();
        assert_eq!(app.section, Section::Dashboard);
    }

    #[test]
    fn redirect_can_be_disabled_in_config() {
        let mut app = test_app();
        app.config.dashboard_redirect = false;
        app.form.select_mood(2);
        app.submit_checkin();
        assert!(!app.redirect_pending());
    }

    #[test]
    fn toast_expires_on_tick() {
        let mut app = test_app();
        app.show_toast("Title", "Description");
        assert!(app.toast.is_some());

        std::thread::sleep(Duration::from_millis(60));
        app.tick();
        assert!(app.toast.is_none());
    }

    #[test]
    fn resources_tabs_wrap_in_both_directions() {
        let mut app = test_app();
        assert_eq!(app.resources_tab, 0);
        app.prev_resources_tab();
        assert_eq!(app.resources_tab, RESOURCE_CATEGORIES.len() - 1);
        app.next_resources_tab();
        assert_eq!(app.resources_tab, 0);
    }

    #[test]
    fn cursor_stays_within_rows() {
        let mut cursor = CheckinCursor::default();
        cursor.move_left();
        assert_eq!(cursor.mood_index, 0);
        for _ in 0..10 {
            cursor.move_right();
        }
        assert_eq!(cursor.mood_index, MOOD_OPTIONS.len() - 1);

        cursor.focus = CheckinFocus::Factors;
        for _ in 0..10 {
            cursor.move_right();
        }
        assert_eq!(cursor.factor_index, WELLNESS_FACTORS.len() - 1);
    }
}
