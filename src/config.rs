// Application configuration
//
// Configuration is loaded in order of precedence:
// 1. Environment variables (highest priority)
// 2. Config file (~/.config/mindcare/config.toml)
// 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,

    /// Also write logs to rotating files
    pub file_enabled: bool,

    /// Directory for log files
    pub file_dir: PathBuf,

    /// Log file name prefix
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_prefix: "mindcare".to_string(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme name: "Dark", "Light", "Dawn", "Forest"
    pub theme: String,

    /// Use theme's background color (true) or terminal's default (false)
    pub use_theme_background: bool,

    /// How long the submission toast stays visible
    pub toast_duration_ms: u64,

    /// Jump to the dashboard after a successful check-in
    pub dashboard_redirect: bool,

    /// Delay before the post-submit dashboard jump fires
    pub dashboard_redirect_delay_ms: u64,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Logging settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
struct FileLogging {
    level: Option<String>,
    file_enabled: Option<bool>,
    file_dir: Option<String>,
    file_prefix: Option<String>,
}

/// Config file structure (everything optional; missing keys use defaults)
#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    theme: Option<String>,
    use_theme_background: Option<bool>,
    toast_duration_ms: Option<u64>,
    dashboard_redirect: Option<bool>,
    dashboard_redirect_delay_ms: Option<u64>,

    /// Optional [logging] section
    logging: Option<FileLogging>,
}

impl Config {
    /// Get the config file path: ~/.config/mindcare/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("mindcare").join("config.toml"))
    }

    /// Create config template if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        // Create parent directory
        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        let template = r#"# mindcare configuration
# Uncomment and modify options as needed

# Theme: Dark, Light, Dawn, Forest (press 't' in the app to cycle)
# theme = "Dark"

# Use theme's background color (true) or terminal's default (false)
# use_theme_background = true

# How long the check-in confirmation toast stays visible (milliseconds)
# toast_duration_ms = 4000

# Jump to the dashboard after a successful check-in (default: true).
# Note: the jump fires even if you navigate elsewhere during the delay;
# set this to false if you find that disruptive.
# dashboard_redirect = true
# dashboard_redirect_delay_ms = 2000

# Logging configuration
# [logging]
# level = "info"        # trace, debug, info, warn, error (RUST_LOG overrides)
# file_enabled = false  # Also write logs to rotating files
# file_dir = "./logs"
# file_prefix = "mindcare"
"#;

        // Write template (ignore errors - config is optional)
        let _ = std::fs::write(&path, template);
    }

    /// Load file config if it exists
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
                eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                FileConfig::default()
            }),
            Err(_) => FileConfig::default(), // File doesn't exist, use defaults
        }
    }

    /// Serialize config to TOML string (single source of truth for format)
    pub fn to_toml(&self) -> String {
        format!(
            r#"# mindcare configuration

# Theme: Dark, Light, Dawn, Forest (press 't' in the app to cycle)
theme = "{theme}"

# Use theme's background color (true) or terminal's default (false)
use_theme_background = {use_bg}

# How long the check-in confirmation toast stays visible (milliseconds)
toast_duration_ms = {toast_ms}

# Jump to the dashboard after a successful check-in.
# Note: the jump fires even if you navigate elsewhere during the delay.
dashboard_redirect = {redirect}
dashboard_redirect_delay_ms = {redirect_ms}

# Logging configuration (RUST_LOG env var overrides the level)
[logging]
level = "{log_level}"
file_enabled = {file_enabled}
file_dir = "{file_dir}"
file_prefix = "{file_prefix}"
"#,
            theme = self.theme,
            use_bg = self.use_theme_background,
            toast_ms = self.toast_duration_ms,
            redirect = self.dashboard_redirect,
            redirect_ms = self.dashboard_redirect_delay_ms,
            log_level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = self.logging.file_dir.display(),
            file_prefix = self.logging.file_prefix,
        )
    }

    /// Save current configuration to file
    pub fn save(&self) -> Result<(), std::io::Error> {
        let Some(path) = Self::config_path() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config path",
            ));
        };

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&path, self.to_toml())
    }

    /// Load configuration: file -> env vars -> defaults
    pub fn from_env() -> Self {
        let file = Self::load_file_config();
        Self::from_sources(file)
    }

    /// Merge file values with env overrides and defaults
    fn from_sources(file: FileConfig) -> Self {
        // Theme: env > file > default
        let theme = std::env::var("MINDCARE_THEME")
            .ok()
            .or(file.theme)
            .unwrap_or_else(|| "Dark".to_string());

        // Use theme background: file > default
        let use_theme_background = file.use_theme_background.unwrap_or(true);

        // Toast duration: file > default
        let toast_duration_ms = file.toast_duration_ms.unwrap_or(4_000);

        // Dashboard redirect: env (opt-out flag) > file > default
        let dashboard_redirect = std::env::var("MINDCARE_NO_REDIRECT")
            .map(|v| v != "1" && v.to_lowercase() != "true")
            .ok()
            .or(file.dashboard_redirect)
            .unwrap_or(true);

        // Redirect delay: env > file > default (2 seconds)
        let dashboard_redirect_delay_ms = std::env::var("MINDCARE_REDIRECT_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .or(file.dashboard_redirect_delay_ms)
            .unwrap_or(2_000);

        // Logging settings: file config only (RUST_LOG env var handled in main.rs)
        let file_logging = file.logging.unwrap_or_default();
        let defaults = LoggingConfig::default();
        let logging = LoggingConfig {
            level: file_logging.level.unwrap_or(defaults.level),
            file_enabled: file_logging.file_enabled.unwrap_or(defaults.file_enabled),
            file_dir: file_logging
                .file_dir
                .map(PathBuf::from)
                .unwrap_or(defaults.file_dir),
            file_prefix: file_logging.file_prefix.unwrap_or(defaults.file_prefix),
        };

        Self {
            theme,
            use_theme_background,
            toast_duration_ms,
            dashboard_redirect,
            dashboard_redirect_delay_ms,
            logging,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "Dark".to_string(),
            use_theme_background: true,
            toast_duration_ms: 4_000,
            dashboard_redirect: true,
            dashboard_redirect_delay_ms: 2_000,
            logging: LoggingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_product_behavior() {
        let config = Config::default();
        assert_eq!(config.theme, "Dark");
        assert!(config.dashboard_redirect);
        assert_eq!(config.dashboard_redirect_delay_ms, 2_000);
        assert!(!config.logging.file_enabled);
    }

    #[test]
    fn file_values_override_defaults() {
        let file: FileConfig = toml::from_str(
            r#"
            theme = "Light"
            dashboard_redirect = false

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();

        let config = Config::from_sources(file);
        assert_eq!(config.theme, "Light");
        assert!(!config.dashboard_redirect);
        assert_eq!(config.logging.level, "debug");
        // Untouched keys keep defaults
        assert_eq!(config.dashboard_redirect_delay_ms, 2_000);
    }

    #[test]
    fn to_toml_round_trips_through_parser() {
        let config = Config::default();
        let parsed: FileConfig = toml::from_str(&config.to_toml()).unwrap();
        assert_eq!(parsed.theme.as_deref(), Some("Dark"));
        assert_eq!(parsed.dashboard_redirect_delay_ms, Some(2_000));
        assert_eq!(
            parsed.logging.and_then(|l| l.level).as_deref(),
            Some("info")
        );
    }

    #[test]
    fn malformed_file_is_rejected_by_parser() {
        let file: Result<FileConfig, _> = toml::from_str("theme = 42");
        assert!(file.is_err());
        // load_file_config swallows parse errors and falls back to defaults
        let config = Config::from_sources(FileConfig::default());
        assert_eq!(
            config.toast_duration_ms,
            Config::default().toast_duration_ms
        );
    }
}
