//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const APP_NAME: &str = "cabview";
const APP_QUALIFIER: &str = "io";
const APP_ORGANIZATION: &str = "cabview";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl LogLevel {
    /// Converts to tracing level.
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        };
        f.write_str(name)
    }
}

/// Application configuration from file and CLI.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Enable mouse support.
    #[serde(default = "default_true")]
    pub mouse: bool,

    /// Display behavior configuration.
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Display behavior configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Seconds of inactivity before the display blanks. Zero disables
    /// blanking.
    #[serde(default = "default_screen_timeout")]
    pub screen_timeout_secs: u64,

    /// Use a 24-hour clock on the home view.
    #[serde(default = "default_true")]
    pub clock_24h: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            screen_timeout_secs: default_screen_timeout(),
            clock_24h: true,
        }
    }
}

fn default_screen_timeout() -> u64 {
    30
}

fn default_true() -> bool {
    true
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(mouse) = args.mouse {
            self.mouse = mouse;
        }
        if let Some(screen_timeout) = args.screen_timeout {
            self.display.screen_timeout_secs = screen_timeout;
        }
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("cabview.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: None,
            log_level: LogLevel::Info,
            mouse: true,
            display: DisplayConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_with_display_section() {
        let toml_content = r#"
            log_level = "debug"
            mouse = false

            [display]
            screen_timeout_secs = 120
            clock_24h = false
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert!(!config.mouse);
        assert_eq!(config.display.screen_timeout_secs, 120);
        assert!(!config.display.clock_24h);
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.log_level, LogLevel::Info);
        assert!(config.mouse); // default_true
        assert_eq!(config.display.screen_timeout_secs, 30);
        assert!(config.display.clock_24h);
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let config: AppConfig =
            toml::from_str("mouse = false").expect("Failed to parse config");

        assert!(!config.mouse);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.display.screen_timeout_secs, 30);
    }

    #[test]
    fn test_merge_with_args_overrides_file_values() {
        let mut config = AppConfig::default();
        let args = CliArgs {
            config: None,
            log_path: Some(PathBuf::from("/tmp/cabview.log")),
            log_level: Some(LogLevel::Trace),
            mouse: Some(false),
            screen_timeout: Some(5),
            reset_onboarding: false,
        };

        config.merge_with_args(args);

        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/cabview.log")));
        assert_eq!(config.log_level, LogLevel::Trace);
        assert!(!config.mouse);
        assert_eq!(config.display.screen_timeout_secs, 5);
    }
}
