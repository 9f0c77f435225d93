//! The resolved settings record.
//!
//! [`Settings`] is the single source of truth for all runtime configuration.
//! It is built exactly once at startup by [`Settings::load`] and then passed
//! by reference (or wrapped in an `Arc`) to the components that need it: the
//! GUI layer reads the window fields, the Azure DevOps client reads the board
//! fields and config file paths, the OpenArena websocket client reads its
//! connection fields, and the logging collaborator reads the log level and
//! log file path.
//!
//! # Environment variable overrides
//!
//! | Variable                  | Default                                                  |
//! |---------------------------|----------------------------------------------------------|
//! | `LOG_LEVEL`               | `INFO`                                                   |
//! | `MAX_WORK_ITEMS`          | `19950`                                                  |
//! | `OPENARENA_WEBSOCKET_URL` | `wss://wymocw0zke.execute-api.us-east-1.amazonaws.com/prod` |
//! | `OPENARENA_TIMEOUT`       | `30` (seconds)                                           |
//! | `OPENARENA_MAX_RETRIES`   | `3`                                                      |
//!
//! A variable that is set but empty counts as unset.  A numeric variable
//! holding a non-integer value is a startup error, not a silent fallback.
//!
//! No environment read happens inside the record itself: construction goes
//! through a lookup closure, so tests supply alternate environments without
//! mutating process state.

use std::time::Duration;

use crate::error::ConfigError;
use crate::paths::ProjectPaths;

/// Application name, shown in the window title and log banner.
pub const APP_NAME: &str = "BoardView";

/// Application version, taken from the crate manifest.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// Environment variable names, kept in one place so error messages and docs
// cannot drift apart.
const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
const ENV_MAX_WORK_ITEMS: &str = "MAX_WORK_ITEMS";
const ENV_OPENARENA_WEBSOCKET_URL: &str = "OPENARENA_WEBSOCKET_URL";
const ENV_OPENARENA_TIMEOUT: &str = "OPENARENA_TIMEOUT";
const ENV_OPENARENA_MAX_RETRIES: &str = "OPENARENA_MAX_RETRIES";

const DEFAULT_LOG_LEVEL: &str = "INFO";
const DEFAULT_MAX_WORK_ITEMS: u32 = 19950;
const DEFAULT_OPENARENA_WEBSOCKET_URL: &str =
    "wss://wymocw0zke.execute-api.us-east-1.amazonaws.com/prod";
const DEFAULT_OPENARENA_TIMEOUT_SECS: u64 = 30;
const DEFAULT_OPENARENA_MAX_RETRIES: u32 = 3;

const DEFAULT_WINDOW_SIZE: (u32, u32) = (1280, 800);
const DEFAULT_WINDOW_MIN_SIZE: (u32, u32) = (960, 600);

/// Immutable record of all resolved configuration values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Filesystem layout, fixed relative to the project root.
    pub paths: ProjectPaths,
    /// Logging configuration for the logging collaborator.
    pub logging: LogSettings,
    /// Main window defaults for the GUI layer.
    pub window: WindowSettings,
    /// Board query limits for the Azure DevOps client.
    pub board: BoardSettings,
    /// Connection settings for the OpenArena websocket client.
    pub openarena: OpenArenaSettings,
}

/// Log level and output path, read by the logging collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// Log level name, e.g. `INFO` or `DEBUG`.  Env: `LOG_LEVEL`.
    pub level: String,
    /// Path of the log file under the project's `logs/` directory.
    pub file: std::path::PathBuf,
}

/// Main window geometry and title, read by the GUI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSettings {
    /// Window title, derived from the application name and version.
    pub title: String,
    /// Initial window size in pixels, `(width, height)`.
    pub size: (u32, u32),
    /// Minimum window size in pixels, `(width, height)`.
    pub min_size: (u32, u32),
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: format!("{APP_NAME} v{APP_VERSION}"),
            size: DEFAULT_WINDOW_SIZE,
            min_size: DEFAULT_WINDOW_MIN_SIZE,
        }
    }
}

/// Azure DevOps board query limits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSettings {
    /// Upper bound on work items fetched per board query.
    /// Env: `MAX_WORK_ITEMS`.
    pub max_work_items: u32,
}

/// OpenArena websocket connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenArenaSettings {
    /// Websocket endpoint URL.  Env: `OPENARENA_WEBSOCKET_URL`.
    pub websocket_url: String,
    /// Per-request timeout.  Env: `OPENARENA_TIMEOUT` (seconds).
    pub timeout: Duration,
    /// Maximum reconnect attempts.  Env: `OPENARENA_MAX_RETRIES`.
    pub max_retries: u32,
}

impl Settings {
    /// Resolves settings from the process environment and guarantees the log
    /// directory exists afterwards.
    ///
    /// This is the one deliberate side effect of configuration loading.  It
    /// is idempotent: loading twice in sequence succeeds and leaves the same
    /// directory in place.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidInteger`] when a numeric environment
    /// variable holds a non-integer value, and [`ConfigError::CreateLogDir`]
    /// when the log directory cannot be created for a reason other than
    /// already existing.
    pub fn load(paths: ProjectPaths) -> Result<Self, ConfigError> {
        let settings = Self::from_env(paths)?;
        settings.paths.ensure_log_dir()?;
        tracing::debug!(
            root = %settings.paths.base_dir.display(),
            log_level = %settings.logging.level,
            "settings loaded"
        );
        Ok(settings)
    }

    /// Resolves settings from the process environment without side effects.
    pub fn from_env(paths: ProjectPaths) -> Result<Self, ConfigError> {
        Self::from_lookup(paths, |var| std::env::var(var).ok())
    }

    /// Resolves settings from an arbitrary variable lookup.
    ///
    /// The lookup returns `Some(value)` when the variable is set.  Values
    /// that are empty after trimming count as unset.  Production code goes
    /// through [`from_env`](Self::from_env); tests pass a closure over a map
    /// so they never touch the process environment.
    pub fn from_lookup<F>(paths: ProjectPaths, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let level = string_or(&lookup, ENV_LOG_LEVEL, DEFAULT_LOG_LEVEL);
        let max_work_items =
            int_or(&lookup, ENV_MAX_WORK_ITEMS, DEFAULT_MAX_WORK_ITEMS)?;
        let websocket_url = string_or(
            &lookup,
            ENV_OPENARENA_WEBSOCKET_URL,
            DEFAULT_OPENARENA_WEBSOCKET_URL,
        );
        let timeout_secs = int_or(
            &lookup,
            ENV_OPENARENA_TIMEOUT,
            DEFAULT_OPENARENA_TIMEOUT_SECS,
        )?;
        let max_retries = int_or(
            &lookup,
            ENV_OPENARENA_MAX_RETRIES,
            DEFAULT_OPENARENA_MAX_RETRIES,
        )?;

        Ok(Self {
            logging: LogSettings {
                level,
                file: paths.log_file.clone(),
            },
            window: WindowSettings::default(),
            board: BoardSettings { max_work_items },
            openarena: OpenArenaSettings {
                websocket_url,
                timeout: Duration::from_secs(timeout_secs),
                max_retries,
            },
            paths,
        })
    }
}

/// Returns the looked-up value, or `default` when the variable is unset or
/// empty.
fn string_or<F>(lookup: &F, var: &'static str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(v) if !v.trim().is_empty() => v,
        _ => default.to_string(),
    }
}

/// Parses the looked-up value as an integer, or returns `default` when the
/// variable is unset or empty.
///
/// A present but non-numeric value is a hard error naming the variable, so
/// deployment typos surface at startup instead of being papered over.
fn int_or<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr<Err = std::num::ParseIntError>,
{
    match lookup(var) {
        Some(v) if !v.trim().is_empty() => {
            v.trim().parse().map_err(|source| ConfigError::InvalidInteger {
                var,
                value: v,
                source,
            })
        }
        _ => Ok(default),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn paths() -> ProjectPaths {
        ProjectPaths::from_root("/opt/boardview")
    }

    /// Lookup over a fixed map, standing in for the process environment.
    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_all_vars_unset_yields_documented_defaults() {
        // Arrange / Act
        let s = Settings::from_lookup(paths(), |_| None).unwrap();

        // Assert — exactly the documented defaults
        assert_eq!(s.logging.level, "INFO");
        assert_eq!(s.board.max_work_items, 19950);
        assert_eq!(
            s.openarena.websocket_url,
            "wss://wymocw0zke.execute-api.us-east-1.amazonaws.com/prod"
        );
        assert_eq!(s.openarena.timeout, Duration::from_secs(30));
        assert_eq!(s.openarena.max_retries, 3);
    }

    #[test]
    fn test_all_vars_set_yields_given_values() {
        // Arrange
        let lookup = env(&[
            ("LOG_LEVEL", "DEBUG"),
            ("MAX_WORK_ITEMS", "500"),
            ("OPENARENA_WEBSOCKET_URL", "wss://example.test/board"),
            ("OPENARENA_TIMEOUT", "45"),
            ("OPENARENA_MAX_RETRIES", "7"),
        ]);

        // Act
        let s = Settings::from_lookup(paths(), lookup).unwrap();

        // Assert
        assert_eq!(s.logging.level, "DEBUG");
        assert_eq!(s.board.max_work_items, 500);
        assert_eq!(s.openarena.websocket_url, "wss://example.test/board");
        assert_eq!(s.openarena.timeout, Duration::from_secs(45));
        assert_eq!(s.openarena.max_retries, 7);
    }

    #[test]
    fn test_malformed_max_work_items_is_an_error_not_a_fallback() {
        // Arrange
        let lookup = env(&[("MAX_WORK_ITEMS", "abc")]);

        // Act
        let result = Settings::from_lookup(paths(), lookup);

        // Assert — fail fast, and the message names the variable
        let err = result.unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidInteger {
                var: "MAX_WORK_ITEMS",
                ..
            }
        ));
        assert!(err.to_string().contains("MAX_WORK_ITEMS"));
    }

    #[test]
    fn test_malformed_openarena_timeout_is_an_error() {
        let lookup = env(&[("OPENARENA_TIMEOUT", "soon")]);
        let result = Settings::from_lookup(paths(), lookup);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidInteger {
                var: "OPENARENA_TIMEOUT",
                ..
            })
        ));
    }

    #[test]
    fn test_empty_value_counts_as_unset() {
        // Arrange: set but empty (and one whitespace-only)
        let lookup = env(&[("LOG_LEVEL", ""), ("MAX_WORK_ITEMS", "  ")]);

        // Act
        let s = Settings::from_lookup(paths(), lookup).unwrap();

        // Assert — defaults apply
        assert_eq!(s.logging.level, "INFO");
        assert_eq!(s.board.max_work_items, 19950);
    }

    #[test]
    fn test_single_override_leaves_other_defaults_intact() {
        // Scenario from the original design: OPENARENA_TIMEOUT=45, rest unset.
        let lookup = env(&[("OPENARENA_TIMEOUT", "45")]);
        let s = Settings::from_lookup(paths(), lookup).unwrap();
        assert_eq!(s.openarena.timeout, Duration::from_secs(45));
        assert_eq!(s.openarena.max_retries, 3);
        assert_eq!(s.logging.level, "INFO");
    }

    #[test]
    fn test_integer_values_tolerate_surrounding_whitespace() {
        let lookup = env(&[("OPENARENA_MAX_RETRIES", " 5 ")]);
        let s = Settings::from_lookup(paths(), lookup).unwrap();
        assert_eq!(s.openarena.max_retries, 5);
    }

    #[test]
    fn test_log_file_matches_project_paths() {
        let p = paths();
        let s = Settings::from_lookup(p.clone(), |_| None).unwrap();
        assert_eq!(s.logging.file, p.log_file);
    }

    #[test]
    fn test_window_title_carries_app_name_and_version() {
        let s = Settings::from_lookup(paths(), |_| None).unwrap();
        assert!(s.window.title.contains(APP_NAME));
        assert!(s.window.title.contains(APP_VERSION));
    }

    #[test]
    fn test_window_min_size_never_exceeds_default_size() {
        let w = WindowSettings::default();
        assert!(w.min_size.0 <= w.size.0);
        assert!(w.min_size.1 <= w.size.1);
    }

    #[test]
    fn test_settings_can_be_cloned_and_compared() {
        // Cloneability is required so an Arc<Settings> alternative (plain
        // clone per component) also works.
        let s = Settings::from_lookup(paths(), |_| None).unwrap();
        let cloned = s.clone();
        assert_eq!(s, cloned);
    }
}
