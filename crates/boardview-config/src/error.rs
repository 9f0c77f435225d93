//! Error type for configuration loading.
//!
//! All failures surface at startup; there is no recovery path.  A malformed
//! environment variable or an uncreatable log directory means the application
//! refuses to start with a message naming the offending variable or path,
//! rather than proceeding with corrupted settings.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for settings resolution and config file access.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable that must hold an integer holds something else.
    ///
    /// Resolution fails fast instead of silently falling back to the default,
    /// so a typo in a deployment environment is caught at startup.
    #[error("environment variable {var} must be an integer, got '{value}'")]
    InvalidInteger {
        var: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// The log directory could not be created.
    ///
    /// "Already exists" is never reported here; directory creation is
    /// idempotent.  This variant covers real filesystem failures such as
    /// permission denied.
    #[error("could not create log directory {path}: {source}")]
    CreateLogDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No ancestor of the executable contains a `config/` directory.
    #[error("could not locate the project root: no config/ directory above {start}")]
    NoProjectRoot { start: PathBuf },

    /// The executable's own location could not be determined.
    #[error("could not determine the executable location: {0}")]
    ExeLocation(#[source] std::io::Error),

    /// A file system I/O error occurred while reading a config file.
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The team area paths file is not valid JSON of the expected shape.
    #[error("failed to parse team area paths at {path}: {source}")]
    ParseAreaPaths {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

// ── Tests ─────────────────────────────────────────────────────────────────────
