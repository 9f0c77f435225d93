//! Project-relative filesystem layout.
//!
//! Every path BoardView touches is derived from a single project root fixed
//! at load time, so the application behaves the same no matter which working
//! directory it was launched from:
//!
//! ```text
//! <root>/
//!   src/app/                      application package
//!   config/ado_settings.txt       consumed by the Azure DevOps client
//!   config/team_area_paths.json   consumed by the Azure DevOps client
//!   logs/app.log                  written by the logging collaborator
//! ```
//!
//! The root itself is found by [`ProjectPaths::discover`], which walks up
//! from the executable's directory to the first ancestor that contains a
//! `config/` directory.  Tests and embedders bypass discovery entirely with
//! [`ProjectPaths::from_root`].

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// All filesystem paths used by the application, derived from one root.
///
/// Construct once at startup and treat as immutable afterwards; every field
/// is guaranteed to be a subpath of [`base_dir`](Self::base_dir).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    /// Project root; every other field lives underneath it.
    pub base_dir: PathBuf,
    /// Source tree root, `<base>/src`.
    pub src_dir: PathBuf,
    /// Application package directory, `<base>/src/app`.
    pub app_dir: PathBuf,
    /// Configuration file directory, `<base>/config`.
    pub config_dir: PathBuf,
    /// Azure DevOps connection settings, `<config>/ado_settings.txt`.
    /// Expected to exist; never created or parsed by this crate.
    pub ado_settings_file: PathBuf,
    /// Team-to-area-path map, `<config>/team_area_paths.json`.
    pub team_area_paths_file: PathBuf,
    /// Log directory, `<base>/logs`.  Created on load if absent.
    pub log_dir: PathBuf,
    /// Log file path, `<base>/logs/app.log`.  The file itself is managed by
    /// the logging collaborator; only the path is resolved here.
    pub log_file: PathBuf,
}

impl ProjectPaths {
    /// Derives the full path layout from an explicit project root.
    pub fn from_root(base: impl Into<PathBuf>) -> Self {
        let base_dir = base.into();
        let src_dir = base_dir.join("src");
        let app_dir = src_dir.join("app");
        let config_dir = base_dir.join("config");
        let log_dir = base_dir.join("logs");
        Self {
            ado_settings_file: config_dir.join("ado_settings.txt"),
            team_area_paths_file: config_dir.join("team_area_paths.json"),
            log_file: log_dir.join("app.log"),
            base_dir,
            src_dir,
            app_dir,
            config_dir,
            log_dir,
        }
    }

    /// Resolves the project root from the executable's on-disk location.
    ///
    /// Walks up from the directory containing the running executable until it
    /// finds an ancestor with a `config/` subdirectory.  This keeps the
    /// layout stable when the binary runs from `target/debug/` during
    /// development as well as from an installed tree, and is independent of
    /// the current working directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ExeLocation`] if the executable path cannot be
    /// read, and [`ConfigError::NoProjectRoot`] if no ancestor contains a
    /// `config/` directory.
    pub fn discover() -> Result<Self, ConfigError> {
        let exe = std::env::current_exe().map_err(ConfigError::ExeLocation)?;
        let start = exe
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| exe.clone());
        Self::discover_from(&start)
    }

    /// Discovery starting point factored out so tests can exercise the walk
    /// without depending on where the test binary lives.
    fn discover_from(start: &Path) -> Result<Self, ConfigError> {
        let mut dir = Some(start);
        while let Some(d) = dir {
            if d.join("config").is_dir() {
                return Ok(Self::from_root(d));
            }
            dir = d.parent();
        }
        Err(ConfigError::NoProjectRoot {
            start: start.to_path_buf(),
        })
    }

    /// Creates the log directory if it does not already exist.
    ///
    /// Safe to call repeatedly; `create_dir_all` succeeds when the directory
    /// is already present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::CreateLogDir`] for any other filesystem
    /// failure, e.g. permission denied.
    pub fn ensure_log_dir(&self) -> Result<(), ConfigError> {
        std::fs::create_dir_all(&self.log_dir).map_err(|source| ConfigError::CreateLogDir {
            path: self.log_dir.clone(),
            source,
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
