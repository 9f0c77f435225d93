//! # boardview-config
//!
//! Settings resolver for BoardView, a desktop viewer for Azure DevOps board
//! data.  This crate owns the configuration contract shared by the rest of
//! the application:
//!
//! - **`paths`** – the project-relative filesystem layout, derived from one
//!   root fixed at load time.
//! - **`settings`** – the immutable settings record: environment overrides
//!   with typed defaults, window and logging defaults, OpenArena websocket
//!   connection settings.
//! - **`area_paths`** – loader for `config/team_area_paths.json`.
//! - **`error`** – the startup error taxonomy.
//!
//! Configuration is loaded exactly once, deliberately, by the application
//! entry point:
//!
//! ```no_run
//! use boardview_config::{ProjectPaths, Settings};
//!
//! let paths = ProjectPaths::discover()?;
//! let settings = Settings::load(paths)?;
//! assert_eq!(settings.logging.level, "INFO");
//! # Ok::<(), boardview_config::ConfigError>(())
//! ```
//!
//! `Settings::load` has one side effect: it creates the `logs/` directory if
//! absent.  Everything else is pure resolution.  There is no process-global
//! state; callers own the record and hand it to the components that need it.

pub mod area_paths;
pub mod error;
pub mod paths;
pub mod settings;

// Re-export the types callers touch at startup so they can write
// `boardview_config::Settings` instead of the full module path.
pub use area_paths::TeamAreaPaths;
pub use error::ConfigError;
pub use paths::ProjectPaths;
pub use settings::{
    BoardSettings, LogSettings, OpenArenaSettings, Settings, WindowSettings, APP_NAME, APP_VERSION,
};
