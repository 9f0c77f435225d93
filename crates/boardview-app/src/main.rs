//! BoardView application entry point.
//!
//! Loads the settings record, initialises structured logging, runs the
//! startup preflight checks, and hands off to the board UI shell.  The GUI
//! renderer, the Azure DevOps client, and the OpenArena websocket client are
//! wired in here in the full desktop build; the headless build logs readiness
//! and blocks until Ctrl-C.
//!
//! # Usage
//!
//! ```text
//! boardview [OPTIONS]
//!
//! Options:
//!   --root <DIR>    Project root override (otherwise discovered from the
//!                   executable location) [env: BOARDVIEW_ROOT]
//!   --print-config  Print the effective configuration and exit
//! ```
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
//! `RUST_LOG`, when set, takes precedence over `LOG_LEVEL` for the tracing
//! filter so per-module directives keep working.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use boardview_config::{ProjectPaths, Settings, TeamAreaPaths, APP_NAME, APP_VERSION};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// BoardView — desktop viewer for Azure DevOps board data.
#[derive(Debug, Parser)]
#[command(name = "boardview", about = "Azure DevOps board viewer", version)]
struct Cli {
    /// Project root directory.
    ///
    /// When omitted, the root is discovered by walking up from the
    /// executable's directory to the first ancestor containing `config/`.
    #[arg(long, env = "BOARDVIEW_ROOT")]
    root: Option<PathBuf>,

    /// Print the effective configuration and exit without starting the app.
    #[arg(long)]
    print_config: bool,
}

impl Cli {
    /// Resolves the project path layout from `--root` or by discovery.
    fn resolve_paths(&self) -> anyhow::Result<ProjectPaths> {
        match &self.root {
            Some(root) => Ok(ProjectPaths::from_root(root.clone())),
            None => ProjectPaths::discover().context("project root discovery failed"),
        }
    }
}

// ── Startup helpers ───────────────────────────────────────────────────────────

/// Renders the effective configuration for `--print-config`.
fn render_config(settings: &Settings) -> String {
    format!(
        "{APP_NAME} v{APP_VERSION}\n\
         root:                {}\n\
         config dir:          {}\n\
         ado settings file:   {}\n\
         team area paths:     {}\n\
         log level:           {}\n\
         log file:            {}\n\
         window:              {}x{} (min {}x{})\n\
         max work items:      {}\n\
         openarena url:       {}\n\
         openarena timeout:   {}s\n\
         openarena retries:   {}",
        settings.paths.base_dir.display(),
        settings.paths.config_dir.display(),
        settings.paths.ado_settings_file.display(),
        settings.paths.team_area_paths_file.display(),
        settings.logging.level,
        settings.logging.file.display(),
        settings.window.size.0,
        settings.window.size.1,
        settings.window.min_size.0,
        settings.window.min_size.1,
        settings.board.max_work_items,
        settings.openarena.websocket_url,
        settings.openarena.timeout.as_secs(),
        settings.openarena.max_retries,
    )
}

/// Warns about consumed-but-missing config files and reports the configured
/// teams.  Missing files are not fatal here: they belong to the Azure DevOps
/// client, which surfaces its own error when it actually needs them.
fn preflight(settings: &Settings) {
    if !settings.paths.ado_settings_file.is_file() {
        warn!(
            path = %settings.paths.ado_settings_file.display(),
            "ado_settings.txt not found; the Azure DevOps client will fail to connect"
        );
    }

    if settings.paths.team_area_paths_file.is_file() {
        match TeamAreaPaths::load(&settings.paths.team_area_paths_file) {
            Ok(teams) => info!(teams = teams.len(), "team area paths loaded"),
            Err(e) => warn!("team area paths file is unreadable: {e}"),
        }
    } else {
        warn!(
            path = %settings.paths.team_area_paths_file.display(),
            "team_area_paths.json not found; boards will have no team filters"
        );
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration before logging is up: the resolved log level seeds
    // the tracing filter.  Errors here go to stderr via anyhow.
    let paths = cli.resolve_paths()?;
    let settings = Settings::load(paths).context("configuration loading failed")?;

    if cli.print_config {
        println!("{}", render_config(&settings));
        return Ok(());
    }

    // Initialise structured logging.  `RUST_LOG` overrides the configured level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.logging.level.to_lowercase())),
        )
        .init();

    info!("{APP_NAME} v{APP_VERSION} starting");
    info!(root = %settings.paths.base_dir.display(), "project root resolved");

    preflight(&settings);

    // The desktop build mounts the board UI here with `settings.window` and
    // hands `settings` to the Azure DevOps and OpenArena clients.  The
    // headless variant simply waits for shutdown.
    info!(title = %settings.window.title, "ready; press Ctrl-C to exit");
    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for Ctrl-C")?;

    info!("{APP_NAME} stopped");
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_settings() -> Settings {
        Settings::from_lookup(ProjectPaths::from_root("/opt/boardview"), |_| None).unwrap()
    }

    #[test]
    fn test_cli_defaults_to_discovery_with_no_root() {
        // Arrange: parse with no arguments
        let cli = Cli::parse_from(["boardview"]);

        // Assert
        assert!(cli.root.is_none());
        assert!(!cli.print_config);
    }

    #[test]
    fn test_cli_root_override_is_used_verbatim() {
        // Arrange
        let cli = Cli::parse_from(["boardview", "--root", "/srv/boardview"]);

        // Act
        let paths = cli.resolve_paths().unwrap();

        // Assert
        assert_eq!(paths.base_dir, PathBuf::from("/srv/boardview"));
        assert_eq!(paths.config_dir, PathBuf::from("/srv/boardview/config"));
    }

    #[test]
    fn test_cli_print_config_flag_parses() {
        let cli = Cli::parse_from(["boardview", "--print-config"]);
        assert!(cli.print_config);
    }

    #[test]
    fn test_render_config_contains_every_consumer_facing_field() {
        // Arrange
        let settings = scratch_settings();

        // Act
        let rendered = render_config(&settings);

        // Assert — one line per consumer-facing value
        assert!(rendered.contains("/opt/boardview/config/ado_settings.txt"));
        assert!(rendered.contains("/opt/boardview/logs/app.log"));
        assert!(rendered.contains("INFO"));
        assert!(rendered.contains("19950"));
        assert!(rendered.contains("wss://wymocw0zke.execute-api.us-east-1.amazonaws.com/prod"));
        assert!(rendered.contains("30s"));
        assert!(rendered.contains(APP_NAME));
    }

    #[test]
    fn test_render_config_reports_window_geometry() {
        let settings = scratch_settings();
        let rendered = render_config(&settings);
        let (w, h) = settings.window.size;
        assert!(rendered.contains(&format!("{w}x{h}")));
    }
}
