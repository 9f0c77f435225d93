//! Loader for `config/team_area_paths.json`.
//!
//! The file maps each team name to the list of Azure DevOps area paths whose
//! work items appear on that team's board:
//!
//! ```json
//! {
//!   "Platform": ["Contoso\\Platform", "Contoso\\Platform\\Runtime"],
//!   "Mobile":   ["Contoso\\Mobile"]
//! }
//! ```
//!
//! The schema lives with the configuration contract, so the loader lives
//! here; the Azure DevOps client consumes the parsed map.  The file is
//! expected to exist — this crate never creates it.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Parsed contents of the team area paths file.
///
/// `BTreeMap` keeps team iteration order stable for display.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct TeamAreaPaths {
    teams: BTreeMap<String, Vec<String>>,
}

impl TeamAreaPaths {
    /// Reads and parses the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read (including
    /// when it is missing) and [`ConfigError::ParseAreaPaths`] when it is not
    /// valid JSON of the expected shape.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::ParseAreaPaths {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Team names in stable (sorted) order.
    pub fn team_names(&self) -> impl Iterator<Item = &str> {
        self.teams.keys().map(String::as_str)
    }

    /// Area paths configured for `team`, or `None` for an unknown team.
    pub fn area_paths(&self, team: &str) -> Option<&[String]> {
        self.teams.get(team).map(Vec::as_slice)
    }

    /// Number of configured teams.
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    /// True when no teams are configured.
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_team_to_area_path_map() {
        // Arrange
        let json = r#"{
            "Platform": ["Contoso\\Platform", "Contoso\\Platform\\Runtime"],
            "Mobile": ["Contoso\\Mobile"]
        }"#;

        // Act
        let parsed: TeamAreaPaths = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(parsed.len(), 2);
        assert_eq!(
            parsed.area_paths("Platform").unwrap(),
            ["Contoso\\Platform", "Contoso\\Platform\\Runtime"]
        );
        assert_eq!(parsed.area_paths("Mobile").unwrap(), ["Contoso\\Mobile"]);
        assert!(parsed.area_paths("Unknown").is_none());
    }

    #[test]
    fn test_team_names_iterate_in_sorted_order() {
        let json = r#"{"Zeta": [], "Alpha": ["A"], "Mid": []}"#;
        let parsed: TeamAreaPaths = serde_json::from_str(json).unwrap();
        let names: Vec<_> = parsed.team_names().collect();
        assert_eq!(names, ["Alpha", "Mid", "Zeta"]);
    }

    #[test]
    fn test_empty_object_is_a_valid_empty_map() {
        let parsed: TeamAreaPaths = serde_json::from_str("{}").unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_load_missing_file_reports_io_error_with_path() {
        // Arrange
        let path = Path::new("/nonexistent/boardview/team_area_paths.json");

        // Act
        let err = TeamAreaPaths::load(path).unwrap_err();

        // Assert
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("team_area_paths.json"));
    }

    #[test]
    fn test_wrong_json_shape_reports_parse_error() {
        // An array at the top level is not a team map.
        let result: Result<TeamAreaPaths, _> = serde_json::from_str(r#"["Platform"]"#);
        assert!(result.is_err());
    }
}
