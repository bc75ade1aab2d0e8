//! Generation spec: the fully resolved parameters of one expansion run.
//!
//! A spec is usually loaded from a YAML file and then adjusted by command
//! line flags. Every optional key has a default so that a minimal file only
//! needs the columns it wants to touch:
//!
//! ```yaml
//! rows_to_add: 5
//! date_increment_step: 1
//! number_increment_step: 10
//! timestamp_mode: day_only
//! increment_columns: [id, created_at]
//! uuid_columns: [external_id]
//! randomize_columns: [notes]
//! value_from_list:
//!   status: [open, closed, pending]
//! delete_columns: [internal_flag]
//! delete_rows: "3-5"
//! seed: 42
//! ```

use crate::action::{ColumnAction, TimestampIncrementMode};
use crate::range::RowRange;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

/// Error type for spec operations.
#[derive(Debug, thiserror::Error)]
pub enum SpecError {
    /// Error reading spec file
    #[error("Failed to read spec file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Row range could not be parsed or is out of order
    #[error("Invalid row range: {0}")]
    InvalidRowRange(String),

    /// Parameters that cannot produce a run
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

fn default_rows_to_add() -> u32 {
    1
}

fn default_step() -> i64 {
    1
}

/// Run parameters for one expansion of a source CSV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSpec {
    /// Variants generated per template row
    #[serde(default = "default_rows_to_add")]
    pub rows_to_add: u32,

    /// Days (or seconds) added per iteration to dates and timestamps
    #[serde(default = "default_step")]
    pub date_increment_step: i64,

    /// Amount added per iteration to trailing numeric runs
    #[serde(default = "default_step")]
    pub number_increment_step: i64,

    /// How zoned timestamps are advanced
    #[serde(default)]
    pub timestamp_mode: TimestampIncrementMode,

    /// Generate every variant from the first data row and ignore the rest
    #[serde(default)]
    pub generate_from_first_row_only: bool,

    /// Columns advanced by the increment transform
    #[serde(default)]
    pub increment_columns: Vec<String>,

    /// Columns replaced by fresh UUIDs
    #[serde(default)]
    pub uuid_columns: BTreeSet<String>,

    /// Columns replaced by randomized values of the same shape
    #[serde(default)]
    pub randomize_columns: BTreeSet<String>,

    /// Columns sampled from a candidate list
    #[serde(default)]
    pub value_from_list: BTreeMap<String, Vec<String>>,

    /// Columns removed from the output
    #[serde(default)]
    pub delete_columns: BTreeSet<String>,

    /// Source rows that are neither written nor used as templates
    #[serde(default)]
    pub delete_rows: Option<RowRange>,

    /// Seed for reproducible output; absent means an entropy-seeded RNG
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GenerationSpec {
    fn default() -> Self {
        Self {
            rows_to_add: default_rows_to_add(),
            date_increment_step: default_step(),
            number_increment_step: default_step(),
            timestamp_mode: TimestampIncrementMode::default(),
            generate_from_first_row_only: false,
            increment_columns: Vec::new(),
            uuid_columns: BTreeSet::new(),
            randomize_columns: BTreeSet::new(),
            value_from_list: BTreeMap::new(),
            delete_columns: BTreeSet::new(),
            delete_rows: None,
            seed: None,
        }
    }
}

impl GenerationSpec {
    /// Load spec from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SpecError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse spec from YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SpecError> {
        let spec: GenerationSpec = serde_yaml::from_str(yaml)?;
        Ok(spec)
    }

    /// Check the parameters that would make a run meaningless.
    pub fn validate(&self) -> Result<(), SpecError> {
        if self.rows_to_add == 0 {
            return Err(SpecError::InvalidConfiguration(
                "rows_to_add must be greater than zero".to_string(),
            ));
        }

        if let Some((column, _)) = self
            .value_from_list
            .iter()
            .find(|(_, candidates)| candidates.is_empty())
        {
            return Err(SpecError::InvalidConfiguration(format!(
                "candidate list for column '{column}' is empty"
            )));
        }

        Ok(())
    }

    /// Whether the run removes any columns or rows from the output.
    pub fn has_deletions(&self) -> bool {
        !self.delete_columns.is_empty() || self.delete_rows.is_some()
    }

    /// All configured `(column name, action)` pairs, strongest priority first.
    ///
    /// Names are returned as configured; trimming happens during header
    /// resolution.
    pub fn column_actions(&self) -> Vec<(&str, ColumnAction)> {
        let mut actions = Vec::new();

        actions.extend(
            self.value_from_list
                .iter()
                .map(|(name, candidates)| (name.as_str(), ColumnAction::ValueFromList(candidates.clone()))),
        );
        actions.extend(
            self.randomize_columns
                .iter()
                .map(|name| (name.as_str(), ColumnAction::Randomize)),
        );
        actions.extend(
            self.uuid_columns
                .iter()
                .map(|name| (name.as_str(), ColumnAction::GenerateUuid)),
        );
        actions.extend(
            self.increment_columns
                .iter()
                .map(|name| (name.as_str(), ColumnAction::Increment)),
        );
        actions.extend(
            self.delete_columns
                .iter()
                .map(|name| (name.as_str(), ColumnAction::Delete)),
        );

        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_minimal_yaml_uses_defaults() {
        let spec = GenerationSpec::from_yaml("rows_to_add: 4").unwrap();

        assert_eq!(spec.rows_to_add, 4);
        assert_eq!(spec.date_increment_step, 1);
        assert_eq!(spec.number_increment_step, 1);
        assert_eq!(spec.timestamp_mode, TimestampIncrementMode::DayAndTime);
        assert!(!spec.generate_from_first_row_only);
        assert!(spec.delete_rows.is_none());
        assert!(spec.seed.is_none());
        assert!(!spec.has_deletions());
    }

    #[test]
    fn test_full_yaml() {
        let yaml = r#"
rows_to_add: 5
date_increment_step: -2
number_increment_step: 10
timestamp_mode: TIME_ONLY
generate_from_first_row_only: true
increment_columns: [id, created_at]
uuid_columns: [external_id]
randomize_columns: [notes]
value_from_list:
  status: [open, closed]
delete_columns: [internal_flag]
delete_rows: "3-5"
seed: 7
"#;
        let spec = GenerationSpec::from_yaml(yaml).unwrap();

        assert_eq!(spec.date_increment_step, -2);
        assert_eq!(spec.number_increment_step, 10);
        assert_eq!(spec.timestamp_mode, TimestampIncrementMode::TimeOnly);
        assert!(spec.generate_from_first_row_only);
        assert_eq!(spec.increment_columns, vec!["id", "created_at"]);
        assert!(spec.uuid_columns.contains("external_id"));
        assert_eq!(spec.value_from_list["status"], vec!["open", "closed"]);
        assert_eq!(spec.delete_rows, Some(RowRange::new(3, 5).unwrap()));
        assert_eq!(spec.seed, Some(7));
        assert!(spec.has_deletions());
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_invalid_row_range_in_yaml() {
        let result = GenerationSpec::from_yaml("delete_rows: \"9-1\"");
        assert!(matches!(result, Err(SpecError::YamlError(_))));
    }

    #[test]
    fn test_validate_rejects_zero_rows() {
        let spec = GenerationSpec {
            rows_to_add: 0,
            ..Default::default()
        };
        assert!(matches!(
            spec.validate(),
            Err(SpecError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_validate_rejects_empty_candidates() {
        let mut spec = GenerationSpec::default();
        spec.value_from_list.insert("status".to_string(), vec![]);

        let err = spec.validate().unwrap_err();
        assert!(err.to_string().contains("status"));
    }

    #[test]
    fn test_column_actions_priority_order() {
        let mut spec = GenerationSpec {
            increment_columns: vec!["id".to_string()],
            ..Default::default()
        };
        spec.uuid_columns.insert("ref".to_string());
        spec.randomize_columns.insert("notes".to_string());
        spec.value_from_list
            .insert("status".to_string(), vec!["a".to_string()]);
        spec.delete_columns.insert("secret".to_string());

        let names: Vec<_> = spec
            .column_actions()
            .into_iter()
            .map(|(name, action)| (name, action.label()))
            .collect();

        assert_eq!(
            names,
            vec![
                ("status", "value_from_list"),
                ("notes", "randomize"),
                ("ref", "uuid"),
                ("id", "increment"),
                ("secret", "delete"),
            ]
        );
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "rows_to_add: 2\nseed: 42").unwrap();

        let spec = GenerationSpec::from_file(file.path()).unwrap();
        assert_eq!(spec.rows_to_add, 2);
        assert_eq!(spec.seed, Some(42));
    }

    #[test]
    fn test_from_missing_file() {
        let result = GenerationSpec::from_file("/nonexistent/spec.yaml");
        assert!(matches!(result, Err(SpecError::IoError(_))));
    }
}
