//! Per-column actions and timestamp increment modes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a zoned timestamp is advanced by the increment transform.
///
/// The same cumulative date step is used as a count of days, a count of
/// seconds, or both.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum TimestampIncrementMode {
    /// Add the step as days
    #[serde(alias = "DAY_ONLY")]
    DayOnly,

    /// Add the step as seconds
    #[serde(alias = "TIME_ONLY")]
    TimeOnly,

    /// Add the step as days and then the same step as seconds
    #[default]
    #[serde(alias = "DAY_AND_TIME")]
    DayAndTime,
}

impl fmt::Display for TimestampIncrementMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::DayOnly => "day_only",
            Self::TimeOnly => "time_only",
            Self::DayAndTime => "day_and_time",
        };
        f.write_str(name)
    }
}

/// Transformation configured for a single column.
///
/// A well-formed configuration assigns at most one action per column. When a
/// column is named more than once, [`ColumnAction::priority`] decides which
/// action takes effect. `Delete` is orthogonal: it only removes the column
/// from the output and never competes with the value actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnAction {
    /// Pick a uniformly random value from the candidate list
    ValueFromList(Vec<String>),

    /// Replace the value with a randomized value of the same shape
    Randomize,

    /// Replace the value with a fresh upper-case UUID
    GenerateUuid,

    /// Advance dates, timestamps and numeric suffixes by the cumulative step
    Increment,

    /// Remove the column from the output
    Delete,
}

impl ColumnAction {
    /// Rank used to resolve overlapping configuration. Lower wins.
    pub fn priority(&self) -> u8 {
        match self {
            Self::ValueFromList(_) => 0,
            Self::Randomize => 1,
            Self::GenerateUuid => 2,
            Self::Increment => 3,
            Self::Delete => 4,
        }
    }

    /// Short label for log output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ValueFromList(_) => "value_from_list",
            Self::Randomize => "randomize",
            Self::GenerateUuid => "uuid",
            Self::Increment => "increment",
            Self::Delete => "delete",
        }
    }

    /// Whether this action rewrites the value in generated rows.
    pub fn transforms_value(&self) -> bool {
        !matches!(self, Self::Delete)
    }
}
