//! Inclusive 1-based row ranges.

use crate::spec::SpecError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Inclusive range of 1-based source data row numbers (the header is not counted).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RowRangeRepr", into = "String")]
pub struct RowRange {
    start: u64,
    end: u64,
}

impl RowRange {
    /// Create a range, rejecting zero bounds and reversed ranges.
    pub fn new(start: u64, end: u64) -> Result<Self, SpecError> {
        if start == 0 {
            return Err(SpecError::InvalidRowRange(format!(
                "row numbers start at 1, got {start}"
            )));
        }
        if start > end {
            return Err(SpecError::InvalidRowRange(format!(
                "start {start} is greater than end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Range covering a single row.
    pub fn single(row: u64) -> Result<Self, SpecError> {
        Self::new(row, row)
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn end(&self) -> u64 {
        self.end
    }

    pub fn contains(&self, row_number: u64) -> bool {
        (self.start..=self.end).contains(&row_number)
    }
}

/// Parses `"start-end"` or a single row number.
impl FromStr for RowRange {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_bound = |part: &str| {
            part.trim()
                .parse::<u64>()
                .map_err(|_| SpecError::InvalidRowRange(format!("invalid row number '{}'", part.trim())))
        };

        let parts: Vec<&str> = s.split('-').collect();
        match parts.as_slice() {
            [single] => Self::single(parse_bound(single)?),
            [start, end] => Self::new(parse_bound(start)?, parse_bound(end)?),
            _ => Err(SpecError::InvalidRowRange(format!(
                "'{s}' is not a row number or 'start-end' range"
            ))),
        }
    }
}

impl fmt::Display for RowRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

impl From<RowRange> for String {
    fn from(range: RowRange) -> Self {
        range.to_string()
    }
}

/// Accepted YAML shapes: `3`, `"2-5"`, or `{ start: 2, end: 5 }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RowRangeRepr {
    Single(u64),
    Text(String),
    Bounds { start: u64, end: u64 },
}

impl TryFrom<RowRangeRepr> for RowRange {
    type Error = SpecError;

    fn try_from(repr: RowRangeRepr) -> Result<Self, Self::Error> {
        match repr {
            RowRangeRepr::Single(row) => Self::single(row),
            RowRangeRepr::Text(text) => text.parse(),
            RowRangeRepr::Bounds { start, end } => Self::new(start, end),
        }
    }
}
