//! Increment transform: advance timestamps, dates and trailing numbers.

use super::temporal::{parse_date, parse_zoned_timestamp, render_instant, shift_date, shift_timestamp};
use regex::Regex;
use std::sync::LazyLock;
use synth_core::{GenerationSpec, TimestampIncrementMode};

/// Lazy prefix followed by the longest trailing run of ASCII digits.
static TRAILING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)([0-9]+)$").expect("Invalid trailing number regex"));

/// Per-iteration increment parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncrementSteps {
    /// Days (or seconds) per iteration for dates and timestamps
    pub date_step: i64,
    /// Amount per iteration for trailing numbers
    pub number_step: i64,
    pub mode: TimestampIncrementMode,
}

impl IncrementSteps {
    pub fn new(date_step: i64, number_step: i64, mode: TimestampIncrementMode) -> Self {
        Self {
            date_step,
            number_step,
            mode,
        }
    }

    pub fn from_spec(spec: &GenerationSpec) -> Self {
        Self::new(
            spec.date_increment_step,
            spec.number_increment_step,
            spec.timestamp_mode,
        )
    }

    /// Increment `value` relative to the template for the given iteration.
    ///
    /// Steps are scaled by the iteration number, so iteration 3 with a step
    /// of 2 moves the template value by 6 rather than compounding.
    pub fn apply(&self, value: &str, iteration: u32) -> String {
        let iteration = i64::from(iteration);
        increment_value(
            value,
            self.date_step.saturating_mul(iteration),
            self.number_step.saturating_mul(iteration),
            self.mode,
        )
    }
}

/// Increment a single value by already-cumulative steps.
///
/// The first matching shape wins: zoned timestamp, date-only pattern,
/// trailing digit run. Anything else is returned trimmed.
pub fn increment_value(
    value: &str,
    date_step: i64,
    number_step: i64,
    mode: TimestampIncrementMode,
) -> String {
    let trimmed = value.trim();

    if let Some(timestamp) = parse_zoned_timestamp(trimmed) {
        let (days, seconds) = match mode {
            TimestampIncrementMode::DayOnly => (date_step, 0),
            TimestampIncrementMode::TimeOnly => (0, date_step),
            TimestampIncrementMode::DayAndTime => (date_step, date_step),
        };
        return shift_timestamp(timestamp, days, seconds)
            .map(render_instant)
            .unwrap_or_else(|| trimmed.to_string());
    }

    if let Some((pattern, date)) = parse_date(trimmed) {
        return shift_date(date, date_step)
            .map(|shifted| pattern.render(shifted))
            .unwrap_or_else(|| trimmed.to_string());
    }

    increment_trailing_number(trimmed, number_step).unwrap_or_else(|| trimmed.to_string())
}

/// Add `step` to the trailing digit run, keeping the prefix and the digit width.
fn increment_trailing_number(value: &str, step: i64) -> Option<String> {
    let captures = TRAILING_NUMBER.captures(value)?;
    let prefix = captures.get(1)?.as_str();
    let digits = captures.get(2)?.as_str();

    let number: i64 = digits.parse().ok()?;
    let next = number.checked_add(step)?;

    Some(format!("{prefix}{}", zero_pad(next, digits.len())))
}

/// Zero-pad the magnitude to `width` digits; negative values keep a leading sign.
fn zero_pad(number: i64, width: usize) -> String {
    if number < 0 {
        format!("-{:0width$}", number.unsigned_abs())
    } else {
        format!("{number:0width$}")
    }
}
