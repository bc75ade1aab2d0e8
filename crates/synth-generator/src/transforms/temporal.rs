//! Parsing and rendering of the date and timestamp shapes the transforms recognize.

use chrono::{DateTime, FixedOffset, NaiveDate, SecondsFormat, TimeDelta, Utc};

/// Date-only layouts, tried in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePattern {
    /// `MM/dd/yyyy`
    MonthDayYear,
    /// `dd/MM/yyyy`
    DayMonthYear,
    /// `yyyy-MM-dd`
    IsoDate,
}

impl DatePattern {
    pub const ALL: [DatePattern; 3] = [
        DatePattern::MonthDayYear,
        DatePattern::DayMonthYear,
        DatePattern::IsoDate,
    ];

    fn format_str(self) -> &'static str {
        match self {
            Self::MonthDayYear => "%m/%d/%Y",
            Self::DayMonthYear => "%d/%m/%Y",
            Self::IsoDate => "%Y-%m-%d",
        }
    }

    /// Parse `value` only when every field has its exact width, so that
    /// rendering the result gives back `value` unchanged.
    pub fn parse(self, value: &str) -> Option<NaiveDate> {
        let date = NaiveDate::parse_from_str(value, self.format_str()).ok()?;
        (self.render(date) == value).then_some(date)
    }

    pub fn render(self, date: NaiveDate) -> String {
        date.format(self.format_str()).to_string()
    }
}

/// Parse a date-only value with the first pattern that accepts it.
pub fn parse_date(value: &str) -> Option<(DatePattern, NaiveDate)> {
    DatePattern::ALL
        .iter()
        .find_map(|pattern| pattern.parse(value).map(|date| (*pattern, date)))
}

/// Shift a date by a signed number of days.
pub fn shift_date(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    date.checked_add_signed(TimeDelta::try_days(days)?)
}

/// Parse a timestamp carrying an explicit offset.
///
/// Accepts RFC 3339 (`2024-01-01T10:00:00.250+02:00`, `...Z`), timestamps
/// without seconds (`2024-01-01T10:00Z`), and a trailing bracketed region
/// (`2024-03-01T10:00:00+01:00[Europe/Paris]`) whose offset is used as is.
/// The date and time must be separated by an upper-case `T`, and a UTC
/// designator must be an upper-case `Z`.
pub fn parse_zoned_timestamp(value: &str) -> Option<DateTime<FixedOffset>> {
    let value = strip_region(value);
    if value.as_bytes().get(10) != Some(&b'T') || value.ends_with('z') {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt);
    }

    // Minutes precision, with `Z` normalized to an explicit offset
    let normalized = match value.strip_suffix('Z') {
        Some(rest) => format!("{rest}+00:00"),
        None => value.to_string(),
    };
    DateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M%:z").ok()
}

fn strip_region(value: &str) -> &str {
    match (value.find('['), value.ends_with(']')) {
        (Some(start), true) => &value[..start],
        _ => value,
    }
}

/// Shift a timestamp by whole days and then by seconds.
pub fn shift_timestamp(
    timestamp: DateTime<FixedOffset>,
    days: i64,
    seconds: i64,
) -> Option<DateTime<FixedOffset>> {
    timestamp
        .checked_add_signed(TimeDelta::try_days(days)?)?
        .checked_add_signed(TimeDelta::try_seconds(seconds)?)
}

/// Render as a UTC instant with millisecond precision, e.g. `2024-01-02T08:00:00.000Z`.
pub fn render_instant(timestamp: DateTime<FixedOffset>) -> String {
    timestamp
        .with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}
