//! Randomize transform: replace a value with a random value of the same shape.

use super::temporal::{parse_date, parse_zoned_timestamp, render_instant, shift_date, shift_timestamp};
use rand::distributions::Alphanumeric;
use rand::Rng;

/// Largest random shift applied to dates and timestamps, in days.
pub const MAX_DAY_SHIFT: i64 = 365;

/// Largest random shift applied to timestamps, in seconds.
pub const MAX_SECOND_SHIFT: i64 = 86_400;

/// Randomize a single value.
///
/// - `true` / `false` (any case) become a random lower-case boolean
/// - zoned timestamps move by up to a year and a day, rendered as UTC instants
/// - dates move by up to a year and keep their pattern
/// - anything else has each letter and digit replaced by a random
///   alphanumeric character; other characters are kept in place
pub fn randomize_value<R: Rng>(value: &str, rng: &mut R) -> String {
    let trimmed = value.trim();

    if trimmed.eq_ignore_ascii_case("true") || trimmed.eq_ignore_ascii_case("false") {
        return rng.gen_bool(0.5).to_string();
    }

    if let Some(timestamp) = parse_zoned_timestamp(trimmed) {
        let days = rng.gen_range(-MAX_DAY_SHIFT..=MAX_DAY_SHIFT);
        let seconds = rng.gen_range(-MAX_SECOND_SHIFT..=MAX_SECOND_SHIFT);
        if let Some(shifted) = shift_timestamp(timestamp, days, seconds) {
            return render_instant(shifted);
        }
    }

    if let Some((pattern, date)) = parse_date(trimmed) {
        let days = rng.gen_range(-MAX_DAY_SHIFT..=MAX_DAY_SHIFT);
        if let Some(shifted) = shift_date(date, days) {
            return pattern.render(shifted);
        }
    }

    substitute_characters(value, rng)
}

/// Replace every letter and digit with a random ASCII alphanumeric.
fn substitute_characters<R: Rng>(value: &str, rng: &mut R) -> String {
    value
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                char::from(rng.sample(Alphanumeric))
            } else {
                c
            }
        })
        .collect()
}
