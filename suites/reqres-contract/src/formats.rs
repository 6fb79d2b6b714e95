//! Shape checks for server-generated values.
//!
//! These only look at the form of a value, never at its meaning: a timestamp
//! with a month of `13` still matches. Digits are ASCII only; `\d` would also
//! accept other Unicode decimal digits.

use std::sync::LazyLock;

use regex::Regex;

static SHORT_NUMERIC_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,3}$").expect("a valid regex"));

static ISO8601_MILLIS_UTC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}\.[0-9]{3}Z$")
        .expect("a valid regex")
});

/// One to three ASCII digits, as the ids `POST /users` hands out.
pub fn is_short_numeric_id(value: &str) -> bool {
    SHORT_NUMERIC_ID.is_match(value)
}

/// `YYYY-MM-DDTHH:MM:SS.mmmZ`.
pub fn is_iso8601_millis_utc(value: &str) -> bool {
    ISO8601_MILLIS_UTC.is_match(value)
}
