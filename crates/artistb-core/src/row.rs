//! Loosely typed backend rows and the coercions used to read them.
//!
//! Backend tables are not owned by this workspace, so every column read goes
//! through an alias list and a lenient coercion. Coercions never fail: a value
//! that cannot be read as the requested type is treated as absent.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde_json::{Map, Number, Value};

/// A single backend row: column name to JSON value.
pub type Row = Map<String, Value>;

/// Reads a value as a trimmed, non-empty string. Numbers are stringified.
pub fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Value::Number(n) => Some(number_to_string(n)),
        _ => None,
    }
}

fn number_to_string(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

/// Reads a JSON boolean, or the strings `"true"` / `"false"` in any case.
pub fn coerce_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Reads a value as a finite number, via its string form.
pub fn coerce_number(value: &Value) -> Option<f64> {
    parse_number(&coerce_string(value)?)
}

/// Parses a trimmed decimal string; infinities and NaN are absent.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Reads a value as a UTC timestamp. Unparseable input is absent.
pub fn coerce_date(value: &Value) -> Option<DateTime<Utc>> {
    let raw = coerce_string(value)?;
    parse_date(&raw)
}

/// Parses the date shapes a Postgres-backed REST API hands out.
///
/// Accepts RFC 3339, Postgres `timestamptz` text (`2026-01-10 12:00:00+00`),
/// naive date-times, plain dates, `YYYY-MM` and bare years. Values without an
/// offset are read as UTC.
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%d %H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M:%S%.f%#z"] {
        if let Ok(dt) = DateTime::parse_from_str(raw, format) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| Utc.from_utc_datetime(&naive));
    }

    if let Ok(date) = NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| Utc.from_utc_datetime(&naive));
    }

    if raw.len() == 4 && raw.chars().all(|c| c.is_ascii_digit()) {
        let year = raw.parse::<i32>().ok()?;
        return Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).single();
    }

    None
}

/// Returns the first alias that coerces to a non-empty string.
pub fn string_by_keys(row: &Row, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| row.get(*key))
        .find_map(coerce_string)
}

/// Returns the value of the first alias that is present and not null.
///
/// Unlike [`string_by_keys`] this does not skip empty or unreadable values:
/// the first column that exists decides the field.
pub fn first_present<'a>(row: &'a Row, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| row.get(*key))
        .find(|value| !value.is_null())
}
