//! Day and date-range labels in the short en-GB style (`10 Jan 2026`).

use chrono::{DateTime, Datelike, Utc};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sept", "Oct", "Nov", "Dec",
];

pub fn format_day(date: &DateTime<Utc>) -> String {
    format!(
        "{} {} {}",
        date.day(),
        MONTHS[date.month0() as usize],
        date.year()
    )
}

/// `start` alone, or `start - end`.
pub fn format_range(start: &DateTime<Utc>, end: Option<&DateTime<Utc>>) -> String {
    match end {
        Some(end) => format!("{} - {}", format_day(start), format_day(end)),
        None => format_day(start),
    }
}
