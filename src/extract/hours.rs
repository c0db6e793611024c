use crate::extract::HoursRow;
use crate::record::{DayHours, Weekday, WeeklyHours};
use regex::Regex;

/// Fold the harvested hours table into one entry per weekday.
///
/// Day labels are matched by their three-letter prefix, so "Mon", "Monday"
/// and "monday" all land in the same slot. Days without a row stay
/// `Unspecified` -- absence of data, not an explicit closed state.
pub fn parse_rows(rows: &[HoursRow]) -> WeeklyHours {
    let mut hours = WeeklyHours::default();

    for row in rows {
        let label = row.day.to_lowercase();
        let Some(day) = Weekday::ALL.iter().copied().find(|d| label.contains(d.short())) else {
            continue;
        };
        hours.set(day, parse_times(&row.times));
    }

    hours
}

/// Normalize one hours cell: "Open 24 hours" and "Closed" variants first,
/// then a separator split into an open/close interval.
fn parse_times(text: &str) -> DayHours {
    let lower = text.to_lowercase();
    if lower.contains("24") && lower.contains("hour") {
        return DayHours::Open24Hours;
    }
    if lower.contains("closed") {
        return DayHours::Closed;
    }

    // Maps renders the separator as an en dash, a hyphen, or the word "to"
    // depending on locale and widget variant.
    let sep_re = Regex::new(r"\s*(?:\u{2013}|\u{2014}|\bto\b|-)\s*").unwrap();
    let parts: Vec<&str> = sep_re
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    match parts.as_slice() {
        [open, close, ..] => DayHours::Open {
            open: (*open).to_string(),
            close: (*close).to_string(),
        },
        _ => DayHours::Unspecified,
    }
}
