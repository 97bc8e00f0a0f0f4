// ==========================================
// Lastmanagement Dashboard - Timestamp Reconstructor
// ==========================================
// Combines the day cell and the start of the interval
// label into an absolute point-in-time.
// ==========================================
// Day-first semantics: source day cells are DD.MM.YYYY.
// Parse failures yield None, never an error; the caller
// propagates the gap through to the output series.
// ==========================================

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Interval separator used by the source workbook, e.g. "08:00–08:15".
const INTERVAL_SEPARATOR: char = '\u{2013}'; // en dash

/// Accepted day formats, day-first preferred.
const DAY_FORMATS: &[&str] = &["%d.%m.%Y", "%Y-%m-%d", "%Y-%m-%dT%H:%M:%S"];

/// Accepted time-of-day formats for the interval start.
const TIME_FORMATS: &[&str] = &["%H:%M", "%H:%M:%S"];

/// Extract the start of an interval label.
///
/// Splits on the en dash (plain hyphen as fallback); a label with
/// no separator is used whole as the start time.
pub fn interval_start(interval_label: &str) -> &str {
    let label = interval_label.trim();
    if let Some((start, _)) = label.split_once(INTERVAL_SEPARATOR) {
        return start.trim();
    }
    if let Some((start, _)) = label.split_once('-') {
        return start.trim();
    }
    label
}

/// Parse a day cell, day-first (DD.MM.YYYY), with ISO fallbacks for
/// spreadsheet readers that hand dates through as ISO datetimes.
pub fn parse_day(day_text: &str) -> Option<NaiveDate> {
    let text = day_text.trim();
    for format in DAY_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Some(dt.date());
        }
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(date);
        }
    }
    None
}

/// Parse the time-of-day substring of an interval start.
pub fn parse_start_time(start_text: &str) -> Option<NaiveTime> {
    let text = start_text.trim();
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(text, format).ok())
}

/// Reconstruct the absolute timestamp of an interval record.
///
/// # Parameters
/// - day_text: raw day cell (DD.MM.YYYY semantics)
/// - interval_label: textual range, e.g. `"08:00–08:15"`
///
/// # Returns
/// - Some(timestamp): day + parsed interval start
/// - None: either part failed to parse; the record must still be
///   kept so the gap stays visible downstream
///
/// Pure function of its inputs; deterministic and injective on
/// distinct valid interval starts within one day.
pub fn reconstruct(day_text: &str, interval_label: &str) -> Option<NaiveDateTime> {
    let day = parse_day(day_text)?;
    let time = parse_start_time(interval_start(interval_label))?;
    Some(day.and_time(time))
}
