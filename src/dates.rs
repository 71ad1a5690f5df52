//! Parsing and formatting of the date/time strings a booking server exchanges

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

/// The format show start times are exchanged in (e.g. `2024-03-15 10:30:00`)
pub const WIRE_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// The format the global shows listing renders start times in
const LISTING_DATETIME_FORMAT: &str = "%m/%d/%Y, %H:%M:%S";

/// How [`format_datetime`] should render an instant
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DateFormat {
    /// E.g. `Friday March, 15, 2024 at 10:30AM`
    Full,
    /// E.g. `Fri 03, 15, 2024 10:30AM`
    Medium,
}

impl Default for DateFormat {
    fn default() -> Self {
        DateFormat::Medium
    }
}

/// Parses a loosely delimited date/time string into a UTC instant.
///
/// The string is split on every run of non-digit characters, and the pieces are read
/// positionally as year, month (1-based), day, hour, minute, second and millisecond.
/// Pieces past the seventh are ignored, so a trailing `Z` or even a UTC offset have no
/// effect on the result.
///
/// Anything that does not provide seven readable pieces (missing pieces, a leading
/// delimiter, out-of-range values) yields `None` rather than an error, the same way a
/// sloppy date string yields an invalid-but-inert value in a browser.
pub fn parse_iso_string(s: &str) -> Option<DateTime<Utc>> {
    let pieces = split_on_non_digits(s);
    if pieces.len() < 7 {
        return None;
    }

    let year: i32 = pieces[0].parse().ok()?;
    let month: u32 = pieces[1].parse().ok()?;
    let day: u32 = pieces[2].parse().ok()?;
    let hour: u32 = pieces[3].parse().ok()?;
    let minute: u32 = pieces[4].parse().ok()?;
    let second: u32 = pieces[5].parse().ok()?;
    let millisecond: u32 = pieces[6].parse().ok()?;

    let naive = chrono::NaiveDate::from_ymd_opt(year, month, day)?
        .and_hms_milli_opt(hour, minute, second, millisecond)?;
    Some(Utc.from_utc_datetime(&naive))
}

/// Splits on every maximal run of non-digit characters.
///
/// Like the usual regex split, a delimiter at the very start of the string produces an
/// empty leading piece (which will then fail to parse as a number).
fn split_on_non_digits(s: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut in_delimiter = false;
    for (index, c) in s.char_indices() {
        if c.is_ascii_digit() {
            if in_delimiter {
                start = index;
                in_delimiter = false;
            }
        } else if in_delimiter == false {
            pieces.push(&s[start..index]);
            in_delimiter = true;
        }
    }
    if in_delimiter == false {
        pieces.push(&s[start..]);
    }
    pieces
}

/// Renders a date/time string the way booking pages display instants.
///
/// The value is first read as the wire format ([`WIRE_DATETIME_FORMAT`]), then as
/// anything [`parse_iso_string`] accepts. Returns `None` when it is neither.
pub fn format_datetime(value: &str, format: DateFormat) -> Option<String> {
    let instant = parse_wire_datetime(value)?;
    let pattern = match format {
        DateFormat::Full => "%A %B, %-d, %Y at %-I:%M%p",
        DateFormat::Medium => "%a %m, %d, %Y %-I:%M%p",
    };
    Some(instant.format(pattern).to_string())
}

/// Parses a wire-format date/time string (falling back to [`parse_iso_string`] for
/// loosely delimited values)
pub fn parse_wire_datetime(value: &str) -> Option<DateTime<Utc>> {
    match NaiveDateTime::parse_from_str(value, WIRE_DATETIME_FORMAT) {
        Ok(naive) => Some(Utc.from_utc_datetime(&naive)),
        Err(_) => parse_iso_string(value),
    }
}

/// Renders an instant in the wire format
pub fn format_wire_datetime(instant: &DateTime<Utc>) -> String {
    instant.format(WIRE_DATETIME_FORMAT).to_string()
}

/// Renders an instant the way the global shows listing does
pub fn format_listing_datetime(instant: &DateTime<Utc>) -> String {
    instant.format(LISTING_DATETIME_FORMAT).to_string()
}
