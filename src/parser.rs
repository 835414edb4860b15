//! Transcript line parser.
//!
//! A message line looks like this:
//!
//! ```text
//! 12.05.2024, 22:15 - Alice: See you tomorrow
//! 1.5.24 9:07 - Bob: ok
//! ```
//!
//! Day and month take one or two digits, the year two or four (two-digit
//! years land in 2000-2099), hour one or two digits and minute exactly two.
//! The comma after the year is optional. The author runs up to the first
//! `": "` and the body is the rest of the line.
//!
//! Anything else (continuation lines of multi-line messages, system notices,
//! blank lines) is not a message. So is a line whose fields do not form a real
//! calendar timestamp. Both come back as `None`; parsing never fails.
//!
//! # Example
//!
//! ```rust
//! use chatstats::parser::parse_line;
//!
//! let msg = parse_line("01.01.23, 09:00 - Alice: hello there").unwrap();
//! assert_eq!(msg.author(), "Alice");
//! assert_eq!(msg.timestamp().to_string(), "2023-01-01 09:00:00");
//!
//! assert!(parse_line("and this is the second line of it").is_none());
//! assert!(parse_line("01.13.23, 09:00 - Alice: month 13").is_none());
//! ```

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;

use crate::ParsedMessage;

/// `DD.MM.YY[YY][,] HH:MM - AUTHOR: BODY`
static MESSAGE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([0-9]{1,2})\.([0-9]{1,2})\.([0-9]{2,4}),? ([0-9]{1,2}):([0-9]{2}) - (.*?): (.*)$",
    )
    .expect("valid regex")
});

/// Parses one transcript line.
///
/// Returns `None` for lines that are not messages, including matched lines
/// with an impossible date or time.
pub fn parse_line(line: &str) -> Option<ParsedMessage> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let caps = MESSAGE_LINE.captures(line)?;

    if caps[6].is_empty() {
        return None;
    }

    let timestamp = resolve_timestamp(&caps[1], &caps[2], &caps[3], &caps[4], &caps[5])?;

    Some(ParsedMessage::new(timestamp, &caps[6], &caps[7]))
}

/// Builds a timestamp from the matched numeric fields.
///
/// Returns `None` when the fields do not name a real minute on the calendar.
pub fn resolve_timestamp(
    day: &str,
    month: &str,
    year: &str,
    hour: &str,
    minute: &str,
) -> Option<NaiveDateTime> {
    let year = normalize_year(year)?;
    let month: u32 = month.parse().ok()?;
    let day: u32 = day.parse().ok()?;
    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, 0)
}

/// Two-digit years are offset into 2000-2099; four-digit years are taken as is.
fn normalize_year(year: &str) -> Option<i32> {
    let value: i32 = year.parse().ok()?;
    match year.len() {
        2 => Some(2000 + value),
        4 => Some(value),
        _ => None,
    }
}

/// Parses every message line of a transcript, in order, skipping the rest.
///
/// # Example
///
/// ```rust
/// use chatstats::parser::parse_transcript;
///
/// let text = "01.01.23, 09:00 - Alice: hi\nwrapped line\n01.01.23, 09:01 - Bob: hey";
/// let authors: Vec<String> = parse_transcript(text).map(|m| m.author).collect();
/// assert_eq!(authors, ["Alice", "Bob"]);
/// ```
pub fn parse_transcript(text: &str) -> impl Iterator<Item = ParsedMessage> + '_ {
    text.lines().filter_map(parse_line)
}
