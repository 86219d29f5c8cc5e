//! Date resolution engine: parsing, timezone adjustment, difference math.
//!
//! Resolution is a parse-attempt-then-fallback cascade: a string that parses
//! as an integer is always epoch milliseconds, never a calendar date, so a
//! bare "2015" is a 2015-millisecond timestamp rather than a year. Everything
//! else goes through the calendar parser.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::DateError;
use crate::types::DiffReply;

/// Datetime formats tried after RFC 3339 and RFC 2822, in order.
const DATETIME_FORMATS: &[&str] = &[
  "%Y-%m-%dT%H:%M:%S%.f",
  "%Y-%m-%dT%H:%M:%S",
  "%Y-%m-%d %H:%M:%S%.f",
  "%Y-%m-%d %H:%M:%S",
];

/// Date-only formats; a match resolves to midnight UTC. `%B` also accepts
/// abbreviated month names when parsing.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%d %B %Y", "%B %d, %Y"];

/// Resolve a raw input into an instant.
///
/// When a timezone name is given, the instant is shifted so its UTC rendering
/// reads as that zone's wall clock.
pub fn resolve(raw: &str, timezone: Option<&str>) -> Result<DateTime<Utc>, DateError> {
  let instant = match raw.trim().parse::<i64>() {
    Ok(millis) => from_unix_millis(millis)?,
    Err(_) => parse_calendar(raw)?,
  };

  match timezone {
    Some(name) => shift_into_zone(instant, name),
    None => Ok(instant),
  }
}

/// Interpret epoch milliseconds as an instant. Out-of-range values do not
/// represent a valid calendar instant.
fn from_unix_millis(millis: i64) -> Result<DateTime<Utc>, DateError> {
  Utc
    .timestamp_millis_opt(millis)
    .single()
    .ok_or(DateError::InvalidDate)
}

/// Parse a free-form calendar string. No numeric shortcut here: the diff
/// endpoint calls this directly and rejects bare timestamps.
pub fn parse_calendar(raw: &str) -> Result<DateTime<Utc>, DateError> {
  let trimmed = raw.trim();

  if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
    return Ok(dt.with_timezone(&Utc));
  }
  if let Ok(dt) = DateTime::parse_from_rfc2822(trimmed) {
    return Ok(dt.with_timezone(&Utc));
  }
  for fmt in DATETIME_FORMATS {
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, fmt) {
      return Ok(Utc.from_utc_datetime(&naive));
    }
  }
  for fmt in DATE_FORMATS {
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
      let naive = date.and_hms_opt(0, 0, 0).ok_or(DateError::InvalidDate)?;
      return Ok(Utc.from_utc_datetime(&naive));
    }
  }

  Err(DateError::InvalidDate)
}

/// Shift an instant by `name`'s UTC offset at that instant, so `unix` and the
/// UTC string move together and the rendering reads as the zone's wall clock.
fn shift_into_zone(instant: DateTime<Utc>, name: &str) -> Result<DateTime<Utc>, DateError> {
  let tz: Tz = name.parse().map_err(|_| DateError::InvalidTimezone)?;
  let offset_secs = instant.with_timezone(&tz).offset().fix().local_minus_utc();
  instant
    .checked_add_signed(Duration::seconds(offset_secs as i64))
    .ok_or(DateError::InvalidDate)
}

/// Render an instant RFC-1123 style, e.g. "Fri, 25 Dec 2015 00:00:00 GMT".
pub fn format_utc(instant: &DateTime<Utc>) -> String {
  instant.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Decompose the absolute difference between two instants.
///
/// Days carry the whole span; hours (0-23), minutes (0-59) and seconds (0-59)
/// are the within-unit remainders. Symmetric in its arguments.
pub fn diff_breakdown(a: DateTime<Utc>, b: DateTime<Utc>) -> DiffReply {
  let total_seconds = (a - b).num_seconds().unsigned_abs();

  let days = (total_seconds / 86_400) as i64;
  let remainder = total_seconds % 86_400;
  let hours = (remainder / 3_600) as i64;
  let remainder = remainder % 3_600;
  let minutes = (remainder / 60) as i64;
  let seconds = (remainder % 60) as i64;

  DiffReply {
    days,
    hours,
    minutes,
    seconds,
  }
}
