//! Calendar date helpers for the `lastmodifieddate` meta attribute.
//!
//! Dates are carried as signed days since the Unix epoch (1970-01-01)
//! and written as `YYYY-MM-DD`.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::DateParseError;

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Returns the number of days in a given month (1-indexed).
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Calculates days since Unix epoch for a given date.
fn date_to_days(year: i32, month: u32, day: u32) -> i32 {
    // Howard Hinnant's days_from_civil
    let y = if month <= 2 { year - 1 } else { year } as i64;
    let m = if month <= 2 {
        month as i64 + 9
    } else {
        month as i64 - 3
    };

    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = (y - era * 400) as u32; // year of era
    let doy = (153 * m as u32 + 2) / 5 + day - 1; // day of year
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // day of era

    (era * 146097 + doe as i64 - 719468) as i32
}

/// Converts days since Unix epoch to (year, month, day).
fn days_to_date(days: i32) -> (i32, u32, u32) {
    let z = days as i64 + 719468;
    let era = if z >= 0 { z } else { z - 146096 } / 146097;
    let doe = (z - era * 146097) as u32; // day of era
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365; // year of era
    let y = yoe as i64 + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // day of year
    let mp = (5 * doy + 2) / 153; // month index
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };

    let year = if m <= 2 { y + 1 } else { y } as i32;
    (year, m, d)
}

/// Formats days since Unix epoch as `YYYY-MM-DD`.
pub fn format_date(days: i32) -> String {
    let (year, month, day) = days_to_date(days);
    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Parses a `YYYY-MM-DD` date and returns days since Unix epoch.
pub fn parse_date(date_str: &str) -> Result<i32, DateParseError> {
    let invalid = |what: &str| DateParseError {
        message: format!("invalid {} in date: {}", what, date_str),
    };

    let bytes = date_str.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(DateParseError {
            message: format!("expected YYYY-MM-DD, found: {}", date_str),
        });
    }
    let digits = |range: std::ops::Range<usize>| bytes[range].iter().all(u8::is_ascii_digit);
    if !digits(0..4) || !digits(5..7) || !digits(8..10) {
        return Err(DateParseError {
            message: format!("expected YYYY-MM-DD, found: {}", date_str),
        });
    }

    let year: i32 = date_str[..4].parse().map_err(|_| invalid("year"))?;
    let month: u32 = date_str[5..7].parse().map_err(|_| invalid("month"))?;
    let day: u32 = date_str[8..10].parse().map_err(|_| invalid("day"))?;

    if !(1..=12).contains(&month) {
        return Err(invalid("month"));
    }
    if day < 1 || day > days_in_month(year, month) {
        return Err(invalid("day"));
    }

    Ok(date_to_days(year, month, day))
}

/// Returns today's UTC date as days since Unix epoch.
///
/// A clock set before the epoch yields day 0.
pub fn today_days() -> i32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| (d.as_secs() / SECONDS_PER_DAY) as i32)
        .unwrap_or(0)
}

/// Returns today's UTC date as `YYYY-MM-DD`.
pub fn today_utc() -> String {
    format_date(today_days())
}
