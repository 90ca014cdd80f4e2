//! Conversion between stored millisecond timestamps and calendar dates.
//!
//! Due dates are stored as milliseconds since the Unix epoch with `0` meaning
//! "no due date". On the command line they are entered and shown as local
//! `YYYY-MM-DD` dates.
//!
//! ```rust
//! use taskmate::libs::formatter::{format_due_date, parse_due_date};
//!
//! let millis = parse_due_date("2025-03-14")?;
//! assert_eq!(format_due_date(millis), "2025-03-14");
//! assert_eq!(format_due_date(0), "-");
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::{Local, NaiveDate, TimeZone};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Placeholder shown for an unset date.
pub const NO_DATE: &str = "-";

/// Local midnight of `input` (`YYYY-MM-DD`) in epoch milliseconds.
///
/// Rejects a date landing exactly on `0`, the unset marker.
pub fn parse_due_date(input: &str) -> Result<i64> {
    let date = NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| msg_error_anyhow!(Message::InvalidDueDate(input.to_string())))?;
    let midnight = date.and_hms_opt(0, 0, 0).ok_or_else(|| msg_error_anyhow!(Message::InvalidDueDate(input.to_string())))?;
    let local = Local
        .from_local_datetime(&midnight)
        .earliest()
        .ok_or_else(|| msg_error_anyhow!(Message::InvalidDueDate(input.to_string())))?;

    match local.timestamp_millis() {
        0 => Err(msg_error_anyhow!(Message::InvalidDueDate(input.to_string()))),
        millis => Ok(millis),
    }
}

/// Local calendar date of `millis`, or [`NO_DATE`] for 0.
pub fn format_due_date(millis: i64) -> String {
    if millis == 0 {
        return NO_DATE.to_string();
    }
    match Local.timestamp_millis_opt(millis).single() {
        Some(date_time) => date_time.format(DATE_FORMAT).to_string(),
        None => NO_DATE.to_string(),
    }
}

pub fn format_optional_date(millis: Option<i64>) -> String {
    millis.map(format_due_date).unwrap_or_else(|| NO_DATE.to_string())
}
