// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Customer-facing date/time parsing shared by the tools.

use chrono::{Duration, NaiveDate, NaiveDateTime};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Error message relayed to the customer for an unparsable date.
pub const INVALID_DATE_MSG: &str =
    "Invalid date format. Use YYYY-MM-DD, 'today', or 'tomorrow'.";

/// Error message relayed to the customer for an unparsable datetime.
pub const INVALID_DATETIME_MSG: &str = "Invalid datetime format. Use YYYY-MM-DD HH:MM.";

/// Parse a requested date: `today`, `tomorrow`, or `YYYY-MM-DD`.
/// Matching on the keywords is case-insensitive and whitespace-tolerant.
pub fn parse_requested_date(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    match input.trim().to_lowercase().as_str() {
        "today" => Some(today),
        "tomorrow" => Some(today + Duration::days(1)),
        other => NaiveDate::parse_from_str(other, DATE_FORMAT).ok(),
    }
}

/// Parse a booking datetime in `YYYY-MM-DD HH:MM`.
pub fn parse_requested_datetime(input: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(input.trim(), DATETIME_FORMAT).ok()
}
