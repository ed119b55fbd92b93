// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite persistence layer for the Frontdesk receptionist.
//!
//! Provides WAL-mode SQLite storage with an embedded versioned schema, a
//! single-writer concurrency model via `tokio-rusqlite`, and typed CRUD
//! operations for conversations, messages, bookings, transfer logs, and
//! FAQ entries.

pub mod database;
pub mod models;
pub mod queries;

pub use database::Database;
pub use models::*;

use chrono::{NaiveDateTime, SecondsFormat, Utc};

/// Format used for booking start times. Lexicographic order matches
/// chronological order, so range queries compare strings directly.
pub const START_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Renders a local-naive datetime in the canonical booking column format.
pub fn format_start_at(dt: NaiveDateTime) -> String {
    dt.format(START_AT_FORMAT).to_string()
}

/// Parses a booking `start_at` column value.
pub fn parse_start_at(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, START_AT_FORMAT).ok()
}

/// Current wall-clock time as the RFC 3339 string stored in `created_at`
/// columns.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
