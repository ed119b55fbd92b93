// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};

use crate::error::FrontdeskError;

/// A busy interval on the calendar, in the business's local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventSpan {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// An event to be created on the calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub description: Option<String>,
}

/// Backend storing calendar events. Implementations must return events
/// sorted by start time from [`events_on`](CalendarBackend::events_on).
#[async_trait]
pub trait CalendarBackend: Send + Sync {
    async fn events_on(&self, date: NaiveDate) -> Result<Vec<EventSpan>, FrontdeskError>;

    /// Creates the event and returns its backend-assigned id.
    async fn create_event(&self, event: NewEvent) -> Result<String, FrontdeskError>;

    async fn delete_event(&self, event_id: &str) -> Result<(), FrontdeskError>;
}
