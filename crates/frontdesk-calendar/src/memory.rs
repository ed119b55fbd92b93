// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-process calendar backend.
//!
//! The default backend when no external calendar is wired up, and the test
//! double for everything that talks to a [`CalendarBackend`].

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use frontdesk_core::{CalendarBackend, EventSpan, FrontdeskError, NewEvent};
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryCalendar {
    events: Mutex<HashMap<String, NewEvent>>,
}

impl InMemoryCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored events, for assertions.
    pub fn event_count(&self) -> usize {
        self.events.lock().map(|m| m.len()).unwrap_or(0)
    }

    /// Description of a stored event, for assertions.
    pub fn event_description(&self, event_id: &str) -> Option<String> {
        self.events
            .lock()
            .ok()
            .and_then(|m| m.get(event_id).and_then(|ev| ev.description.clone()))
    }
}

#[async_trait]
impl CalendarBackend for InMemoryCalendar {
    async fn events_on(&self, date: NaiveDate) -> Result<Vec<EventSpan>, FrontdeskError> {
        let events = self
            .events
            .lock()
            .map_err(|_| FrontdeskError::calendar("calendar state poisoned"))?;
        let mut spans: Vec<EventSpan> = events
            .values()
            .filter(|ev| ev.start.date() == date)
            .map(|ev| EventSpan {
                start: ev.start,
                end: ev.end,
            })
            .collect();
        spans.sort_by_key(|s| s.start);
        Ok(spans)
    }

    async fn create_event(&self, event: NewEvent) -> Result<String, FrontdeskError> {
        let id = Uuid::new_v4().to_string();
        let mut events = self
            .events
            .lock()
            .map_err(|_| FrontdeskError::calendar("calendar state poisoned"))?;
        events.insert(id.clone(), event);
        Ok(id)
    }

    async fn delete_event(&self, event_id: &str) -> Result<(), FrontdeskError> {
        let mut events = self
            .events
            .lock()
            .map_err(|_| FrontdeskError::calendar("calendar state poisoned"))?;
        if events.remove(event_id).is_none() {
            return Err(FrontdeskError::calendar(format!(
                "no such event: {event_id}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(date: NaiveDate, h: u32) -> NewEvent {
        NewEvent {
            title: "Booking - Ada".to_string(),
            start: date.and_hms_opt(h, 0, 0).unwrap(),
            end: date.and_hms_opt(h, 30, 0).unwrap(),
            description: None,
        }
    }

    #[tokio::test]
    async fn events_filtered_by_date_and_sorted() {
        let cal = InMemoryCalendar::new();
        let d1 = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2026, 3, 11).unwrap();

        cal.create_event(event(d1, 14)).await.unwrap();
        cal.create_event(event(d1, 9)).await.unwrap();
        cal.create_event(event(d2, 10)).await.unwrap();

        let spans = cal.events_on(d1).await.unwrap();
        assert_eq!(spans.len(), 2);
        assert!(spans[0].start < spans[1].start);
    }

    #[tokio::test]
    async fn delete_removes_and_rejects_unknown() {
        let cal = InMemoryCalendar::new();
        let d = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let id = cal.create_event(event(d, 9)).await.unwrap();
        assert_eq!(cal.event_count(), 1);

        cal.delete_event(&id).await.unwrap();
        assert_eq!(cal.event_count(), 0);
        assert!(cal.delete_event(&id).await.is_err());
    }
}
