// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Calendar service binding the slot walk to a backend and business hours.

use std::sync::Arc;

use chrono::NaiveDate;
use frontdesk_config::CalendarConfig;
use frontdesk_core::{CalendarBackend, FrontdeskError, NewEvent};
use tracing::debug;

use crate::slots::{free_slots, Slot};

/// Availability and event management for the configured business hours.
#[derive(Clone)]
pub struct CalendarService {
    backend: Arc<dyn CalendarBackend>,
    config: CalendarConfig,
}

impl CalendarService {
    pub fn new(backend: Arc<dyn CalendarBackend>, config: CalendarConfig) -> Self {
        Self { backend, config }
    }

    /// Free slots on `date` within business hours.
    pub async fn available_slots(&self, date: NaiveDate) -> Result<Vec<Slot>, FrontdeskError> {
        let busy = self.backend.events_on(date).await?;
        let slots = free_slots(
            date,
            self.config.open_hour,
            self.config.close_hour,
            self.config.slot_minutes,
            &busy,
        );
        debug!(%date, busy = busy.len(), free = slots.len(), "computed availability");
        Ok(slots)
    }

    /// Create an event on the backend and return its id.
    pub async fn schedule_event(&self, event: NewEvent) -> Result<String, FrontdeskError> {
        self.backend.create_event(event).await
    }

    /// Remove an event from the backend.
    pub async fn cancel_event(&self, event_id: &str) -> Result<(), FrontdeskError> {
        self.backend.delete_event(event_id).await
    }

    /// Appointment slot length in minutes.
    pub fn slot_minutes(&self) -> u32 {
        self.config.slot_minutes
    }
}
