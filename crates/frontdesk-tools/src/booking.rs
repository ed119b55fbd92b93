// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `book_appointment`: commit a booking, then best-effort calendar event
//! and confirmation SMS.
//!
//! The booking row is the source of truth. It is inserted before the
//! calendar event and confirmation text; failures in either leave the
//! booking in place and only log a warning.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Local};
use frontdesk_calendar::CalendarService;
use frontdesk_core::{Messenger, NewEvent, ToolOutcome};
use frontdesk_sms::templates;
use frontdesk_storage::{queries, Database};
use tracing::{info, warn};

use crate::parse::{parse_requested_datetime, INVALID_DATETIME_MSG};
use crate::registry::Tool;

pub struct BookingTool {
    db: Database,
    calendar: CalendarService,
    messenger: Arc<dyn Messenger>,
}

impl BookingTool {
    pub fn new(db: Database, calendar: CalendarService, messenger: Arc<dyn Messenger>) -> Self {
        Self {
            db,
            calendar,
            messenger,
        }
    }
}

#[async_trait]
impl Tool for BookingTool {
    fn name(&self) -> &str {
        "book_appointment"
    }

    fn description(&self) -> &str {
        "Book an appointment for a customer at a specific date and time (YYYY-MM-DD HH:MM)."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "user_id": {
                    "type": "string",
                    "description": "The customer's identifier (phone number)"
                },
                "name": {
                    "type": "string",
                    "description": "Customer's name"
                },
                "phone": {
                    "type": "string",
                    "description": "Customer's phone number"
                },
                "datetime": {
                    "type": "string",
                    "description": "Appointment start in YYYY-MM-DD HH:MM"
                },
                "notes": {
                    "type": "string",
                    "description": "Optional notes about the appointment"
                }
            },
            "required": ["user_id", "name", "phone", "datetime"]
        })
    }

    async fn invoke(&self, args: serde_json::Value) -> ToolOutcome {
        let user_id = args["user_id"].as_str().unwrap_or("").trim().to_string();
        let name = args["name"].as_str().unwrap_or("").trim().to_string();
        let phone = args["phone"].as_str().unwrap_or("").trim().to_string();
        let raw_when = args["datetime"].as_str().unwrap_or("");
        let notes = args["notes"].as_str().map(str::trim).filter(|n| !n.is_empty());

        if user_id.is_empty() || name.is_empty() || phone.is_empty() {
            return ToolOutcome::error("A user_id, name, and phone are required to book.");
        }
        let Some(start) = parse_requested_datetime(raw_when) else {
            return ToolOutcome::error(INVALID_DATETIME_MSG);
        };
        if start <= Local::now().naive_local() {
            return ToolOutcome::error(
                "That time is in the past. Please pick a future date and time.",
            );
        }

        let booking = match queries::bookings::insert_booking(
            &self.db,
            &user_id,
            &name,
            &phone,
            start,
            notes,
        )
        .await
        {
            Ok(booking) => booking,
            Err(err) => {
                warn!(error = %err, "booking insert failed");
                return ToolOutcome::error("Could not save the booking. Please try again.");
            }
        };
        info!(booking_id = %booking.id, customer = %name, %start, "booking created");

        // Best effort from here on: the booking row already committed.
        let end = start + Duration::minutes(i64::from(self.calendar.slot_minutes()));
        match self
            .calendar
            .schedule_event(NewEvent {
                title: format!("Booking - {name}"),
                start,
                end,
                description: Some(format!(
                    "Phone: {phone}\nNotes: {}",
                    notes.unwrap_or("N/A")
                )),
            })
            .await
        {
            Ok(event_id) => {
                if let Err(err) =
                    queries::bookings::set_calendar_event_id(&self.db, &booking.id, &event_id)
                        .await
                {
                    warn!(booking_id = %booking.id, error = %err, "could not link calendar event");
                }
            }
            Err(err) => {
                warn!(booking_id = %booking.id, error = %err, "calendar event creation failed");
            }
        }

        let when = start.format("%Y-%m-%d %H:%M").to_string();
        if let Err(err) = self
            .messenger
            .send(&phone, &templates::confirmation(&name, &when))
            .await
        {
            warn!(booking_id = %booking.id, error = %err, "confirmation sms failed");
        }

        ToolOutcome::success_with(
            format!("Booking confirmed for {name} on {when}."),
            serde_json::json!({"booking_id": booking.id}),
        )
    }
}
