// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `check_availability`: free appointment slots for a requested date.

use async_trait::async_trait;
use chrono::Local;
use frontdesk_calendar::CalendarService;
use frontdesk_core::ToolOutcome;
use tracing::debug;

use crate::parse::{parse_requested_date, INVALID_DATE_MSG};
use crate::registry::Tool;

pub struct AvailabilityTool {
    calendar: CalendarService,
}

impl AvailabilityTool {
    pub fn new(calendar: CalendarService) -> Self {
        Self { calendar }
    }
}

#[async_trait]
impl Tool for AvailabilityTool {
    fn name(&self) -> &str {
        "check_availability"
    }

    fn description(&self) -> &str {
        "Check free appointment slots for a given date. Accepts 'today', 'tomorrow', or a YYYY-MM-DD date."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "date": {
                    "type": "string",
                    "description": "Date to check: YYYY-MM-DD, 'today', or 'tomorrow'"
                }
            },
            "required": ["date"]
        })
    }

    async fn invoke(&self, args: serde_json::Value) -> ToolOutcome {
        let raw = args["date"].as_str().unwrap_or("");
        let Some(date) = parse_requested_date(raw, Local::now().date_naive()) else {
            return ToolOutcome::error(INVALID_DATE_MSG);
        };

        let slots = match self.calendar.available_slots(date).await {
            Ok(slots) => slots,
            Err(err) => {
                debug!(%date, error = %err, "availability lookup failed");
                return ToolOutcome::error(format!("Could not check the calendar: {err}"));
            }
        };

        if slots.is_empty() {
            return ToolOutcome::success_with(
                format!("No available slots on {date}."),
                serde_json::json!({"date": date.to_string(), "slots": []}),
            );
        }

        let rendered: Vec<String> = slots.iter().map(|s| s.to_string()).collect();
        ToolOutcome::success_with(
            format!("Available slots on {date}: {}", rendered.join(", ")),
            serde_json::json!({"date": date.to_string(), "slots": rendered}),
        )
    }
}
