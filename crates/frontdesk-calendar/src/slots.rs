// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pure free-slot computation over a day's busy intervals.

use std::fmt;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use frontdesk_core::EventSpan;

/// A bookable interval within business hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

/// Walk the business day in fixed-length steps, emitting every slot that
/// does not overlap a busy interval.
///
/// A slot conflicts with an event when the two half-open intervals
/// intersect: `event.start < slot.end && event.end > slot.start`.
/// Back-to-back events therefore do not block adjacent slots.
pub fn free_slots(
    date: NaiveDate,
    open_hour: u32,
    close_hour: u32,
    slot_minutes: u32,
    busy: &[EventSpan],
) -> Vec<Slot> {
    let Some(open) = date.and_hms_opt(open_hour, 0, 0) else {
        return Vec::new();
    };
    let close = if close_hour == 24 {
        date.and_hms_opt(23, 59, 59)
            .map(|t| t + Duration::seconds(1))
    } else {
        date.and_hms_opt(close_hour, 0, 0)
    };
    let Some(close) = close else {
        return Vec::new();
    };
    let step = Duration::minutes(i64::from(slot_minutes));
    if step <= Duration::zero() {
        return Vec::new();
    }

    let mut slots = Vec::new();
    let mut current = open;
    while current + step <= close {
        let slot_end = current + step;
        let conflict = busy
            .iter()
            .any(|ev| ev.start < slot_end && ev.end > current);
        if !conflict {
            slots.push(Slot {
                start: current,
                end: slot_end,
            });
        }
        current = slot_end;
    }
    slots
}
