// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Calendar layer: business-hours slot computation over a pluggable
//! [`CalendarBackend`].
//!
//! The slot walk is pure and lives in [`slots`]; [`CalendarService`] binds it
//! to a backend and the configured business hours. [`InMemoryCalendar`] is
//! the default backend and the test double.

pub mod memory;
pub mod service;
pub mod slots;

pub use frontdesk_core::{CalendarBackend, EventSpan, NewEvent};
pub use memory::InMemoryCalendar;
pub use service::CalendarService;
pub use slots::{free_slots, Slot};
