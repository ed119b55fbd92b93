// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Background notification scheduler.
//!
//! Two periodic sweeps run over the bookings table: appointment reminders
//! (due ~24 hours before the start time) and post-appointment review
//! requests. Sent-flags are set only after a successful send, so failures
//! are retried on the next sweep and nothing is ever sent twice.

pub mod scheduler;
pub mod sweeps;

pub use scheduler::NotificationScheduler;
pub use sweeps::{run_reminder_sweep, run_review_sweep, SweepStats};
