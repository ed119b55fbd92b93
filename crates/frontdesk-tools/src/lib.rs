// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Receptionist tools and their registry.
//!
//! Three tools are exposed to the reasoning gateway:
//! `check_availability`, `book_appointment`, and `transfer_to_human`.
//! Tools never fail the turn: bad input and downstream trouble are reported
//! inline as error outcomes the gateway can relay to the customer.

pub mod availability;
pub mod booking;
pub mod parse;
pub mod registry;
pub mod transfer;

pub use availability::AvailabilityTool;
pub use booking::BookingTool;
pub use registry::{Tool, ToolRegistry};
pub use transfer::TransferTool;
