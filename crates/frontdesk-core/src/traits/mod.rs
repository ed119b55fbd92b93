// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Collaborator traits implemented by adapter crates.

pub mod calendar;
pub mod gateway;
pub mod messenger;

pub use calendar::{CalendarBackend, EventSpan, NewEvent};
pub use gateway::{GatewayReply, GatewayRequest, ReasoningGateway, TokenSink, ToolCallRequest};
pub use messenger::{Delivery, Messenger};
