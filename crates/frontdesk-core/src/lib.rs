// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Frontdesk receptionist agent.
//!
//! This crate provides the shared error type, common types (action
//! categories, chat messages, stream chunks, tool outcomes), and the
//! trait definitions for the three external collaborators: the reasoning
//! gateway, the calendar backend, and the messaging provider.

pub mod error;
pub mod traits;
pub mod types;

pub use error::FrontdeskError;
pub use types::{ActionCategory, ChatMessage, StreamChunk, ToolOutcome, ToolStatus, TurnOutcome};

pub use traits::{
    CalendarBackend, Delivery, EventSpan, GatewayReply, GatewayRequest, Messenger, NewEvent,
    ReasoningGateway, TokenSink, ToolCallRequest,
};
