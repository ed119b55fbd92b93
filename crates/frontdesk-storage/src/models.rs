// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain model types for storage entities.
//!
//! All ids are UUIDv4 strings. `created_at`/`updated_at` columns hold RFC 3339
//! timestamps; booking `start_at` holds a local-naive `YYYY-MM-DDTHH:MM:SS`
//! string (see [`crate::START_AT_FORMAT`]).

/// A per-customer conversation thread keyed by the customer's external id
/// (phone number or channel handle).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    pub id: String,
    pub user_id: String,
    pub created_at: String,
    pub updated_at: String,
}

/// One transcript entry within a conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredMessage {
    pub id: String,
    pub conversation_id: String,
    pub role: String,
    pub content: String,
    pub created_at: String,
}

/// An appointment booked through the receptionist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id: String,
    /// External id of the customer who owns the booking.
    pub user_id: String,
    pub customer_name: String,
    pub phone: String,
    pub start_at: String,
    pub notes: Option<String>,
    pub calendar_event_id: Option<String>,
    pub reminder_sent: bool,
    pub review_sent: bool,
    pub created_at: String,
}

/// A record of a human-transfer request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferLog {
    pub id: String,
    /// Customer id, or `"unknown"` when the conversation could not be found.
    pub user_id: String,
    pub conversation_id: String,
    pub reason: String,
    pub created_at: String,
}

/// A question/answer pair injected into the system prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqEntry {
    pub id: String,
    pub question: String,
    pub answer: String,
    /// Optional grouping label, surfaced in the CLI listing only.
    pub category: Option<String>,
    pub created_at: String,
}
