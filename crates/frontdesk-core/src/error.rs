// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Frontdesk receptionist agent.

use thiserror::Error;

/// The primary error type used across Frontdesk crates.
///
/// Domain-level outcomes (unparsable dates, bookings in the past, unknown
/// tool names) are *not* represented here -- those are reported inline as
/// [`crate::ToolOutcome`] results so the reasoning engine can relay them to
/// the customer. This enum covers infrastructure and turn-fatal failures.
#[derive(Debug, Error)]
pub enum FrontdeskError {
    /// Configuration errors (invalid TOML, missing required fields, bad values).
    #[error("configuration error: {0}")]
    Config(String),

    /// Storage backend errors (database open, query failure).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Reasoning gateway errors (engine unavailable, malformed reply).
    #[error("gateway error: {message}")]
    Gateway {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// External calendar collaborator errors.
    #[error("calendar error: {message}")]
    Calendar {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Messaging provider errors (SMS dispatch failure).
    #[error("messaging error: {message}")]
    Messaging {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An external call exceeded its bounded timeout.
    #[error("operation timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// The tool-calling loop hit its configured round limit.
    #[error("tool round limit exceeded after {rounds} rounds")]
    RoundLimit { rounds: u32 },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl FrontdeskError {
    /// Wraps a storage-layer error.
    pub fn storage(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage {
            source: Box::new(source),
        }
    }

    /// Builds a gateway error with a plain message.
    pub fn gateway(message: impl Into<String>) -> Self {
        Self::Gateway {
            message: message.into(),
            source: None,
        }
    }

    /// Builds a calendar error with a plain message.
    pub fn calendar(message: impl Into<String>) -> Self {
        Self::Calendar {
            message: message.into(),
            source: None,
        }
    }

    /// Builds a messaging error with a plain message.
    pub fn messaging(message: impl Into<String>) -> Self {
        Self::Messaging {
            message: message.into(),
            source: None,
        }
    }
}
