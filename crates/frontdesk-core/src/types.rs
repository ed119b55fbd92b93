// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared across the Frontdesk workspace.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Coarse classification of a turn's outcome, used for downstream routing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ActionCategory {
    Response,
    Booking,
    Transfer,
    Calendar,
    Error,
}

/// A single role-tagged entry in the conversation transcript fed to the
/// reasoning gateway. Roles are `user`, `assistant`, and `tool`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }

    pub fn tool(content: impl Into<String>) -> Self {
        Self {
            role: "tool".to_string(),
            content: content.into(),
        }
    }
}

/// Result of one complete conversation turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnOutcome {
    pub final_text: String,
    pub action: ActionCategory,
}

/// One element of a streamed turn.
///
/// Serializes to the wire shape `{"type": "...", "data": ...}` consumed by
/// the transport layer. `Content` chunks arrive in emission order; exactly
/// one terminal `Done` or `Error` chunk closes every stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum StreamChunk {
    Content(String),
    Done {
        action: ActionCategory,
        full_response: String,
    },
    Error(String),
}

/// Status reported by a tool invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ToolStatus {
    Success,
    Error,
}

/// The result object every tool returns.
///
/// Tools never raise: input and domain failures are reported inline through
/// `status`/`message` so the reasoning engine can relay them to the customer.
/// `details` carries tool-specific structured fields (booking id, slot list).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolOutcome {
    pub status: ToolStatus,
    pub message: String,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub details: serde_json::Value,
}

impl ToolOutcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: ToolStatus::Success,
            message: message.into(),
            details: serde_json::Value::Null,
        }
    }

    pub fn success_with(message: impl Into<String>, details: serde_json::Value) -> Self {
        Self {
            status: ToolStatus::Success,
            message: message.into(),
            details,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ToolStatus::Error,
            message: message.into(),
            details: serde_json::Value::Null,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ToolStatus::Success
    }

    /// Renders the outcome as the JSON string fed back to the gateway.
    pub fn to_transcript_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            r#"{"status":"error","message":"unserializable tool outcome"}"#.to_string()
        })
    }
}
