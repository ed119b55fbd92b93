// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use async_trait::async_trait;

use crate::error::FrontdeskError;

/// Receipt for an outbound text message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    /// Provider-assigned message id, or a placeholder for no-op backends.
    pub delivery_id: String,
    pub note: Option<String>,
}

/// Sends SMS messages to customers and to the business owner.
#[async_trait]
pub trait Messenger: Send + Sync {
    async fn send(&self, to: &str, body: &str) -> Result<Delivery, FrontdeskError>;
}
