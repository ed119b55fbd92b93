// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Accepting no-op messenger used when SMS is not configured.

use async_trait::async_trait;
use frontdesk_core::{Delivery, FrontdeskError, Messenger};
use tracing::info;

#[derive(Debug, Default)]
pub struct NullMessenger;

impl NullMessenger {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Messenger for NullMessenger {
    async fn send(&self, to: &str, body: &str) -> Result<Delivery, FrontdeskError> {
        info!(to, chars = body.len(), "sms not configured, dropping message");
        Ok(Delivery {
            delivery_id: "null".to_string(),
            note: Some("sms not configured".to_string()),
        })
    }
}
