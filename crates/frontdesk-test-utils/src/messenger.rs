// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Recording messenger with failure injection.

use std::sync::Mutex;

use async_trait::async_trait;
use frontdesk_core::{Delivery, FrontdeskError, Messenger};

#[derive(Default)]
pub struct RecordingMessenger {
    sent: Mutex<Vec<(String, String)>>,
    failures_remaining: Mutex<u32>,
}

impl RecordingMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `n` sends fail with a messaging error.
    pub fn fail_next(&self, n: u32) {
        *self.failures_remaining.lock().expect("failures lock") = n;
    }

    /// `(to, body)` pairs for every successful send, in order.
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().expect("sent lock").clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().expect("sent lock").len()
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send(&self, to: &str, body: &str) -> Result<Delivery, FrontdeskError> {
        {
            let mut failures = self.failures_remaining.lock().expect("failures lock");
            if *failures > 0 {
                *failures -= 1;
                return Err(FrontdeskError::messaging("injected send failure"));
            }
        }
        let mut sent = self.sent.lock().expect("sent lock");
        sent.push((to.to_string(), body.to_string()));
        Ok(Delivery {
            delivery_id: format!("rec-{}", sent.len()),
            note: None,
        })
    }
}
