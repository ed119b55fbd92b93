// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Outbound SMS delivery.
//!
//! [`TwilioMessenger`] talks to the Twilio REST API; [`NullMessenger`]
//! accepts every send without doing anything, and is what the receptionist
//! runs with when no SMS credentials are configured. [`templates`] holds
//! the canonical notification message bodies.

pub mod null;
pub mod templates;
pub mod twilio;

use std::sync::Arc;

use frontdesk_config::SmsConfig;
use frontdesk_core::Messenger;
use tracing::info;

pub use null::NullMessenger;
pub use twilio::TwilioMessenger;

/// Build the messenger for the given configuration: Twilio when fully
/// configured, the accepting no-op backend otherwise.
pub fn messenger_from_config(config: &SmsConfig) -> Arc<dyn Messenger> {
    match TwilioMessenger::from_config(config) {
        Some(twilio) => Arc::new(twilio),
        None => {
            info!("sms credentials not configured, outbound texts will be dropped");
            Arc::new(NullMessenger::new())
        }
    }
}
