// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Twilio REST API messenger.

use std::time::Duration;

use async_trait::async_trait;
use frontdesk_config::SmsConfig;
use frontdesk_core::{Delivery, FrontdeskError, Messenger};
use serde::Deserialize;
use tracing::{debug, info};

const DEFAULT_BASE_URL: &str = "https://api.twilio.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Sends SMS through the Twilio Messages API.
pub struct TwilioMessenger {
    client: reqwest::Client,
    base_url: String,
    account_sid: String,
    auth_token: String,
    from_number: String,
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    sid: String,
}

impl TwilioMessenger {
    pub fn new(account_sid: String, auth_token: String, from_number: String) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            base_url: DEFAULT_BASE_URL.to_string(),
            account_sid,
            auth_token,
            from_number,
        }
    }

    /// Build a messenger when the config carries full credentials.
    pub fn from_config(config: &SmsConfig) -> Option<Self> {
        match (&config.account_sid, &config.auth_token, &config.from_number) {
            (Some(sid), Some(token), Some(from)) => {
                Some(Self::new(sid.clone(), token.clone(), from.clone()))
            }
            _ => None,
        }
    }

    /// Override the API base URL (tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl Messenger for TwilioMessenger {
    async fn send(&self, to: &str, body: &str) -> Result<Delivery, FrontdeskError> {
        let url = format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.base_url, self.account_sid
        );
        debug!(to, chars = body.len(), "dispatching sms");

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&[("To", to), ("From", self.from_number.as_str()), ("Body", body)])
            .send()
            .await
            .map_err(|e| FrontdeskError::Messaging {
                message: "twilio request failed".to_string(),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(FrontdeskError::messaging(format!(
                "twilio returned {status}: {detail}"
            )));
        }

        let parsed: MessageResponse =
            response.json().await.map_err(|e| FrontdeskError::Messaging {
                message: "twilio response unreadable".to_string(),
                source: Some(Box::new(e)),
            })?;

        info!(to, sid = %parsed.sid, "sms delivered");
        Ok(Delivery {
            delivery_id: parsed.sid,
            note: None,
        })
    }
}
