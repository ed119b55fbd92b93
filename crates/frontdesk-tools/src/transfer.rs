// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `transfer_to_human`: log the request and alert the business owner.
//!
//! The transfer always succeeds from the customer's point of view. The
//! audit row is required; the owner SMS is best effort. The owning user is
//! looked up from the conversation and falls back to a placeholder when the
//! conversation is unknown.

use std::sync::Arc;

use async_trait::async_trait;
use frontdesk_core::{Messenger, ToolOutcome};
use frontdesk_sms::templates;
use frontdesk_storage::{queries, Database};
use tracing::{info, warn};

use crate::registry::Tool;

pub struct TransferTool {
    db: Database,
    messenger: Arc<dyn Messenger>,
    owner_phone: Option<String>,
}

impl TransferTool {
    pub fn new(db: Database, messenger: Arc<dyn Messenger>, owner_phone: Option<String>) -> Self {
        Self {
            db,
            messenger,
            owner_phone,
        }
    }
}

#[async_trait]
impl Tool for TransferTool {
    fn name(&self) -> &str {
        "transfer_to_human"
    }

    fn description(&self) -> &str {
        "Escalate the conversation to a human. Logs the request and notifies the business owner."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "conversation_id": {
                    "type": "string",
                    "description": "Id of the current conversation"
                },
                "reason": {
                    "type": "string",
                    "description": "Why the customer wants a human"
                }
            },
            "required": ["conversation_id", "reason"]
        })
    }

    async fn invoke(&self, args: serde_json::Value) -> ToolOutcome {
        let conversation_id = args["conversation_id"]
            .as_str()
            .unwrap_or("")
            .trim()
            .to_string();
        let reason = args["reason"]
            .as_str()
            .unwrap_or("no reason given")
            .trim()
            .to_string();
        if conversation_id.is_empty() {
            return ToolOutcome::error("A conversation_id is required to transfer.");
        }

        let user_id =
            match queries::conversations::get_conversation(&self.db, &conversation_id).await {
                Ok(Some(convo)) => convo.user_id,
                Ok(None) => "unknown".to_string(),
                Err(err) => {
                    warn!(error = %err, "conversation lookup failed during transfer");
                    "unknown".to_string()
                }
            };

        match queries::transfers::insert_transfer_log(&self.db, &user_id, &conversation_id, &reason)
            .await
        {
            Ok(log) => info!(transfer_id = %log.id, user = %user_id, "transfer logged"),
            Err(err) => {
                warn!(error = %err, "transfer log insert failed");
                return ToolOutcome::error("Could not record the transfer. Please try again.");
            }
        }

        match &self.owner_phone {
            Some(owner) => {
                if let Err(err) = self
                    .messenger
                    .send(owner, &templates::transfer_alert(&user_id, &reason))
                    .await
                {
                    warn!(error = %err, "owner transfer alert failed");
                }
            }
            None => warn!("owner phone not configured, transfer alert skipped"),
        }

        ToolOutcome::success(
            "Transfer request received. Someone will reach out to the customer shortly.",
        )
    }
}

#[cfg(test)]
mod tests {
    use frontdesk_test_utils::{temp_db, RecordingMessenger};

    use super::*;

    async fn tool(owner: Option<&str>) -> (TransferTool, Database, Arc<RecordingMessenger>, tempfile::TempDir) {
        let (db, dir) = temp_db().await;
        let messenger = Arc::new(RecordingMessenger::new());
        let tool = TransferTool::new(db.clone(), messenger.clone(), owner.map(String::from));
        (tool, db, messenger, dir)
    }

    #[tokio::test]
    async fn logs_and_alerts_owner() {
        let (tool, db, messenger, _dir) = tool(Some("+15559990000")).await;
        let convo = queries::conversations::get_or_create_conversation(&db, "+15550001111")
            .await
            .unwrap();

        let outcome = tool
            .invoke(serde_json::json!({
                "conversation_id": convo.id.as_str(),
                "reason": "billing question"
            }))
            .await;
        assert!(outcome.is_success());

        let logs = queries::transfers::list_transfer_logs(&db).await.unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].conversation_id, convo.id);
        assert_eq!(logs[0].user_id, "+15550001111");

        let sent = messenger.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "+15559990000");
        assert_eq!(sent[0].1, "[Transfer] User +15550001111: billing question");
    }

    #[tokio::test]
    async fn unknown_conversation_still_transfers() {
        let (tool, db, messenger, _dir) = tool(Some("+15559990000")).await;

        let outcome = tool
            .invoke(serde_json::json!({
                "conversation_id": "no-such-conversation",
                "reason": "wants a quote"
            }))
            .await;
        assert!(outcome.is_success());

        let logs = queries::transfers::list_transfer_logs(&db).await.unwrap();
        assert_eq!(logs[0].conversation_id, "no-such-conversation");
        assert_eq!(logs[0].user_id, "unknown");
        assert_eq!(messenger.sent()[0].1, "[Transfer] User unknown: wants a quote");
    }

    #[tokio::test]
    async fn sms_failure_does_not_fail_the_transfer() {
        let (tool, db, messenger, _dir) = tool(Some("+15559990000")).await;
        let convo = queries::conversations::get_or_create_conversation(&db, "+15550001111")
            .await
            .unwrap();
        messenger.fail_next(1);

        let outcome = tool
            .invoke(serde_json::json!({
                "conversation_id": convo.id.as_str(),
                "reason": "urgent"
            }))
            .await;
        assert!(outcome.is_success());
        assert_eq!(queries::transfers::list_transfer_logs(&db).await.unwrap().len(), 1);
        assert_eq!(messenger.sent_count(), 0);
    }

    #[tokio::test]
    async fn missing_owner_phone_skips_alert() {
        let (tool, db, messenger, _dir) = tool(None).await;
        let convo = queries::conversations::get_or_create_conversation(&db, "+15550001111")
            .await
            .unwrap();
        let outcome = tool
            .invoke(serde_json::json!({
                "conversation_id": convo.id.as_str(),
                "reason": "anything"
            }))
            .await;
        assert!(outcome.is_success());
        assert_eq!(messenger.sent_count(), 0);
    }
}
