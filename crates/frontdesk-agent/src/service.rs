// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The conversation turn pipeline.
//!
//! One turn: load the customer's transcript, append the inbound message,
//! run the gateway/tool loop until the gateway produces a final reply,
//! classify it, and persist it. A turn never fails outward; every error is
//! converted into an apologetic reply with the `error` action category.

use std::sync::Arc;

use frontdesk_config::AgentConfig;
use frontdesk_core::{
    ChatMessage, FrontdeskError, GatewayReply, GatewayRequest, ReasoningGateway, TokenSink,
    TurnOutcome,
};
use frontdesk_core::ActionCategory;
use frontdesk_storage::{queries, Database};
use frontdesk_tools::ToolRegistry;
use tracing::{debug, info, warn};

use crate::classify::classify_turn;
use crate::prompt::{build_system_prompt, DEFAULT_SYSTEM_PROMPT};

/// Orchestrates conversation turns. Cheap to clone.
#[derive(Clone)]
pub struct ConversationService {
    pub(crate) db: Database,
    pub(crate) gateway: Arc<dyn ReasoningGateway>,
    pub(crate) tools: Arc<ToolRegistry>,
    pub(crate) settings: AgentConfig,
}

impl ConversationService {
    pub fn new(
        db: Database,
        gateway: Arc<dyn ReasoningGateway>,
        tools: Arc<ToolRegistry>,
        settings: AgentConfig,
    ) -> Self {
        Self {
            db,
            gateway,
            tools,
            settings,
        }
    }

    /// Process one customer turn to completion.
    ///
    /// Infallible by contract: gateway failures, storage failures, and the
    /// round limit all collapse into an apology reply with the `error`
    /// category, persisted best-effort.
    pub async fn process_turn(&self, user_id: &str, text: &str) -> TurnOutcome {
        match self.run_turn(user_id, text, None).await {
            Ok(outcome) => outcome,
            Err(err) => self.recover(user_id, &err).await,
        }
    }

    /// The gateway/tool loop shared by the blocking and streaming paths.
    ///
    /// Tool exchanges stay in the in-memory transcript only; the durable
    /// record keeps the customer's message and the final reply.
    pub(crate) async fn run_turn(
        &self,
        user_id: &str,
        text: &str,
        sink: Option<TokenSink>,
    ) -> Result<TurnOutcome, FrontdeskError> {
        let convo = queries::conversations::get_or_create_conversation(&self.db, user_id).await?;
        queries::messages::insert_message(&self.db, &convo.id, "user", text).await?;

        let history = queries::messages::messages_for_conversation(&self.db, &convo.id).await?;
        let faq = queries::faq::list_faq_entries(&self.db).await?;
        let base = self
            .settings
            .system_prompt
            .as_deref()
            .unwrap_or(DEFAULT_SYSTEM_PROMPT);
        let system_prompt = build_system_prompt(base, &faq);

        let mut messages: Vec<ChatMessage> = history
            .iter()
            .map(|m| ChatMessage {
                role: m.role.clone(),
                content: m.content.clone(),
            })
            .collect();
        let definitions = self.tools.tool_definitions();
        let mut last_tool: Option<String> = None;

        for round in 0..self.settings.max_tool_rounds {
            let request = GatewayRequest {
                system_prompt: system_prompt.clone(),
                messages: messages.clone(),
                tools: definitions.clone(),
            };
            let reply = match &sink {
                Some(sink) if self.gateway.supports_streaming() => {
                    self.gateway.invoke_streaming(request, sink.clone()).await?
                }
                _ => self.gateway.invoke(request).await?,
            };

            match reply {
                GatewayReply::Final(final_text) => {
                    let action = classify_turn(
                        self.settings.classification,
                        &final_text,
                        last_tool.as_deref(),
                    );
                    queries::messages::insert_message(&self.db, &convo.id, "assistant", &final_text)
                        .await?;
                    info!(user = user_id, %action, rounds = round + 1, "turn complete");
                    return Ok(TurnOutcome { final_text, action });
                }
                GatewayReply::ToolCall(call) => {
                    debug!(tool = %call.name, round, "gateway requested tool");
                    let outcome = self.tools.execute(&call.name, call.arguments.clone()).await;
                    messages.push(ChatMessage::assistant(format!(
                        "[tool call] {} {}",
                        call.name, call.arguments
                    )));
                    messages.push(ChatMessage::tool(outcome.to_transcript_json()));
                    last_tool = Some(call.name);
                }
            }
        }

        Err(FrontdeskError::RoundLimit {
            rounds: self.settings.max_tool_rounds,
        })
    }

    /// Convert a failed turn into the customer-facing apology.
    pub(crate) async fn recover(&self, user_id: &str, err: &FrontdeskError) -> TurnOutcome {
        warn!(user = user_id, error = %err, "turn failed, sending apology");
        let apology = apology_for(err);
        match queries::conversations::get_or_create_conversation(&self.db, user_id).await {
            Ok(convo) => {
                if let Err(persist_err) =
                    queries::messages::insert_message(&self.db, &convo.id, "assistant", &apology)
                        .await
                {
                    warn!(error = %persist_err, "could not persist apology");
                }
            }
            Err(lookup_err) => {
                warn!(error = %lookup_err, "could not resolve conversation for apology");
            }
        }
        TurnOutcome {
            final_text: apology,
            action: ActionCategory::Error,
        }
    }
}

/// The apology text sent when a turn fails.
pub(crate) fn apology_for(err: &FrontdeskError) -> String {
    format!("I encountered an error: {err}. Please try again.")
}
