// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reasoning gateway abstraction.
//!
//! A gateway turns a transcript plus tool definitions into either a final
//! natural-language reply or a request to call one of the tools. Streaming
//! support is optional; callers fall back to the blocking path when
//! [`ReasoningGateway::supports_streaming`] is false.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::error::FrontdeskError;
use crate::types::ChatMessage;

/// Everything a gateway needs to produce the next step of a turn.
#[derive(Debug, Clone)]
pub struct GatewayRequest {
    pub system_prompt: String,
    pub messages: Vec<ChatMessage>,
    /// Tool definitions in the provider's function-calling schema.
    pub tools: Vec<serde_json::Value>,
}

/// A tool invocation requested by the gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolCallRequest {
    pub id: String,
    pub name: String,
    pub arguments: serde_json::Value,
}

/// One step of the reasoning loop.
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayReply {
    /// The gateway produced user-facing text; the loop ends here.
    Final(String),
    /// The gateway wants a tool executed before it can answer.
    ToolCall(ToolCallRequest),
}

/// Delivers raw model tokens to a stream consumer.
///
/// Sends are best effort: a consumer that has gone away must not abort the
/// gateway, so send failures are swallowed.
#[derive(Debug, Clone)]
pub struct TokenSink {
    tx: mpsc::Sender<String>,
}

impl TokenSink {
    pub fn new(tx: mpsc::Sender<String>) -> Self {
        Self { tx }
    }

    pub async fn emit(&self, token: &str) {
        let _ = self.tx.send(token.to_string()).await;
    }
}

#[async_trait]
pub trait ReasoningGateway: Send + Sync {
    /// Runs one inference step over the transcript.
    async fn invoke(&self, request: GatewayRequest) -> Result<GatewayReply, FrontdeskError>;

    /// Streaming variant: emits tokens through `sink` as they are produced
    /// and still returns the complete reply. The default implementation
    /// performs a blocking invoke and emits nothing.
    async fn invoke_streaming(
        &self,
        request: GatewayRequest,
        _sink: TokenSink,
    ) -> Result<GatewayReply, FrontdeskError> {
        self.invoke(request).await
    }

    fn supports_streaming(&self) -> bool {
        false
    }
}
