// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scripted reasoning gateway.
//!
//! Each `invoke` pops the next scripted item; tests assert against the
//! recorded requests afterwards. With streaming enabled, final replies are
//! emitted token by token through the sink before being returned.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use frontdesk_core::{
    FrontdeskError, GatewayReply, GatewayRequest, ReasoningGateway, TokenSink,
};

enum ScriptItem {
    Reply(GatewayReply),
    Error(String),
}

#[derive(Default)]
pub struct ScriptedGateway {
    script: Mutex<VecDeque<ScriptItem>>,
    requests: Mutex<Vec<GatewayRequest>>,
    streaming: bool,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable the streaming path; final replies are split on whitespace and
    /// emitted as individual tokens.
    pub fn streaming() -> Self {
        Self {
            streaming: true,
            ..Self::default()
        }
    }

    pub fn push_reply(&self, reply: GatewayReply) {
        self.script
            .lock()
            .expect("script lock")
            .push_back(ScriptItem::Reply(reply));
    }

    pub fn push_final(&self, text: impl Into<String>) {
        self.push_reply(GatewayReply::Final(text.into()));
    }

    pub fn push_error(&self, message: impl Into<String>) {
        self.script
            .lock()
            .expect("script lock")
            .push_back(ScriptItem::Error(message.into()));
    }

    /// Requests recorded so far, in invocation order.
    pub fn requests(&self) -> Vec<GatewayRequest> {
        self.requests.lock().expect("requests lock").clone()
    }

    fn next_item(&self, request: GatewayRequest) -> Result<GatewayReply, FrontdeskError> {
        self.requests.lock().expect("requests lock").push(request);
        match self.script.lock().expect("script lock").pop_front() {
            Some(ScriptItem::Reply(reply)) => Ok(reply),
            Some(ScriptItem::Error(message)) => Err(FrontdeskError::gateway(message)),
            None => Err(FrontdeskError::gateway("script exhausted")),
        }
    }
}

#[async_trait]
impl ReasoningGateway for ScriptedGateway {
    async fn invoke(&self, request: GatewayRequest) -> Result<GatewayReply, FrontdeskError> {
        self.next_item(request)
    }

    async fn invoke_streaming(
        &self,
        request: GatewayRequest,
        sink: TokenSink,
    ) -> Result<GatewayReply, FrontdeskError> {
        let reply = self.next_item(request)?;
        if self.streaming {
            if let GatewayReply::Final(text) = &reply {
                for token in text.split_inclusive(' ') {
                    sink.emit(token).await;
                }
            }
        }
        Ok(reply)
    }

    fn supports_streaming(&self) -> bool {
        self.streaming
    }
}
