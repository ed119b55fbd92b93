// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Turn orchestration: the conversation pipeline that turns one inbound
//! customer message into a persisted, classified reply.
//!
//! [`ConversationService`] drives the gateway/tool loop; [`stream`] adapts
//! a turn into a chunked stream for token-by-token transports; [`classify`]
//! maps finished turns to action categories; [`prompt`] assembles the
//! system prompt from the configured persona and the FAQ knowledge base.

pub mod classify;
pub mod prompt;
pub mod service;
pub mod stream;

pub use classify::classify_turn;
pub use prompt::{build_system_prompt, DEFAULT_SYSTEM_PROMPT};
pub use service::ConversationService;
pub use stream::{rechunk, ChunkStream};
