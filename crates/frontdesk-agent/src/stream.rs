// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Streaming turn delivery.
//!
//! A streamed turn yields zero or more `Content` chunks followed by exactly
//! one terminal chunk: `Done` on success, `Error` on failure. Two modes:
//! live-token forwards gateway tokens as they arrive (with a single-chunk
//! fallback when the gateway produced no tokens), re-chunk buffers the full
//! reply and splits it on punctuation boundaries.

use std::pin::Pin;

use frontdesk_config::StreamingMode;
use frontdesk_core::{StreamChunk, TokenSink};
use futures::Stream;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

use crate::service::ConversationService;

pub type ChunkStream = Pin<Box<dyn Stream<Item = StreamChunk> + Send>>;

const CHANNEL_CAPACITY: usize = 64;

/// Characters that end a re-chunked fragment.
const BOUNDARY_CHARS: &[char] = &[' ', ',', '.', '!', '?', ':', ';', '\n'];

/// Split `text` into word-ish fragments: a fragment closes on a boundary
/// character or once it reaches `min_len` characters. Concatenating the
/// fragments reproduces `text` exactly.
pub fn rechunk(text: &str, min_len: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut buf = String::new();
    let mut buf_chars = 0usize;
    for c in text.chars() {
        buf.push(c);
        buf_chars += 1;
        if BOUNDARY_CHARS.contains(&c) || buf_chars >= min_len.max(1) {
            chunks.push(std::mem::take(&mut buf));
            buf_chars = 0;
        }
    }
    if !buf.is_empty() {
        chunks.push(buf);
    }
    chunks
}

impl ConversationService {
    /// Process one turn as a chunk stream, using the configured mode.
    ///
    /// The turn runs to completion even if the consumer drops the stream
    /// early; persistence does not depend on the consumer.
    pub fn process_turn_streaming(&self, user_id: &str, text: &str) -> ChunkStream {
        match self.settings.streaming {
            StreamingMode::LiveTokens => self.live_stream(user_id, text),
            StreamingMode::Rechunk => self.rechunk_stream(user_id, text),
        }
    }

    fn live_stream(&self, user_id: &str, text: &str) -> ChunkStream {
        let service = self.clone();
        let user_id = user_id.to_string();
        let text = text.to_string();
        let (chunk_tx, chunk_rx) = mpsc::channel::<StreamChunk>(CHANNEL_CAPACITY);

        tokio::spawn(async move {
            let (token_tx, mut token_rx) = mpsc::channel::<String>(CHANNEL_CAPACITY);
            let forward_tx = chunk_tx.clone();
            let forwarder = tokio::spawn(async move {
                let mut emitted = 0usize;
                while let Some(token) = token_rx.recv().await {
                    emitted += 1;
                    // a closed chunk channel means the consumer left; keep
                    // draining tokens so the gateway never blocks
                    let _ = forward_tx.send(StreamChunk::Content(token)).await;
                }
                emitted
            });

            let sink = TokenSink::new(token_tx);
            let result = service.run_turn(&user_id, &text, Some(sink)).await;
            // the sink is gone now, so the forwarder drains and exits
            let emitted = forwarder.await.unwrap_or(0);

            match result {
                Ok(outcome) => {
                    if emitted == 0 {
                        let _ = chunk_tx
                            .send(StreamChunk::Content(outcome.final_text.clone()))
                            .await;
                    }
                    let _ = chunk_tx
                        .send(StreamChunk::Done {
                            action: outcome.action,
                            full_response: outcome.final_text,
                        })
                        .await;
                }
                Err(err) => {
                    let outcome = service.recover(&user_id, &err).await;
                    let _ = chunk_tx.send(StreamChunk::Error(outcome.final_text)).await;
                }
            }
        });

        Box::pin(ReceiverStream::new(chunk_rx))
    }

    fn rechunk_stream(&self, user_id: &str, text: &str) -> ChunkStream {
        let service = self.clone();
        let user_id = user_id.to_string();
        let text = text.to_string();
        let min_len = self.settings.min_chunk_len;
        let (chunk_tx, chunk_rx) = mpsc::channel::<StreamChunk>(CHANNEL_CAPACITY);

        tokio::spawn(async move {
            match service.run_turn(&user_id, &text, None).await {
                Ok(outcome) => {
                    for fragment in rechunk(&outcome.final_text, min_len) {
                        if chunk_tx.send(StreamChunk::Content(fragment)).await.is_err() {
                            // consumer left; the turn is already persisted
                            return;
                        }
                    }
                    let _ = chunk_tx
                        .send(StreamChunk::Done {
                            action: outcome.action,
                            full_response: outcome.final_text,
                        })
                        .await;
                }
                Err(err) => {
                    let outcome = service.recover(&user_id, &err).await;
                    let _ = chunk_tx.send(StreamChunk::Error(outcome.final_text)).await;
                }
            }
        });

        Box::pin(ReceiverStream::new(chunk_rx))
    }
}
