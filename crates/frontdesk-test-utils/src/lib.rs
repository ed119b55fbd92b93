// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared test doubles and fixtures for Frontdesk crates.
//!
//! Provides a scripted reasoning gateway, a recording messenger with
//! failure injection, and a temp-file database fixture. Not compiled into
//! release binaries; consumed via dev-dependencies only.

pub mod db;
pub mod gateway;
pub mod messenger;

pub use db::temp_db;
pub use gateway::ScriptedGateway;
pub use messenger::RecordingMessenger;
