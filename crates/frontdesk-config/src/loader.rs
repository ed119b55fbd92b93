// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./frontdesk.toml` > `~/.config/frontdesk/frontdesk.toml`
//! > `/etc/frontdesk/frontdesk.toml` with environment variable overrides via
//! the `FRONTDESK_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::FrontdeskConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/frontdesk/frontdesk.toml` (system-wide)
/// 3. `~/.config/frontdesk/frontdesk.toml` (user XDG config)
/// 4. `./frontdesk.toml` (local directory)
/// 5. `FRONTDESK_*` environment variables
pub fn load_config() -> Result<FrontdeskConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(FrontdeskConfig::default()))
        .merge(Toml::file("/etc/frontdesk/frontdesk.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("frontdesk/frontdesk.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("frontdesk.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and for callers that already hold the config text.
pub fn load_config_from_str(toml_content: &str) -> Result<FrontdeskConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(FrontdeskConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<FrontdeskConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(FrontdeskConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `FRONTDESK_SMS_ACCOUNT_SID` must map to
/// `sms.account_sid`, not `sms.account.sid`.
fn env_provider() -> Env {
    Env::prefixed("FRONTDESK_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("agent_", "agent.", 1)
            .replacen("storage_", "storage.", 1)
            .replacen("calendar_", "calendar.", 1)
            .replacen("sms_", "sms.", 1)
            .replacen("scheduler_", "scheduler.", 1);
        mapped.into()
    })
}
