// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Frontdesk receptionist.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup.

use serde::{Deserialize, Serialize};

/// Top-level Frontdesk configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FrontdeskConfig {
    /// Receptionist identity and turn-pipeline settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Storage backend settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Business hours and appointment slot settings.
    #[serde(default)]
    pub calendar: CalendarConfig,

    /// Outbound SMS settings.
    #[serde(default)]
    pub sms: SmsConfig,

    /// Background notification scheduler settings.
    #[serde(default)]
    pub scheduler: SchedulerConfig,
}

/// How a finished turn gets its action category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationMode {
    /// Keyword rules over the final response text.
    #[default]
    Keywords,
    /// Category derived from the last tool executed during the turn.
    LastTool,
}

/// How streamed turns are chunked for the transport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamingMode {
    /// Forward gateway tokens as they arrive.
    #[default]
    LiveTokens,
    /// Buffer the full response, then re-chunk on punctuation boundaries.
    Rechunk,
}

/// Receptionist identity and turn-pipeline configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name of the receptionist.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Inline system prompt string. When unset, a built-in receptionist
    /// prompt is used.
    #[serde(default)]
    pub system_prompt: Option<String>,

    /// Maximum gateway round-trips allowed in a single turn.
    #[serde(default = "default_max_tool_rounds")]
    pub max_tool_rounds: u32,

    /// Per-tool execution timeout in seconds.
    #[serde(default = "default_tool_timeout_secs")]
    pub tool_timeout_secs: u64,

    /// Action classification strategy.
    #[serde(default)]
    pub classification: ClassificationMode,

    /// Streaming delivery strategy.
    #[serde(default)]
    pub streaming: StreamingMode,

    /// Minimum chunk length (in characters) for re-chunked streaming.
    #[serde(default = "default_min_chunk_len")]
    pub min_chunk_len: usize,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
            system_prompt: None,
            max_tool_rounds: default_max_tool_rounds(),
            tool_timeout_secs: default_tool_timeout_secs(),
            classification: ClassificationMode::default(),
            streaming: StreamingMode::default(),
            min_chunk_len: default_min_chunk_len(),
        }
    }
}

fn default_agent_name() -> String {
    "frontdesk".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_tool_rounds() -> u32 {
    8
}

fn default_tool_timeout_secs() -> u64 {
    10
}

fn default_min_chunk_len() -> usize {
    10
}

/// Storage backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_database_path")]
    pub database_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
        }
    }
}

fn default_database_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("frontdesk").join("frontdesk.db"))
        .unwrap_or_else(|| std::path::PathBuf::from("frontdesk.db"))
        .to_string_lossy()
        .into_owned()
}

/// Business hours and appointment slot configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarConfig {
    /// First bookable hour of the day (local time, 24h clock).
    #[serde(default = "default_open_hour")]
    pub open_hour: u32,

    /// Hour the business closes; slots end at or before this hour.
    #[serde(default = "default_close_hour")]
    pub close_hour: u32,

    /// Appointment slot length in minutes.
    #[serde(default = "default_slot_minutes")]
    pub slot_minutes: u32,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            open_hour: default_open_hour(),
            close_hour: default_close_hour(),
            slot_minutes: default_slot_minutes(),
        }
    }
}

fn default_open_hour() -> u32 {
    9
}

fn default_close_hour() -> u32 {
    17
}

fn default_slot_minutes() -> u32 {
    30
}

/// Outbound SMS configuration.
///
/// When any credential field is `None`, the messenger degrades to a no-op
/// backend that logs and accepts every send.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SmsConfig {
    /// Twilio account SID.
    #[serde(default)]
    pub account_sid: Option<String>,

    /// Twilio auth token.
    #[serde(default)]
    pub auth_token: Option<String>,

    /// E.164 phone number the business sends from.
    #[serde(default)]
    pub from_number: Option<String>,

    /// Business owner's phone number, target of transfer notifications.
    #[serde(default)]
    pub owner_phone: Option<String>,

    /// Review link appended to post-appointment review texts.
    #[serde(default)]
    pub review_link: Option<String>,
}

impl SmsConfig {
    /// True when all credentials needed for real delivery are present.
    pub fn is_configured(&self) -> bool {
        self.account_sid.is_some() && self.auth_token.is_some() && self.from_number.is_some()
    }
}

/// Background notification scheduler configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SchedulerConfig {
    /// Seconds between reminder sweeps.
    #[serde(default = "default_reminder_interval_secs")]
    pub reminder_interval_secs: u64,

    /// Seconds between review sweeps.
    #[serde(default = "default_review_interval_secs")]
    pub review_interval_secs: u64,

    /// Hours before an appointment that its reminder becomes due.
    #[serde(default = "default_reminder_lead_hours")]
    pub reminder_lead_hours: i64,

    /// Half-width in minutes of the reminder target window.
    #[serde(default = "default_reminder_window_mins")]
    pub reminder_window_mins: i64,

    /// How far back, in hours, completed appointments remain eligible for
    /// a review request.
    #[serde(default = "default_review_lookback_hours")]
    pub review_lookback_hours: i64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            reminder_interval_secs: default_reminder_interval_secs(),
            review_interval_secs: default_review_interval_secs(),
            reminder_lead_hours: default_reminder_lead_hours(),
            reminder_window_mins: default_reminder_window_mins(),
            review_lookback_hours: default_review_lookback_hours(),
        }
    }
}

fn default_reminder_interval_secs() -> u64 {
    300 // 5 minutes
}

fn default_review_interval_secs() -> u64 {
    3600 // 1 hour
}

fn default_reminder_lead_hours() -> i64 {
    24
}

fn default_reminder_window_mins() -> i64 {
    10
}

fn default_review_lookback_hours() -> i64 {
    48
}
