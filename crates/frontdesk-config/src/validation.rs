// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as hour ordering and non-zero intervals.

use thiserror::Error;

use crate::model::FrontdeskConfig;

/// A single configuration problem.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config parse error: {message}")]
    Parse { message: String },

    #[error("invalid config: {message}")]
    Validation { message: String },
}

/// Validate a deserialized configuration for semantic correctness.
///
/// Collects all problems rather than failing fast.
pub fn validate_config(config: &FrontdeskConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.storage.database_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.database_path must not be empty".to_string(),
        });
    }

    if config.agent.max_tool_rounds == 0 {
        errors.push(ConfigError::Validation {
            message: "agent.max_tool_rounds must be at least 1".to_string(),
        });
    }

    if config.agent.tool_timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "agent.tool_timeout_secs must be at least 1".to_string(),
        });
    }

    if config.agent.min_chunk_len == 0 {
        errors.push(ConfigError::Validation {
            message: "agent.min_chunk_len must be at least 1".to_string(),
        });
    }

    if config.calendar.open_hour >= config.calendar.close_hour {
        errors.push(ConfigError::Validation {
            message: format!(
                "calendar.open_hour ({}) must be before calendar.close_hour ({})",
                config.calendar.open_hour, config.calendar.close_hour
            ),
        });
    }

    if config.calendar.close_hour > 24 {
        errors.push(ConfigError::Validation {
            message: format!(
                "calendar.close_hour must be at most 24, got {}",
                config.calendar.close_hour
            ),
        });
    }

    if config.calendar.slot_minutes == 0 || config.calendar.slot_minutes > 24 * 60 {
        errors.push(ConfigError::Validation {
            message: format!(
                "calendar.slot_minutes must be between 1 and 1440, got {}",
                config.calendar.slot_minutes
            ),
        });
    }

    if config.scheduler.reminder_interval_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "scheduler.reminder_interval_secs must be at least 1".to_string(),
        });
    }

    if config.scheduler.review_interval_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "scheduler.review_interval_secs must be at least 1".to_string(),
        });
    }

    if config.scheduler.reminder_window_mins <= 0 {
        errors.push(ConfigError::Validation {
            message: format!(
                "scheduler.reminder_window_mins must be positive, got {}",
                config.scheduler.reminder_window_mins
            ),
        });
    }

    if config.scheduler.reminder_lead_hours <= 0 {
        errors.push(ConfigError::Validation {
            message: format!(
                "scheduler.reminder_lead_hours must be positive, got {}",
                config.scheduler.reminder_lead_hours
            ),
        });
    }

    if config.scheduler.review_lookback_hours <= 0 {
        errors.push(ConfigError::Validation {
            message: format!(
                "scheduler.review_lookback_hours must be positive, got {}",
                config.scheduler.review_lookback_hours
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
