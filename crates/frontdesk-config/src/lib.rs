// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the Frontdesk receptionist.
//!
//! Provides TOML configuration parsing with strict validation
//! (`deny_unknown_fields`), XDG file hierarchy lookup, and environment
//! variable overrides.
//!
//! # Usage
//!
//! ```no_run
//! use frontdesk_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("Agent name: {}", config.agent.name);
//! ```

pub mod loader;
pub mod model;
pub mod validation;

pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{
    AgentConfig, CalendarConfig, ClassificationMode, FrontdeskConfig, SchedulerConfig, SmsConfig,
    StorageConfig, StreamingMode,
};
pub use validation::ConfigError;

/// Load configuration from the XDG hierarchy and validate it.
///
/// Returns either a valid `FrontdeskConfig` or the list of collected errors.
pub fn load_and_validate() -> Result<FrontdeskConfig, Vec<ConfigError>> {
    match loader::load_config() {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(vec![ConfigError::Parse {
            message: err.to_string(),
        }]),
    }
}

/// Load configuration from a TOML string and validate it.
///
/// Useful for testing and explicit configuration.
pub fn load_and_validate_str(toml_content: &str) -> Result<FrontdeskConfig, Vec<ConfigError>> {
    match loader::load_config_from_str(toml_content) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(vec![ConfigError::Parse {
            message: err.to_string(),
        }]),
    }
}

/// Render collected config errors as a user-facing report, one per line.
pub fn render_errors(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(|e| format!("  - {e}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_str_surfaces_parse_errors() {
        let errors = load_and_validate_str("[agent]\nbogus_key = 1\n").unwrap_err();
        assert!(matches!(errors[0], ConfigError::Parse { .. }));
    }

    #[test]
    fn render_errors_lists_each_problem() {
        let errors = load_and_validate_str(
            r#"
            [calendar]
            open_hour = 20
            close_hour = 8
            "#,
        )
        .unwrap_err();
        let rendered = render_errors(&errors);
        assert!(rendered.contains("open_hour"));
        assert!(rendered.starts_with("  - "));
    }
}
