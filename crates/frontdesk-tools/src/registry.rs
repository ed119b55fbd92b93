// SPDX-FileCopyrightText: 2026 Frontdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tool trait and registry.
//!
//! The [`ToolRegistry`] manages tool lookup by name, generates the tool
//! definition array for the gateway request, and bounds every invocation
//! with a timeout. Unknown names and timeouts surface as error outcomes,
//! never as turn-fatal errors.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use frontdesk_core::ToolOutcome;
use tracing::warn;

/// Unified interface for receptionist tools.
///
/// `invoke` is infallible at the type level: anything that goes wrong is
/// reported through the outcome's status and message.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Unique name used for lookup and gateway serialization.
    fn name(&self) -> &str;

    /// Human-readable description of what the tool does.
    fn description(&self) -> &str;

    /// JSON Schema describing the tool's input parameters.
    fn parameters_schema(&self) -> serde_json::Value;

    /// Invoke the tool with the parsed JSON arguments from the gateway.
    async fn invoke(&self, args: serde_json::Value) -> ToolOutcome;
}

/// Registry of available tools, indexed by name.
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
    timeout: Duration,
}

impl ToolRegistry {
    /// Creates an empty registry with the given per-invocation timeout.
    pub fn new(timeout: Duration) -> Self {
        Self {
            tools: HashMap::new(),
            timeout,
        }
    }

    /// Registers a tool. The tool is indexed by its `name()`.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Looks up a tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// Execute a tool by name under the registry timeout.
    ///
    /// Unknown tools and timeouts come back as error outcomes so the
    /// gateway can recover within the same turn.
    pub async fn execute(&self, name: &str, args: serde_json::Value) -> ToolOutcome {
        let Some(tool) = self.get(name) else {
            warn!(tool = name, "unknown tool requested");
            return ToolOutcome::error(format!("Unknown tool: {name}"));
        };
        match tokio::time::timeout(self.timeout, tool.invoke(args)).await {
            Ok(outcome) => outcome,
            Err(_) => {
                warn!(tool = name, timeout = ?self.timeout, "tool timed out");
                ToolOutcome::error(format!(
                    "Tool {name} did not finish within {} seconds",
                    self.timeout.as_secs()
                ))
            }
        }
    }

    /// Tool definitions for the gateway request, sorted by name.
    ///
    /// Each definition has the shape:
    /// ```json
    /// {
    ///   "name": "tool_name",
    ///   "description": "What the tool does",
    ///   "input_schema": { ... JSON Schema ... }
    /// }
    /// ```
    pub fn tool_definitions(&self) -> Vec<serde_json::Value> {
        let mut defs: Vec<serde_json::Value> = self
            .tools
            .values()
            .map(|t| {
                serde_json::json!({
                    "name": t.name(),
                    "description": t.description(),
                    "input_schema": t.parameters_schema(),
                })
            })
            .collect();
        defs.sort_by(|a, b| {
            a["name"]
                .as_str()
                .unwrap_or("")
                .cmp(b["name"].as_str().unwrap_or(""))
        });
        defs
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoTool;

    #[async_trait]
    impl Tool for EchoTool {
        fn name(&self) -> &str {
            "echo"
        }

        fn description(&self) -> &str {
            "Echoes the input back"
        }

        fn parameters_schema(&self) -> serde_json::Value {
            serde_json::json!({
                "type": "object",
                "properties": {
                    "message": { "type": "string" }
                },
                "required": ["message"]
            })
        }

        async fn invoke(&self, args: serde_json::Value) -> ToolOutcome {
            ToolOutcome::success(args["message"].as_str().unwrap_or("no message"))
        }
    }

    struct SlowTool;

    #[async_trait]
    impl Tool for SlowTool {
        fn name(&self) -> &str {
            "slow"
        }

        fn description(&self) -> &str {
            "Never finishes in time"
        }

        fn parameters_schema(&self) -> serde_json::Value {
            serde_json::json!({"type": "object", "properties": {}})
        }

        async fn invoke(&self, _args: serde_json::Value) -> ToolOutcome {
            tokio::time::sleep(Duration::from_secs(60)).await;
            ToolOutcome::success("too late")
        }
    }

    fn registry() -> ToolRegistry {
        let mut registry = ToolRegistry::new(Duration::from_millis(50));
        registry.register(Arc::new(EchoTool));
        registry
    }

    #[tokio::test]
    async fn execute_routes_to_registered_tool() {
        let outcome = registry()
            .execute("echo", serde_json::json!({"message": "hi"}))
            .await;
        assert!(outcome.is_success());
        assert_eq!(outcome.message, "hi");
    }

    #[tokio::test]
    async fn unknown_tool_is_inline_error() {
        let outcome = registry().execute("bogus", serde_json::json!({})).await;
        assert!(!outcome.is_success());
        assert!(outcome.message.contains("Unknown tool: bogus"));
    }

    #[tokio::test]
    async fn timeout_is_inline_error() {
        let mut registry = registry();
        registry.register(Arc::new(SlowTool));
        let outcome = registry.execute("slow", serde_json::json!({})).await;
        assert!(!outcome.is_success());
        assert!(outcome.message.contains("did not finish"));
    }

    #[test]
    fn definitions_sorted_by_name() {
        let mut registry = registry();
        registry.register(Arc::new(SlowTool));
        let defs = registry.tool_definitions();
        assert_eq!(defs.len(), 2);
        assert_eq!(defs[0]["name"], "echo");
        assert_eq!(defs[1]["name"], "slow");
        assert_eq!(defs[0]["input_schema"]["type"], "object");
    }
}
