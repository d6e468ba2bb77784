//! Dispatcher - validates and routes tool invocations.
//!
//! One entry point, [`Dispatcher::invoke`]: look the tool up, validate the
//! raw arguments against its schema, run the handler, and wrap whatever
//! happens in a structured [`InvocationResult`]. A handler fault never
//! escapes as an unstructured failure. All operations are synchronous,
//! idempotent reads, so there is nothing to retry or roll back.

use serde::Deserialize;
use serde_json::{Map, Value, json};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use super::definition::ToolOutput;
use super::error::ToolError;
use super::registry::ToolRegistry;
use super::schema::validate_arguments;

/// A single tool invocation as received from a transport.
#[derive(Debug, Clone, Deserialize)]
pub struct InvocationRequest {
    /// Name of the tool to invoke.
    #[serde(alias = "name")]
    pub tool: String,

    /// Raw, unvalidated arguments.
    #[serde(default, alias = "arguments")]
    pub parameters: Map<String, Value>,
}

/// Outcome of one invocation: rendered output or a structured error.
#[derive(Debug)]
pub enum InvocationResult {
    Success { payload: ToolOutput },
    Failure { error: ToolError },
}

impl InvocationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn payload(&self) -> Option<&ToolOutput> {
        match self {
            Self::Success { payload } => Some(payload),
            Self::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&ToolError> {
        match self {
            Self::Failure { error } => Some(error),
            Self::Success { .. } => None,
        }
    }

    /// MCP call-result JSON for the HTTP transport.
    ///
    /// Success carries the summary as text content plus the markup and
    /// widget template in `structuredContent`/`_meta`, mirroring what the
    /// original server returned. Failures carry the error kind and, for
    /// validation errors, the offending parameter name.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Success { payload } => json!({
                "content": [{ "type": "text", "text": payload.summary }],
                "structuredContent": { "html": payload.html },
                "isError": false,
                "_meta": {
                    "openai/outputTemplate": payload.widget_uri,
                    "openai/resultCanProduceWidget": true,
                },
            }),
            Self::Failure { error } => json!({
                "content": [{ "type": "text", "text": format!("Error: {error}") }],
                "isError": true,
                "error": {
                    "kind": error.kind(),
                    "message": error.to_string(),
                    "parameter": error.parameter(),
                },
            }),
        }
    }
}

/// Validates and routes invocations against an immutable registry.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Arc<ToolRegistry>,
}

impl Dispatcher {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Arc<ToolRegistry> {
        &self.registry
    }

    /// Invoke a tool with raw parameters.
    ///
    /// Validation errors are reported before the handler runs; handler
    /// faults are caught and normalized to `HandlerFailure` with the full
    /// cause chain logged and only the display message exposed.
    #[instrument(skip(self, parameters), fields(tool = %name))]
    pub fn invoke(&self, name: &str, parameters: &Map<String, Value>) -> InvocationResult {
        let definition = match self.registry.get(name) {
            Ok(d) => d,
            Err(error) => {
                warn!("Unknown tool requested: {}", name);
                return InvocationResult::Failure { error };
            }
        };

        let args = match validate_arguments(name, definition.schema(), parameters) {
            Ok(args) => args,
            Err(error) => {
                warn!("Argument validation failed: {}", error);
                return InvocationResult::Failure { error };
            }
        };

        match definition.call(&args) {
            Ok(payload) => {
                info!("Tool {} succeeded ({} bytes of markup)", name, payload.html.len());
                InvocationResult::Success { payload }
            }
            Err(cause) => {
                error!("Tool {} handler failed: {:#}", name, cause);
                InvocationResult::Failure {
                    error: ToolError::HandlerFailure(cause.to_string()),
                }
            }
        }
    }

    /// Invoke from a deserialized transport request.
    pub fn dispatch(&self, request: &InvocationRequest) -> InvocationResult {
        self.invoke(&request.tool, &request.parameters)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ToolsConfig;
    use crate::domains::data::DataStore;
    use crate::domains::tools::registry::build_registry;

    fn dispatcher() -> Dispatcher {
        let registry =
            build_registry(&ToolsConfig::default(), Arc::new(DataStore::new())).unwrap();
        Dispatcher::new(Arc::new(registry))
    }

    fn args(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_invoke_unknown_tool() {
        let result = dispatcher().invoke("doesNotExist", &args(json!({})));
        assert_eq!(result.error().unwrap().kind(), "unknown_tool");
    }

    #[test]
    fn test_user_profile_success() {
        let result = dispatcher().invoke("get_user_profile", &args(json!({"user_id": "user_001"})));
        assert!(result.is_success());
        let payload = result.payload().unwrap();
        assert!(payload.summary.contains("user_001"));
        assert!(payload.html.contains("user_001"));
        assert!(!payload.html.is_empty());
    }

    #[test]
    fn test_user_profile_missing_parameter() {
        let result = dispatcher().invoke("get_user_profile", &args(json!({})));
        let error = result.error().unwrap();
        assert_eq!(error.kind(), "missing_parameter");
        assert_eq!(error.parameter(), Some("user_id"));
    }

    #[test]
    fn test_user_profile_handler_failure() {
        let result = dispatcher().invoke("get_user_profile", &args(json!({"user_id": "user_999"})));
        let error = result.error().unwrap();
        assert_eq!(error.kind(), "handler_failure");
        assert!(error.to_string().contains("user_999"));
    }

    #[test]
    fn test_metrics_defaults_reach_handler() {
        // No arguments: the handler should see type=sales, limit=10.
        let result = dispatcher().invoke("get_metrics_table", &args(json!({})));
        assert!(result.is_success());
        let payload = result.payload().unwrap();
        assert!(payload.summary.contains("Sales"));
        assert_eq!(payload.html.matches("<tr><td>").count(), 10);
    }

    #[test]
    fn test_metrics_invalid_enum_value() {
        let result = dispatcher().invoke("get_metrics_table", &args(json!({"metric_type": "bogus"})));
        let error = result.error().unwrap();
        assert_eq!(error.kind(), "invalid_value");
        assert_eq!(error.parameter(), Some("metric_type"));
    }

    #[test]
    fn test_dashboard_defaults_to_light_theme() {
        let result = dispatcher().invoke("get_dynamic_dashboard", &args(json!({})));
        let payload = result.payload().unwrap();
        assert!(payload.summary.contains("light"));
        assert!(payload.html.contains("#ffffff"));
    }

    #[test]
    fn test_success_json_shape() {
        let result = dispatcher().invoke("get_dynamic_dashboard", &args(json!({"theme": "dark"})));
        let value = result.to_json();
        assert_eq!(value["isError"], false);
        assert!(value["structuredContent"]["html"].as_str().unwrap().contains("#1a1a1a"));
        assert_eq!(value["_meta"]["openai/outputTemplate"], "ui://widget/dashboard.html");
    }

    #[test]
    fn test_failure_json_shape() {
        let result = dispatcher().invoke("get_user_profile", &args(json!({})));
        let value = result.to_json();
        assert_eq!(value["isError"], true);
        assert_eq!(value["error"]["kind"], "missing_parameter");
        assert_eq!(value["error"]["parameter"], "user_id");
    }

    #[test]
    fn test_dispatch_from_request() {
        let request: InvocationRequest = serde_json::from_value(json!({
            "name": "get_user_profile",
            "arguments": { "user_id": "user_002" }
        }))
        .unwrap();
        let result = dispatcher().dispatch(&request);
        assert!(result.is_success());
    }
}
