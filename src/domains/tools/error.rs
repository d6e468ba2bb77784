//! Tool-specific error types.
//!
//! Every failure a tool invocation can produce is enumerated here with a
//! stable `kind()` string, so transport adapters can map kinds to their own
//! status codes without parsing messages.

use thiserror::Error;

/// Errors that can occur during tool registration or invocation.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool is not registered.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// A tool with this name is already registered.
    #[error("Duplicate tool name: {0}")]
    DuplicateTool(String),

    /// A tool name is not usable as a URL-safe operation identifier.
    #[error("Invalid tool name: {0}")]
    InvalidToolName(String),

    /// A required parameter with no default was not supplied.
    #[error("Tool {tool}: missing required parameter '{name}'")]
    MissingParameter { tool: String, name: String },

    /// An enum parameter was given a value outside its allowed set.
    #[error("Invalid value '{value}' for parameter '{name}' (allowed: {allowed})")]
    InvalidValue {
        name: String,
        value: String,
        allowed: String,
    },

    /// A parameter value could not be coerced to its declared type.
    #[error("Parameter '{name}' must be {expected}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
    },

    /// The handler itself failed; the original cause is logged, not exposed.
    #[error("Tool execution failed: {0}")]
    HandlerFailure(String),

    /// The invocation exceeded the transport-level deadline.
    #[error("Tool execution timed out")]
    Timeout,
}

impl ToolError {
    /// Stable machine-readable kind for this error.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnknownTool(_) => "unknown_tool",
            Self::DuplicateTool(_) => "duplicate_tool",
            Self::InvalidToolName(_) => "invalid_tool_name",
            Self::MissingParameter { .. } => "missing_parameter",
            Self::InvalidValue { .. } => "invalid_value",
            Self::TypeMismatch { .. } => "type_mismatch",
            Self::HandlerFailure(_) => "handler_failure",
            Self::Timeout => "timeout",
        }
    }

    /// The offending parameter name, for validation errors.
    pub fn parameter(&self) -> Option<&str> {
        match self {
            Self::MissingParameter { name, .. }
            | Self::InvalidValue { name, .. }
            | Self::TypeMismatch { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Whether this error was detected before any handler ran.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::UnknownTool(_)
                | Self::MissingParameter { .. }
                | Self::InvalidValue { .. }
                | Self::TypeMismatch { .. }
        )
    }
}
