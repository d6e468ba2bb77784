//! Tool definition value type.
//!
//! A [`ToolDefinition`] binds together the four things that must never
//! drift apart: a tool's name, its parameter schema, its handler, and the
//! widget it renders into. Definitions are built once at startup and are
//! immutable afterwards.

use std::fmt;

use super::schema::{ParameterSpec, ToolArguments};

/// The function bound to a tool; reads the data store, renders markup.
pub type ToolHandler = Box<dyn Fn(&ToolArguments) -> anyhow::Result<ToolOutput> + Send + Sync>;

/// Successful handler output.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// One-line summary shown as the text content of the call result.
    pub summary: String,
    /// The rendered HTML page.
    pub html: String,
    /// URI of the widget resource this page hydrates.
    pub widget_uri: String,
}

impl ToolOutput {
    pub fn new(
        summary: impl Into<String>,
        html: impl Into<String>,
        widget_uri: impl Into<String>,
    ) -> Self {
        Self {
            summary: summary.into(),
            html: html.into(),
            widget_uri: widget_uri.into(),
        }
    }

    /// The plain-text form sent over the stdio transport: summary, blank
    /// line, markup - the same shape the original server emitted.
    pub fn to_text(&self) -> String {
        format!("{}\n\n{}", self.summary, self.html)
    }
}

/// A registered tool: name, description, parameter schema, and handler.
pub struct ToolDefinition {
    name: String,
    description: String,
    widget_uri: String,
    schema: Vec<ParameterSpec>,
    handler: ToolHandler,
}

impl ToolDefinition {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        widget_uri: impl Into<String>,
        schema: Vec<ParameterSpec>,
        handler: ToolHandler,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            widget_uri: widget_uri.into(),
            schema,
            handler,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn widget_uri(&self) -> &str {
        &self.widget_uri
    }

    pub fn schema(&self) -> &[ParameterSpec] {
        &self.schema
    }

    /// Run the handler with fully validated arguments.
    pub fn call(&self, args: &ToolArguments) -> anyhow::Result<ToolOutput> {
        (self.handler)(args)
    }
}

impl fmt::Debug for ToolDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("widget_uri", &self.widget_uri)
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::schema::validate_arguments;

    fn echo_tool() -> ToolDefinition {
        ToolDefinition::new(
            "echo",
            "Echo the name parameter",
            "ui://widget/echo.html",
            vec![ParameterSpec::string("name").required()],
            Box::new(|args| {
                let name = args.get_str("name").unwrap_or("nobody");
                Ok(ToolOutput::new(
                    format!("Hello {name}"),
                    format!("<p>{name}</p>"),
                    "ui://widget/echo.html",
                ))
            }),
        )
    }

    #[test]
    fn test_call_with_validated_args() {
        let tool = echo_tool();
        let raw = serde_json::json!({"name": "world"});
        let args =
            validate_arguments(tool.name(), tool.schema(), raw.as_object().unwrap()).unwrap();
        let output = tool.call(&args).unwrap();
        assert_eq!(output.summary, "Hello world");
        assert!(output.to_text().starts_with("Hello world\n\n"));
    }

    #[test]
    fn test_debug_skips_handler() {
        let tool = echo_tool();
        let repr = format!("{:?}", tool);
        assert!(repr.contains("echo"));
        assert!(!repr.contains("handler"));
    }
}
