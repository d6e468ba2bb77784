//! Dynamic dashboard tool definition.

use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use crate::domains::data::DataStore;
use crate::domains::render::{Theme, render_dashboard};
use crate::domains::tools::definition::{ToolDefinition, ToolOutput};
use crate::domains::tools::schema::{ParameterSpec, ToolArguments};

/// Dashboard tool - renders a live-metrics dashboard page.
pub struct DashboardTool;

impl DashboardTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_dynamic_dashboard";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Fetches live metrics data and renders a dynamic HTML dashboard";

    /// Widget resource this tool's output hydrates.
    pub const WIDGET_URI: &'static str = "ui://widget/dashboard.html";

    /// Build the registry entry for this tool.
    pub fn definition(store: Arc<DataStore>) -> ToolDefinition {
        ToolDefinition::new(
            Self::NAME,
            Self::DESCRIPTION,
            Self::WIDGET_URI,
            vec![
                ParameterSpec::enumeration("theme", &["light", "dark"])
                    .describe("Dashboard theme (light or dark)")
                    .default_str("light"),
            ],
            Box::new(move |args| Self::execute(args, &store)),
        )
    }

    fn execute(args: &ToolArguments, store: &DataStore) -> Result<ToolOutput> {
        let theme = Theme::parse(args.get_str("theme").unwrap_or("light"));
        info!("Rendering dashboard (theme: {})", theme.as_str());

        let data = store.dashboard();
        let html = render_dashboard(&data, theme);

        Ok(ToolOutput::new(
            format!("Dynamic Dashboard (Theme: {})", theme.as_str()),
            html,
            Self::WIDGET_URI,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::schema::validate_arguments;
    use serde_json::json;

    fn run(raw: serde_json::Value) -> ToolOutput {
        let definition = DashboardTool::definition(Arc::new(DataStore::new()));
        let args = validate_arguments(
            definition.name(),
            definition.schema(),
            raw.as_object().unwrap(),
        )
        .unwrap();
        definition.call(&args).unwrap()
    }

    #[test]
    fn test_default_theme() {
        let output = run(json!({}));
        assert_eq!(output.summary, "Dynamic Dashboard (Theme: light)");
        assert!(output.html.contains("background: #ffffff"));
    }

    #[test]
    fn test_dark_theme() {
        let output = run(json!({"theme": "dark"}));
        assert!(output.summary.contains("dark"));
        assert!(output.html.contains("background: #1a1a1a"));
    }

    #[test]
    fn test_widget_uri() {
        let output = run(json!({}));
        assert_eq!(output.widget_uri, "ui://widget/dashboard.html");
    }
}
