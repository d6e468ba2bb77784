//! Metrics table tool definition.

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

use crate::domains::data::{DataStore, MetricKind};
use crate::domains::render::render_metrics_table;
use crate::domains::tools::definition::{ToolDefinition, ToolOutput};
use crate::domains::tools::schema::{ParameterSpec, ToolArguments};

/// Metrics table tool - renders a daily metric series as an HTML table.
pub struct MetricsTableTool;

impl MetricsTableTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_metrics_table";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Fetches metrics data and renders an interactive HTML table";

    /// Widget resource this tool's output hydrates.
    pub const WIDGET_URI: &'static str = "ui://widget/metrics.html";

    /// Build the registry entry for this tool.
    ///
    /// `max_rows` caps the `limit` parameter; out-of-range values are
    /// clamped rather than rejected.
    pub fn definition(store: Arc<DataStore>, max_rows: usize) -> ToolDefinition {
        ToolDefinition::new(
            Self::NAME,
            Self::DESCRIPTION,
            Self::WIDGET_URI,
            vec![
                ParameterSpec::enumeration(
                    "metric_type",
                    &["sales", "performance", "engagement"],
                )
                .describe("Type of metrics to display")
                .default_str("sales"),
                ParameterSpec::integer("limit")
                    .describe("Number of rows to return")
                    .default_int(10),
            ],
            Box::new(move |args| Self::execute(args, &store, max_rows)),
        )
    }

    fn execute(args: &ToolArguments, store: &DataStore, max_rows: usize) -> Result<ToolOutput> {
        let kind: MetricKind = args
            .get_str("metric_type")
            .context("metric_type absent after validation")?
            .parse()?;
        let limit = args
            .get_i64("limit")
            .context("limit absent after validation")?
            .clamp(1, max_rows as i64) as usize;
        info!("Rendering {} metrics table ({} rows)", kind.as_str(), limit);

        let rows = store.metrics(kind, limit);
        let html = render_metrics_table(&rows, kind);

        Ok(ToolOutput::new(
            format!("Metrics Table ({})", kind.title()),
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

    fn run(raw: serde_json::Value, max_rows: usize) -> ToolOutput {
        let definition = MetricsTableTool::definition(Arc::new(DataStore::new()), max_rows);
        let args = validate_arguments(
            definition.name(),
            definition.schema(),
            raw.as_object().unwrap(),
        )
        .unwrap();
        definition.call(&args).unwrap()
    }

    #[test]
    fn test_defaults() {
        let output = run(json!({}), 30);
        assert_eq!(output.summary, "Metrics Table (Sales)");
        assert_eq!(output.html.matches("<tr><td>").count(), 10);
    }

    #[test]
    fn test_explicit_kind_and_limit() {
        let output = run(json!({"metric_type": "engagement", "limit": 5}), 30);
        assert!(output.summary.contains("Engagement"));
        assert_eq!(output.html.matches("<tr><td>").count(), 5);
    }

    #[test]
    fn test_limit_clamped_to_cap() {
        let output = run(json!({"limit": 500}), 30);
        assert_eq!(output.html.matches("<tr><td>").count(), 30);
    }

    #[test]
    fn test_limit_clamped_to_minimum() {
        let output = run(json!({"limit": -3}), 30);
        assert_eq!(output.html.matches("<tr><td>").count(), 1);
    }

    #[test]
    fn test_schema_rejects_unknown_kind() {
        let definition = MetricsTableTool::definition(Arc::new(DataStore::new()), 30);
        let raw = json!({"metric_type": "bogus"});
        let err = validate_arguments(
            definition.name(),
            definition.schema(),
            raw.as_object().unwrap(),
        )
        .unwrap_err();
        assert_eq!(err.kind(), "invalid_value");
    }
}
