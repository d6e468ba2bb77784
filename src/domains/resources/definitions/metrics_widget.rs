//! Metrics table widget resource definition.

use super::ResourceDefinition;
use crate::domains::resources::WIDGET_MIME_TYPE;

/// HTML shell the metrics table tool output hydrates.
pub struct MetricsWidget;

impl ResourceDefinition for MetricsWidget {
    const URI: &'static str = "ui://widget/metrics.html";
    const NAME: &'static str = "Metrics Table";
    const DESCRIPTION: &'static str = "Metrics table template";
    const MIME_TYPE: &'static str = WIDGET_MIME_TYPE;

    fn content() -> String {
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Metrics Table</title>
</head>
<body>
    <div id="metrics-root"><!-- populated by get_metrics_table --></div>
</body>
</html>
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_widget_metadata() {
        assert_eq!(MetricsWidget::URI, "ui://widget/metrics.html");
        assert!(MetricsWidget::content().contains("metrics-root"));
    }
}
