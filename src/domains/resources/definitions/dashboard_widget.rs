//! Dashboard widget resource definition.

use super::ResourceDefinition;
use crate::domains::resources::WIDGET_MIME_TYPE;

/// HTML shell the dashboard tool output hydrates.
pub struct DashboardWidget;

impl ResourceDefinition for DashboardWidget {
    const URI: &'static str = "ui://widget/dashboard.html";
    const NAME: &'static str = "Dynamic Dashboard";
    const DESCRIPTION: &'static str = "Dashboard HTML template";
    const MIME_TYPE: &'static str = WIDGET_MIME_TYPE;

    fn content() -> String {
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Dynamic Dashboard</title>
</head>
<body>
    <div id="dashboard-root"><!-- populated by get_dynamic_dashboard --></div>
</body>
</html>
"#
        .to_string()
    }
}
