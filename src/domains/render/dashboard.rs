//! Dashboard page renderer.

use std::fmt::Write;

use crate::domains::data::DashboardData;

use super::thousands;

/// Color palette selection for the dashboard page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a validated theme string. Values outside the schema enum never
    /// reach this point, so anything unexpected falls back to light.
    pub fn parse(s: &str) -> Self {
        match s {
            "dark" => Self::Dark,
            _ => Self::Light,
        }
    }
}

/// Render a complete dashboard page from a snapshot.
pub fn render_dashboard(data: &DashboardData, theme: Theme) -> String {
    let (bg_color, text_color, card_bg) = match theme {
        Theme::Light => ("#ffffff", "#333333", "#f8f9fa"),
        Theme::Dark => ("#1a1a1a", "#f0f0f0", "#2d2d2d"),
    };

    let mut html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Dynamic Dashboard</title>
    <style>
        * {{ margin: 0; padding: 0; box-sizing: border-box; }}
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background: {bg_color};
            color: {text_color};
            padding: 20px;
        }}
        .dashboard {{ max-width: 1200px; margin: 0 auto; }}
        .header {{ margin-bottom: 30px; }}
        .header h1 {{ font-size: 32px; margin-bottom: 10px; }}
        .timestamp {{ color: #888; font-size: 14px; }}
        .stats-grid {{
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
            gap: 20px;
            margin-bottom: 30px;
        }}
        .stat-card {{
            background: {card_bg};
            padding: 25px;
            border-radius: 12px;
            box-shadow: 0 2px 8px rgba(0,0,0,0.1);
        }}
        .stat-card h3 {{
            font-size: 14px;
            text-transform: uppercase;
            letter-spacing: 0.5px;
            margin-bottom: 10px;
            opacity: 0.7;
        }}
        .stat-card .value {{ font-size: 36px; font-weight: bold; color: #3b82f6; }}
        .section {{
            background: {card_bg};
            padding: 25px;
            border-radius: 12px;
            margin-bottom: 20px;
            box-shadow: 0 2px 8px rgba(0,0,0,0.1);
        }}
        .section h2 {{ font-size: 20px; margin-bottom: 20px; }}
        .activity-item {{ padding: 15px; border-bottom: 1px solid rgba(0,0,0,0.1); }}
        .activity-item:last-child {{ border-bottom: none; }}
        .activity-user {{ font-weight: bold; margin-bottom: 5px; }}
        .activity-time {{ color: #888; font-size: 12px; }}
        .alert {{ padding: 12px 16px; border-radius: 8px; margin-bottom: 10px; font-size: 14px; }}
        .alert.info {{ background: #dbeafe; color: #1e40af; }}
        .alert.warning {{ background: #fef3c7; color: #92400e; }}
    </style>
</head>
<body>
    <div class="dashboard">
        <div class="header">
            <h1>🚀 Dynamic Dashboard</h1>
            <div class="timestamp">Last updated: {timestamp}</div>
        </div>

        <div class="stats-grid">
            <div class="stat-card">
                <h3>Total Users</h3>
                <div class="value">{total_users}</div>
            </div>
            <div class="stat-card">
                <h3>Active Sessions</h3>
                <div class="value">{active_sessions}</div>
            </div>
            <div class="stat-card">
                <h3>Revenue Today</h3>
                <div class="value">${revenue_today}</div>
            </div>
            <div class="stat-card">
                <h3>Orders Today</h3>
                <div class="value">{orders_today}</div>
            </div>
        </div>

        <div class="section">
            <h2>Recent Activity</h2>
"#,
        bg_color = bg_color,
        text_color = text_color,
        card_bg = card_bg,
        timestamp = data.generated_at.format("%Y-%m-%d %H:%M:%S"),
        total_users = data.stats.total_users,
        active_sessions = data.stats.active_sessions,
        revenue_today = thousands(data.stats.revenue_today),
        orders_today = data.stats.orders_today,
    );

    for activity in &data.recent_activity {
        let _ = write!(
            html,
            r#"            <div class="activity-item">
                <div class="activity-user">{}</div>
                <div>{}</div>
                <div class="activity-time">{}</div>
            </div>
"#,
            activity.user, activity.action, activity.time
        );
    }

    html.push_str(
        r#"        </div>

        <div class="section">
            <h2>System Alerts</h2>
"#,
    );

    for alert in &data.alerts {
        let _ = write!(
            html,
            "            <div class=\"alert {}\">{}</div>\n",
            alert.level.as_str(),
            alert.message
        );
    }

    html.push_str(
        r#"        </div>
    </div>
</body>
</html>
"#,
    );

    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::data::DataStore;

    #[test]
    fn test_theme_parse() {
        assert_eq!(Theme::parse("dark"), Theme::Dark);
        assert_eq!(Theme::parse("light"), Theme::Light);
        assert_eq!(Theme::parse("anything"), Theme::Light);
    }

    #[test]
    fn test_render_light_theme() {
        let data = DataStore::new().dashboard();
        let html = render_dashboard(&data, Theme::Light);
        assert!(html.contains("background: #ffffff"));
        assert!(html.contains("Dynamic Dashboard"));
        assert!(html.contains("Total Users"));
        assert!(html.contains("Alice Johnson"));
    }

    #[test]
    fn test_render_dark_theme() {
        let data = DataStore::new().dashboard();
        let html = render_dashboard(&data, Theme::Dark);
        assert!(html.contains("background: #1a1a1a"));
        assert!(html.contains("color: #f0f0f0"));
    }

    #[test]
    fn test_render_alerts() {
        let data = DataStore::new().dashboard();
        let html = render_dashboard(&data, Theme::Light);
        assert!(html.contains("alert info"));
        assert!(html.contains("alert warning"));
        assert!(html.contains("Database backup pending"));
    }
}
