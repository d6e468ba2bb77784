//! Metrics table renderer.

use std::fmt::Write;

use crate::domains::data::{MetricKind, MetricsRow};

use super::thousands;

/// Render a metrics series as a styled table page.
pub fn render_metrics_table(rows: &[MetricsRow], kind: MetricKind) -> String {
    let headers: &[&str] = match kind {
        MetricKind::Sales => &["Date", "Revenue", "Orders", "Avg Order Value"],
        MetricKind::Performance => &["Date", "Response Time (ms)", "Requests", "Error Rate (%)"],
        MetricKind::Engagement => &["Date", "Active Users", "Page Views", "Avg Session (s)"],
    };

    let mut html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Metrics Table - {title}</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background: #f5f5f5;
            padding: 20px;
        }}
        .container {{
            max-width: 1000px;
            margin: 0 auto;
            background: white;
            border-radius: 12px;
            padding: 30px;
            box-shadow: 0 2px 8px rgba(0,0,0,0.1);
        }}
        h1 {{ margin-bottom: 25px; color: #333; }}
        table {{ width: 100%; border-collapse: collapse; }}
        th {{
            background: #3b82f6;
            color: white;
            padding: 15px;
            text-align: left;
            font-weight: 600;
        }}
        td {{ padding: 12px 15px; border-bottom: 1px solid #eee; }}
        tr:hover {{ background: #f8f9fa; }}
        tr:last-child td {{ border-bottom: none; }}
    </style>
</head>
<body>
    <div class="container">
        <h1>📊 {title} Metrics</h1>
        <table>
            <thead>
                <tr>
"#,
        title = kind.title(),
    );

    for header in headers {
        let _ = writeln!(html, "                    <th>{}</th>", header);
    }

    html.push_str(
        r#"                </tr>
            </thead>
            <tbody>
"#,
    );

    for row in rows {
        let _ = writeln!(html, "                <tr>{}</tr>", render_row(row));
    }

    html.push_str(
        r#"            </tbody>
        </table>
    </div>
</body>
</html>
"#,
    );

    html
}

fn render_row(row: &MetricsRow) -> String {
    match row {
        MetricsRow::Sales {
            date,
            revenue,
            orders,
            avg_order_value,
        } => format!(
            "<td>{}</td><td>${}</td><td>{}</td><td>${:.2}</td>",
            date,
            thousands(*revenue),
            orders,
            avg_order_value
        ),
        MetricsRow::Performance {
            date,
            response_time_ms,
            requests,
            error_rate,
        } => format!(
            "<td>{}</td><td>{}</td><td>{}</td><td>{:.2}%</td>",
            date,
            response_time_ms,
            thousands(*requests),
            error_rate
        ),
        MetricsRow::Engagement {
            date,
            active_users,
            page_views,
            avg_session_secs,
        } => format!(
            "<td>{}</td><td>{}</td><td>{}</td><td>{}</td>",
            date,
            thousands(*active_users),
            thousands(*page_views),
            avg_session_secs
        ),
    }
}
