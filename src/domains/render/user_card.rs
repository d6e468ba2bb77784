//! User profile card renderer.

use crate::domains::data::UserRecord;

/// Render a standalone profile card page for one user.
pub fn render_user_card(user: &UserRecord) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>User Profile</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background: #f5f5f5;
            padding: 20px;
            display: flex;
            justify-content: center;
            align-items: center;
            min-height: 100vh;
        }}
        .user-card {{
            background: white;
            border-radius: 16px;
            padding: 40px;
            max-width: 400px;
            box-shadow: 0 4px 12px rgba(0,0,0,0.1);
            text-align: center;
        }}
        .avatar {{
            width: 120px;
            height: 120px;
            border-radius: 50%;
            margin: 0 auto 20px;
            overflow: hidden;
        }}
        .avatar img {{ width: 100%; height: 100%; object-fit: cover; }}
        .name {{ font-size: 28px; font-weight: bold; margin-bottom: 8px; }}
        .role {{ color: #666; font-size: 16px; margin-bottom: 20px; }}
        .info-row {{
            display: flex;
            justify-content: space-between;
            padding: 12px 0;
            border-top: 1px solid #eee;
        }}
        .info-label {{ color: #888; font-size: 14px; }}
        .info-value {{ font-weight: 500; }}
        .status {{
            display: inline-block;
            padding: 6px 16px;
            border-radius: 20px;
            font-size: 14px;
            font-weight: 500;
            background: #10b981;
            color: white;
            margin-top: 15px;
        }}
    </style>
</head>
<body>
    <div class="user-card">
        <div class="avatar">
            <img src="{avatar}" alt="{name}">
        </div>
        <div class="name">{name}</div>
        <div class="role">{role}</div>
        <div class="info-row">
            <span class="info-label">Email:</span>
            <span class="info-value">{email}</span>
        </div>
        <div class="info-row">
            <span class="info-label">User ID:</span>
            <span class="info-value">{id}</span>
        </div>
        <div class="info-row">
            <span class="info-label">Joined:</span>
            <span class="info-value">{joined}</span>
        </div>
        <div class="status">{status}</div>
    </div>
</body>
</html>
"#,
        avatar = user.avatar,
        name = user.name,
        role = user.role,
        email = user.email,
        id = user.id,
        joined = user.joined,
        status = user.status.to_uppercase(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::data::DataStore;

    #[test]
    fn test_render_user_card() {
        let store = DataStore::new();
        let user = store.user("user_002").unwrap();
        let html = render_user_card(user);
        assert!(html.contains("Bob Smith"));
        assert!(html.contains("bob@example.com"));
        assert!(html.contains("user_002"));
        assert!(html.contains("ACTIVE"));
    }
}
