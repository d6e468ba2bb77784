//! User profile widget resource definition.

use super::ResourceDefinition;
use crate::domains::resources::WIDGET_MIME_TYPE;

/// HTML shell the user profile tool output hydrates.
pub struct UserWidget;

impl ResourceDefinition for UserWidget {
    const URI: &'static str = "ui://widget/user.html";
    const NAME: &'static str = "User Profile Card";
    const DESCRIPTION: &'static str = "User profile HTML card";
    const MIME_TYPE: &'static str = WIDGET_MIME_TYPE;

    fn content() -> String {
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>User Profile</title>
</head>
<body>
    <div id="user-card-root"><!-- populated by get_user_profile --></div>
</body>
</html>
"#
        .to_string()
    }
}
