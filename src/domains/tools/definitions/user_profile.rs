//! User profile tool definition.

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

use crate::domains::data::DataStore;
use crate::domains::render::render_user_card;
use crate::domains::tools::definition::{ToolDefinition, ToolOutput};
use crate::domains::tools::schema::{ParameterSpec, ToolArguments};

/// User profile tool - renders a profile card for a given user id.
pub struct UserProfileTool;

impl UserProfileTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_user_profile";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Fetches user data and renders a dynamic user profile card in HTML";

    /// Widget resource this tool's output hydrates.
    pub const WIDGET_URI: &'static str = "ui://widget/user.html";

    /// Build the registry entry for this tool.
    pub fn definition(store: Arc<DataStore>) -> ToolDefinition {
        ToolDefinition::new(
            Self::NAME,
            Self::DESCRIPTION,
            Self::WIDGET_URI,
            vec![
                ParameterSpec::string("user_id")
                    .describe("User ID to fetch profile for")
                    .required(),
            ],
            Box::new(move |args| Self::execute(args, &store)),
        )
    }

    fn execute(args: &ToolArguments, store: &DataStore) -> Result<ToolOutput> {
        let user_id = args
            .get_str("user_id")
            .context("user_id absent after validation")?;
        info!("Rendering profile card for {}", user_id);

        let user = store.user(user_id)?;
        let html = render_user_card(user);

        Ok(ToolOutput::new(
            format!("User Profile for {user_id}"),
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

    fn run(raw: serde_json::Value) -> Result<ToolOutput> {
        let definition = UserProfileTool::definition(Arc::new(DataStore::new()));
        let args = validate_arguments(
            definition.name(),
            definition.schema(),
            raw.as_object().unwrap(),
        )
        .unwrap();
        definition.call(&args)
    }

    #[test]
    fn test_known_user() {
        let output = run(json!({"user_id": "user_001"})).unwrap();
        assert_eq!(output.summary, "User Profile for user_001");
        assert!(output.html.contains("Alice Johnson"));
    }

    #[test]
    fn test_unknown_user_fails() {
        let err = run(json!({"user_id": "user_999"})).unwrap_err();
        assert!(err.to_string().contains("user_999"));
    }

    #[test]
    fn test_schema_requires_user_id() {
        let definition = UserProfileTool::definition(Arc::new(DataStore::new()));
        let err = validate_arguments(
            definition.name(),
            definition.schema(),
            &serde_json::Map::new(),
        )
        .unwrap_err();
        assert_eq!(err.parameter(), Some("user_id"));
    }
}
