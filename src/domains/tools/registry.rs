//! Tool Registry - the single source of truth for the tool set.
//!
//! The registry is an explicit value built once at startup and shared (via
//! `Arc`) with the dispatcher and the descriptor generator. There is no
//! ambient global tool list. Registration order is preserved: it is the
//! order tools appear in the published descriptor and in `tools/list`.

use std::collections::HashMap;
use std::sync::Arc;

use crate::core::config::ToolsConfig;
use crate::domains::data::DataStore;

use super::definition::ToolDefinition;
use super::definitions::{DashboardTool, MetricsTableTool, UserProfileTool};
use super::error::ToolError;

/// Ordered, immutable-after-construction collection of tool definitions.
#[derive(Debug, Default)]
pub struct ToolRegistry {
    tools: Vec<ToolDefinition>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool definition.
    ///
    /// Fails with `DuplicateTool` if the name is taken, and with
    /// `InvalidToolName` if the name cannot serve as a URL-safe operation
    /// identifier in the descriptor.
    pub fn register(&mut self, definition: ToolDefinition) -> Result<(), ToolError> {
        let name = definition.name().to_string();
        if !is_url_safe(&name) {
            return Err(ToolError::InvalidToolName(name));
        }
        if self.index.contains_key(&name) {
            return Err(ToolError::DuplicateTool(name));
        }
        self.index.insert(name, self.tools.len());
        self.tools.push(definition);
        Ok(())
    }

    /// Look up a tool by name.
    pub fn get(&self, name: &str) -> Result<&ToolDefinition, ToolError> {
        self.index
            .get(name)
            .map(|&i| &self.tools[i])
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))
    }

    /// Iterate over all definitions in registration order.
    ///
    /// The descriptor generator consumes this same sequence, so published
    /// operation order is stable across calls.
    pub fn list(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.tools.iter()
    }

    /// All tool names, in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Names double as descriptor operation ids, so they must be URL-safe.
fn is_url_safe(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Build the registry with all tools this server exposes.
///
/// This is the central place where tools are registered. When adding a new
/// tool, create its file in `definitions/` and register it here.
pub fn build_registry(
    config: &ToolsConfig,
    store: Arc<DataStore>,
) -> Result<ToolRegistry, ToolError> {
    let mut registry = ToolRegistry::new();
    registry.register(DashboardTool::definition(store.clone()))?;
    registry.register(UserProfileTool::definition(store.clone()))?;
    registry.register(MetricsTableTool::definition(store, config.max_metric_rows))?;
    Ok(registry)
}
