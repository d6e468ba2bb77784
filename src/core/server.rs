//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the tools and resources domains.
//!
//! ## Tool Architecture
//!
//! Tools live in `domains/tools/definitions/`, one file per tool, and are
//! gathered into a single immutable `ToolRegistry` here at construction.
//! The dispatcher, the stdio ToolRouter, and the interface descriptor are
//! all built from that one registry, so adding a new tool does NOT require
//! modifying this file.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use crate::domains::data::DataStore;
use crate::domains::resources::ResourceService;
use crate::domains::tools::{
    Descriptor, DescriptorGenerator, Dispatcher, build_registry, build_tool_router,
};

#[cfg(feature = "http")]
use crate::domains::tools::{InvocationRequest, InvocationResult, ToolError};

#[cfg(feature = "http")]
use std::time::Duration;

/// Deadline for a single HTTP tool call; expiry maps to the `timeout`
/// error kind, distinct from handler failures.
#[cfg(feature = "http")]
const CALL_TIMEOUT: Duration = Duration::from_secs(10);

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and
/// coordinates the tool dispatch and resource domains.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Validates and routes tool invocations.
    dispatcher: Arc<Dispatcher>,

    /// Lazily generates the published interface descriptor.
    descriptor: Arc<DescriptorGenerator>,

    /// Service for handling resource-related requests.
    resource_service: Arc<ResourceService>,

    /// Tool router for handling tool calls over stdio.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Builds the registry once; fails if a tool name collides or is not
    /// usable as an operation identifier.
    pub fn new(config: Config) -> crate::core::Result<Self> {
        let config = Arc::new(config);
        let store = Arc::new(DataStore::new());

        let registry = Arc::new(build_registry(&config.tools, store)?);
        let dispatcher = Arc::new(Dispatcher::new(registry.clone()));
        let descriptor = Arc::new(DescriptorGenerator::new(
            registry,
            config.server.name.clone(),
            config.server.version.clone(),
        ));

        Ok(Self {
            tool_router: build_tool_router::<Self>(dispatcher.clone()),
            dispatcher,
            descriptor,
            resource_service: Arc::new(ResourceService::new()),
            config,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the published interface descriptor (generated on first use).
    pub fn descriptor(&self) -> Arc<Descriptor> {
        self.descriptor.generate()
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    ///
    /// Derived from the descriptor, so `tools/list` over HTTP and the
    /// descriptor fetch can never disagree.
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.descriptor()
            .operations
            .iter()
            .map(|op| {
                serde_json::json!({
                    "name": op.operation_id,
                    "description": op.description,
                    "inputSchema": op.input_schema
                })
            })
            .collect()
    }

    /// Call a tool (for HTTP transport).
    ///
    /// Runs the synchronous dispatch on a blocking thread under a deadline;
    /// expiry surfaces as the `timeout` error kind.
    #[cfg(feature = "http")]
    pub async fn call_tool(&self, invocation: InvocationRequest) -> InvocationResult {
        let dispatcher = self.dispatcher.clone();

        let call = tokio::task::spawn_blocking(move || dispatcher.dispatch(&invocation));

        match tokio::time::timeout(CALL_TIMEOUT, call).await {
            Ok(Ok(result)) => result,
            Ok(Err(join_error)) => InvocationResult::Failure {
                error: ToolError::HandlerFailure(join_error.to_string()),
            },
            Err(_) => InvocationResult::Failure {
                error: ToolError::Timeout,
            },
        }
    }

    /// List all available resources (for HTTP transport).
    pub async fn list_resources(&self) -> Vec<serde_json::Value> {
        let resources = self.resource_service.list_resources().await;

        resources
            .into_iter()
            .map(|r| {
                serde_json::json!({
                    "uri": r.uri,
                    "name": r.name,
                    "description": r.description,
                    "mimeType": r.mime_type
                })
            })
            .collect()
    }

    /// Read a resource by URI (for HTTP transport).
    pub async fn read_resource(&self, uri: &str) -> Result<serde_json::Value, String> {
        match self.resource_service.read_resource(uri).await {
            Ok(result) => Ok(serde_json::json!({
                "contents": result.contents
            })),
            Err(e) => Err(e.to_string()),
        }
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "This server renders dynamic HTML from live data: a metrics dashboard, \
                 user profile cards, and metrics tables."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        let resources = self.resource_service.list_resources().await;
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resource_service
            .read_resource(&request.uri)
            .await
            .map_err(|e| McpError::resource_not_found(e.to_string(), None))
    }
}
