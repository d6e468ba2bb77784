//! Dynamic HTML MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server that renders
//! dynamic HTML views (dashboard, user profiles, metrics tables) from a
//! simulated data store, for consumption by an external conversational agent.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling, and the main server
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: Tool registry, schema validation, dispatch, and the interface descriptor
//!   - **data**: Simulated data store with deterministic synthesis
//!   - **render**: Pure HTML renderers for each view
//!   - **resources**: Widget resources (static HTML shells) readable by clients
//!
//! # Example
//!
//! ```rust,no_run
//! use dynamic_html_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
