//! Tools domain module.
//!
//! The registry/dispatch core of the server. A single [`ToolRegistry`]
//! value, built once at startup, is the source of truth for tool names,
//! parameter schemas, and handlers; the dispatcher, the stdio router, and
//! the descriptor generator are all projections of it and cannot drift
//! apart.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `schema.rs` - Parameter specs, validation, JSON Schema projection
//! - `definition.rs` - The `ToolDefinition` value type
//! - `registry.rs` - Ordered registration and lookup
//! - `dispatcher.rs` - Validate-and-route invocation entry point
//! - `descriptor.rs` - Published interface description + rmcp tool models
//! - `router.rs` - rmcp ToolRouter bridge for the STDIO transport
//! - `error.rs` - Tool error taxonomy with stable kinds

pub mod definitions;

mod definition;
mod descriptor;
mod dispatcher;
mod error;
mod registry;
mod router;
mod schema;

pub use definition::{ToolDefinition, ToolHandler, ToolOutput};
pub use descriptor::{Descriptor, DescriptorGenerator, OperationEntry, tool_model};
pub use dispatcher::{Dispatcher, InvocationRequest, InvocationResult};
pub use error::ToolError;
pub use registry::{ToolRegistry, build_registry};
pub use router::build_tool_router;
pub use schema::{ParamType, ParamValue, ParameterSpec, ToolArguments, validate_arguments};
