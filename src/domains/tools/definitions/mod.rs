//! Tool definitions module.
//!
//! One file per tool. Each tool declares its NAME/DESCRIPTION/WIDGET_URI
//! constants, a `definition()` constructor producing its registry entry,
//! and a private `execute()` with the handler logic.
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file here (e.g., `my_tool.rs`)
//! 2. Define the constants, `definition()`, and `execute()`
//! 3. Export it below
//! 4. Register it in `registry.rs` `build_registry()`
//!
//! The router, descriptor, and HTTP dispatch all derive from the registry,
//! so nothing else needs to change.

mod dashboard;
mod metrics_table;
mod user_profile;

pub use dashboard::DashboardTool;
pub use metrics_table::MetricsTableTool;
pub use user_profile::UserProfileTool;
