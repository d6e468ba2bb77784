//! Tool Router - bridges the registry to rmcp for the STDIO transport.
//!
//! One route per registered tool, each delegating to the dispatcher. The
//! route's tool metadata comes from the same schema projection as the
//! descriptor, so the advertised and validated schemas are always the same.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter},
    model::{CallToolResult, Content},
};
use std::sync::Arc;

use super::descriptor::tool_model;
use super::dispatcher::{Dispatcher, InvocationResult};
use super::error::ToolError;

/// Build the tool router with one route per registered tool.
pub fn build_tool_router<S>(dispatcher: Arc<Dispatcher>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    let mut router = ToolRouter::new();
    for definition in dispatcher.registry().list() {
        let tool = tool_model(definition);
        let name = definition.name().to_string();
        let dispatcher = dispatcher.clone();
        router = router.with_route(ToolRoute::new_dyn(tool, move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let dispatcher = dispatcher.clone();
            let name = name.clone();
            async move { to_call_result(dispatcher.invoke(&name, &args)) }.boxed()
        }));
    }
    router
}

/// Map an invocation result into the rmcp call-result shape.
///
/// Validation errors become protocol-level invalid-params errors; handler
/// faults become in-band error results, as the original server reported
/// them.
fn to_call_result(result: InvocationResult) -> Result<CallToolResult, McpError> {
    match result {
        InvocationResult::Success { payload } => {
            Ok(CallToolResult::success(vec![Content::text(payload.to_text())]))
        }
        InvocationResult::Failure { error } => match &error {
            ToolError::HandlerFailure(_) | ToolError::Timeout => Ok(CallToolResult::error(vec![
                Content::text(format!("Error: {error}")),
            ])),
            _ => Err(McpError::invalid_params(error.to_string(), None)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ToolsConfig;
    use crate::domains::data::DataStore;
    use crate::domains::tools::registry::build_registry;

    struct TestServer {}

    fn test_dispatcher() -> Arc<Dispatcher> {
        let registry =
            build_registry(&ToolsConfig::default(), Arc::new(DataStore::new())).unwrap();
        Arc::new(Dispatcher::new(Arc::new(registry)))
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_dispatcher());
        let tools = router.list_all();
        assert_eq!(tools.len(), 3);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"get_dynamic_dashboard"));
        assert!(names.contains(&"get_user_profile"));
        assert!(names.contains(&"get_metrics_table"));
    }

    #[test]
    fn test_router_matches_registry() {
        // The router and the registry must advertise the same tool set.
        let dispatcher = test_dispatcher();
        let registry_names: Vec<String> = dispatcher
            .registry()
            .names()
            .iter()
            .map(|n| n.to_string())
            .collect();

        let router: ToolRouter<TestServer> = build_tool_router(dispatcher);
        let router_names: Vec<_> = router
            .list_all()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }

    #[test]
    fn test_validation_error_maps_to_invalid_params() {
        let result = to_call_result(InvocationResult::Failure {
            error: ToolError::MissingParameter {
                tool: "get_user_profile".into(),
                name: "user_id".into(),
            },
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_handler_failure_maps_to_error_result() {
        let result = to_call_result(InvocationResult::Failure {
            error: ToolError::HandlerFailure("User user_999 not found".into()),
        })
        .unwrap();
        assert!(result.is_error.unwrap_or(false));
    }
}
