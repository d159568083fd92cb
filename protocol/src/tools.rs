//! Tool/resource binding.
//!
//! Named-tool and named-resource endpoints, mounted under `/mcp` by the
//! server. Both catalogs are generated from the operation registry; the
//! handlers themselves hold no operation knowledge beyond forwarding the
//! name and payload to the operation layer.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Map, Value};
use tracing::debug;

use todo_core::{registry, TodoRepository, TodoService};

use crate::error::ToolFailure;

/// Service name advertised in the info document
pub const SERVICE_NAME: &str = "todo-tool-server";

/// Service description advertised in the info document
pub const SERVICE_DESCRIPTION: &str = "Tool server for managing todo items";

/// Build the tool/resource router (mounted under `/mcp`)
pub fn tool_router<R: TodoRepository + 'static>(service: TodoService<R>) -> Router {
    Router::new()
        .route("/", get(service_info))
        .route("/tools", get(list_tools))
        .route("/tools/:name", post(call_tool::<R>))
        .route("/resources", get(list_resources))
        .route("/resources/:name", get(read_resource::<R>))
        .with_state(service)
}

async fn service_info() -> Json<Value> {
    let tools: Vec<&str> = registry::tools().map(|op| op.name).collect();
    let resources: Vec<&str> = registry::resources().map(|op| op.name).collect();

    Json(json!({
        "name": SERVICE_NAME,
        "description": SERVICE_DESCRIPTION,
        "tools": tools,
        "resources": resources,
    }))
}

async fn list_tools() -> Json<Value> {
    let mut tools = Map::new();
    for op in registry::tools() {
        tools.insert(
            op.name.to_string(),
            json!({
                "description": op.description,
                "parameters": op.parameters_json(),
            }),
        );
    }
    Json(json!({ "tools": tools }))
}

async fn list_resources() -> Json<Value> {
    let mut resources = Map::new();
    for op in registry::resources() {
        resources.insert(
            op.name.to_string(),
            json!({ "description": op.description }),
        );
    }
    Json(json!({ "resources": resources }))
}

async fn call_tool<R: TodoRepository>(
    State(service): State<TodoService<R>>,
    Path(name): Path<String>,
    args: Option<Json<Value>>,
) -> Result<Json<Value>, ToolFailure> {
    let Json(args) = args.unwrap_or(Json(json!({})));
    debug!(tool = %name, "tool invocation");

    let result = service.invoke_tool(&name, args).await?;
    Ok(Json(json!({ "result": result })))
}

async fn read_resource<R: TodoRepository>(
    State(service): State<TodoService<R>>,
    Path(name): Path<String>,
) -> Result<Json<Value>, ToolFailure> {
    debug!(resource = %name, "resource read");

    let result = service.read_resource(&name).await?;
    Ok(Json(json!({ "result": result })))
}
