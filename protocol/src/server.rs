//! Server assembly.
//!
//! [`ApiServer`] wires one [`TodoService`] into both bindings and serves the
//! combined router: the REST surface at the root, the tool/resource surface
//! nested under `/mcp`, plus the system endpoints (`/`, `/health`).

use std::{net::SocketAddr, sync::Arc};

use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};
use tracing::info;

use todo_core::{TodoRepository, TodoService};

use crate::{error::RestError, rest, tools};

/// HTTP server exposing both protocol surfaces over one repository
pub struct ApiServer<R> {
    service: TodoService<R>,
}

impl<R: TodoRepository + 'static> ApiServer<R> {
    /// Create a new server over the given repository instance
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            service: TodoService::new(repository),
        }
    }

    /// Create the combined router with all endpoints
    pub fn into_router(self) -> Router {
        let system = Router::new()
            .route("/", get(root_handler))
            .route("/health", get(health_handler::<R>))
            .with_state(self.service.clone());

        system
            .merge(rest::rest_router(self.service.clone()))
            .nest("/mcp", tools::tool_router(self.service))
    }

    /// Bind the address and serve until the process is stopped
    pub async fn serve(self, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
        let socket_addr: SocketAddr = addr
            .parse()
            .map_err(|e| format!("Invalid address '{addr}': {e}"))?;

        info!("Starting todo server on {}", socket_addr);

        let listener = tokio::net::TcpListener::bind(socket_addr).await?;
        axum::serve(listener, self.into_router()).await?;

        Ok(())
    }
}

/// Welcome document pointing at the two surfaces
async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Todo service with REST and tool interfaces",
        "todos": "/todos",
        "health": "/health",
        "mcp": "/mcp",
    }))
}

async fn health_handler<R: TodoRepository>(
    State(service): State<TodoService<R>>,
) -> Result<Json<Value>, RestError> {
    service.health_check().await?;
    Ok(Json(json!({ "status": "ok" })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_core::InMemoryTodoRepository;

    #[test]
    fn test_server_creation() {
        let repository = Arc::new(InMemoryTodoRepository::new());
        let server = ApiServer::new(repository);
        let _router = server.into_router();
    }

    #[tokio::test]
    async fn test_serve_rejects_invalid_address() {
        let repository = Arc::new(InMemoryTodoRepository::new());
        let server = ApiServer::new(repository);
        let result = server.serve("not-an-address").await;
        assert!(result.is_err());
    }
}
