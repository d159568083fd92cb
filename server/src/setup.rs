use std::sync::Arc;

use todo_core::InMemoryTodoRepository;
use todo_protocol::ApiServer;
use tracing::info;

/// Create the task repository. The store lives for the process lifetime;
/// nothing is persisted.
pub fn create_repository() -> Arc<InMemoryTodoRepository> {
    info!("Creating in-memory todo repository");
    Arc::new(InMemoryTodoRepository::new())
}

/// Create and configure the server over the given repository
pub fn create_server(repository: Arc<InMemoryTodoRepository>) -> ApiServer<InMemoryTodoRepository> {
    info!("Creating API server");
    ApiServer::new(repository)
}

/// Initialize the complete application
pub fn initialize_app() -> ApiServer<InMemoryTodoRepository> {
    let repository = create_repository();
    let server = create_server(repository);
    info!("Application initialized successfully");
    server
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_core::{NewTodo, TodoRepository};

    #[tokio::test]
    async fn test_create_repository_starts_empty() {
        let repository = create_repository();
        assert!(repository.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_initialize_app() {
        let repository = create_repository();
        repository.create(NewTodo::new("seed")).await.unwrap();

        let server = create_server(repository);
        let _router = server.into_router();
    }
}
