//! Protocol bindings for the todo service.
//!
//! This crate exposes the operation layer from `todo-core` over two
//! independent surfaces:
//!
//! - [`rest`] - a conventional REST API (`/todos`, path-addressed)
//! - [`tools`] - a tool/resource invocation protocol for programmatic
//!   callers (`/mcp`, name-addressed, self-describing catalogs)
//!
//! Both are strictly translation layers over the same
//! [`TodoService`](todo_core::TodoService) instance, so the business rules
//! are enforced identically regardless of entry path. [`ApiServer`]
//! assembles the combined router and serves it.
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use todo_core::InMemoryTodoRepository;
//! use todo_protocol::ApiServer;
//!
//! async fn start_server() -> Result<(), Box<dyn std::error::Error>> {
//!     let repository = Arc::new(InMemoryTodoRepository::new());
//!     let server = ApiServer::new(repository);
//!     server.serve("127.0.0.1:8000").await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod rest;
pub mod server;
pub mod tools;

pub use error::{ErrorBody, FailureKind, RestError, ToolFailure};
pub use rest::rest_router;
pub use server::ApiServer;
pub use tools::tool_router;

// Re-export core types for external consumers
pub use todo_core::{
    NewTodo, Todo, TodoError, TodoRepository, TodoService, TodoSummary, UpdateTodo,
};
