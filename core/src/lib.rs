//! Todo Core Library
//!
//! This crate provides the domain models, business logic and trait
//! interfaces for the todo service. Both protocol crates depend on the
//! types and interfaces defined here.
//!
//! # Architecture
//!
//! - [`models`] - Core domain models (Todo, NewTodo, UpdateTodo, TodoSummary)
//! - [`error`] - Error types and result handling
//! - [`repository`] - Repository trait for storage
//! - [`memory`] - The in-memory repository implementation
//! - [`registry`] - Static catalog of the exposed operations
//! - [`service`] - Protocol-agnostic operation layer
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use todo_core::{InMemoryTodoRepository, NewTodo, TodoService};
//!
//! # async fn example() -> todo_core::Result<()> {
//! let service = TodoService::new(Arc::new(InMemoryTodoRepository::new()));
//! let todo = service.create(NewTodo::new("Learn Rust")).await?;
//! assert_eq!(todo.id, 1);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod memory;
pub mod models;
pub mod registry;
pub mod repository;
pub mod service;

// Re-export commonly used types at the crate root for convenience
pub use error::{Result, TodoError};
pub use memory::{IdAllocator, InMemoryTodoRepository};
pub use models::{NewTodo, Todo, TodoSummary, UpdateTodo};
pub use registry::{OperationKind, OperationSpec, ParamSpec, ParamType, OPERATIONS};
pub use repository::TodoRepository;
pub use service::{TodoIdArgs, TodoService, UpdateTodoArgs};

/// Current version of the core crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Current crate name
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::const_is_empty)]
    fn test_crate_constants() {
        assert!(!VERSION.is_empty());
        assert_eq!(CRATE_NAME, "todo-core");
    }

    #[test]
    fn test_re_exports() {
        let error = TodoError::not_found_id(1);
        assert!(error.is_not_found());

        assert_eq!(OPERATIONS.len(), 6);
    }
}
