use async_trait::async_trait;

use crate::{
    error::Result,
    models::{NewTodo, Todo, TodoSummary, UpdateTodo},
};

/// Repository trait for todo storage and retrieval.
///
/// This trait is the seam between the operation layer and the store.
/// Implementations must be thread-safe: mutating operations must be atomic
/// (id allocation together with insertion, existence check together with
/// mutation) and reads must never observe a partially-applied mutation.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Create a new todo
    ///
    /// # Returns
    /// * `Ok(Todo)` - The created todo with assigned ID and timestamp
    /// * `Err(TodoError::Validation)` - If the title is empty
    async fn create(&self, todo: NewTodo) -> Result<Todo>;

    /// Get a todo by its ID
    ///
    /// # Returns
    /// * `Ok(Todo)` - The todo if found
    /// * `Err(TodoError::NotFound)` - If no todo exists with that ID
    async fn get(&self, id: u64) -> Result<Todo>;

    /// List all todos in insertion order. An empty collection is a valid
    /// result, not an error.
    async fn list(&self) -> Result<Vec<Todo>>;

    /// Apply a partial update to an existing todo.
    ///
    /// Only supplied fields change; the whole call fails or the whole call
    /// succeeds. Returns the todo post-mutation.
    ///
    /// # Returns
    /// * `Ok(Todo)` - The updated todo
    /// * `Err(TodoError::NotFound)` - If the todo doesn't exist
    /// * `Err(TodoError::Validation)` - If a supplied title is empty
    async fn update(&self, id: u64, updates: UpdateTodo) -> Result<Todo>;

    /// Remove a todo. No tombstone is kept and the id is never reissued.
    /// Deleting an absent id fails the same way every time.
    ///
    /// # Returns
    /// * `Ok(Todo)` - The removed todo
    /// * `Err(TodoError::NotFound)` - If the todo doesn't exist
    async fn delete(&self, id: u64) -> Result<Todo>;

    /// Compute aggregate counts over the whole store. Never fails on an
    /// empty store: the completion rate is 0.0 exactly.
    async fn summary(&self) -> Result<TodoSummary>;

    /// Repository health for monitoring
    async fn health_check(&self) -> Result<()>;
}
