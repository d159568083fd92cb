//! Protocol-agnostic operation layer.
//!
//! [`TodoService`] is the single implementation of the service's operations.
//! Both protocol bindings call into it: the REST binding through the typed
//! methods, the tool binding through the registry-driven [`invoke_tool`] /
//! [`read_resource`] dispatch. Business rules live in the repository and
//! nowhere else, so the two surfaces cannot drift apart.
//!
//! [`invoke_tool`]: TodoService::invoke_tool
//! [`read_resource`]: TodoService::read_resource

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    error::{Result, TodoError},
    models::{NewTodo, Todo, TodoSummary, UpdateTodo},
    registry,
    repository::TodoRepository,
};

/// Tool arguments for operations addressed by id
#[derive(Debug, Clone, Deserialize)]
pub struct TodoIdArgs {
    pub id: u64,
}

/// Tool arguments for `update_todo`: the id plus the partial update payload
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTodoArgs {
    pub id: u64,
    #[serde(flatten)]
    pub updates: UpdateTodo,
}

/// The operation layer shared by both protocol bindings
pub struct TodoService<R> {
    repository: Arc<R>,
}

// Manual impl: the derive would require R: Clone, but only the Arc is cloned
impl<R> Clone for TodoService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
        }
    }
}

impl<R> TodoService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Get a clone of the repository Arc
    pub fn repository(&self) -> Arc<R> {
        self.repository.clone()
    }
}

impl<R: TodoRepository> TodoService<R> {
    pub async fn create(&self, new_todo: NewTodo) -> Result<Todo> {
        self.repository.create(new_todo).await
    }

    pub async fn list(&self) -> Result<Vec<Todo>> {
        self.repository.list().await
    }

    pub async fn get(&self, id: u64) -> Result<Todo> {
        self.repository.get(id).await
    }

    pub async fn update(&self, id: u64, updates: UpdateTodo) -> Result<Todo> {
        self.repository.update(id, updates).await
    }

    pub async fn delete(&self, id: u64) -> Result<Todo> {
        self.repository.delete(id).await
    }

    pub async fn summary(&self) -> Result<TodoSummary> {
        self.repository.summary().await
    }

    pub async fn health_check(&self) -> Result<()> {
        self.repository.health_check().await
    }

    /// Invoke a registered tool by name with a JSON argument payload.
    ///
    /// The name is looked up in the tool catalog (resources are not
    /// invocable here), the payload is validated against the registered
    /// schema, and the call is dispatched to the typed operation. Repository
    /// errors propagate unchanged.
    pub async fn invoke_tool(&self, name: &str, args: Value) -> Result<Value> {
        let spec = registry::find_tool(name).ok_or_else(|| TodoError::unknown_tool(name))?;
        spec.validate_args(&args)?;

        match spec.name {
            "create_todo" => {
                let params: NewTodo = decode_args(args)?;
                let todo = self.repository.create(params).await?;
                encode(&todo)
            }
            "update_todo" => {
                let params: UpdateTodoArgs = decode_args(args)?;
                let todo = self.repository.update(params.id, params.updates).await?;
                encode(&todo)
            }
            "delete_todo" => {
                let params: TodoIdArgs = decode_args(args)?;
                let removed = self.repository.delete(params.id).await?;
                Ok(json!({
                    "message": format!("Todo '{}' deleted", removed.title)
                }))
            }
            "get_todo" => {
                let params: TodoIdArgs = decode_args(args)?;
                let todo = self.repository.get(params.id).await?;
                encode(&todo)
            }
            _ => Err(TodoError::unknown_tool(name)),
        }
    }

    /// Read a registered resource by name. Tools are not readable here.
    pub async fn read_resource(&self, name: &str) -> Result<Value> {
        let spec =
            registry::find_resource(name).ok_or_else(|| TodoError::unknown_resource(name))?;

        match spec.name {
            "list_todos" => {
                let todos = self.repository.list().await?;
                encode(&todos)
            }
            "todo_summary" => {
                let summary = self.repository.summary().await?;
                encode(&summary)
            }
            _ => Err(TodoError::unknown_resource(name)),
        }
    }
}

fn decode_args<T: DeserializeOwned>(args: Value) -> Result<T> {
    serde_json::from_value(args)
        .map_err(|e| TodoError::Validation(format!("Invalid arguments: {e}")))
}

fn encode<T: Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value).map_err(|e| TodoError::Internal(format!("Serialization: {e}")))
}
