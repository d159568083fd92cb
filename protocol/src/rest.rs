//! REST binding.
//!
//! Path-addressed resource endpoints under `/todos`. Stateless translation
//! only: HTTP method + path + body map to one operation-layer call, the
//! result serializes as the repository's field set, errors map to status
//! codes through [`RestError`](crate::error::RestError).

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::debug;

use todo_core::{NewTodo, Todo, TodoRepository, TodoService, UpdateTodo};

use crate::error::RestError;

/// Build the `/todos` router
pub fn rest_router<R: TodoRepository + 'static>(service: TodoService<R>) -> Router {
    Router::new()
        .route("/todos", get(list_todos::<R>).post(create_todo::<R>))
        .route(
            "/todos/:id",
            get(get_todo::<R>)
                .put(update_todo::<R>)
                .delete(delete_todo::<R>),
        )
        .with_state(service)
}

async fn list_todos<R: TodoRepository>(
    State(service): State<TodoService<R>>,
) -> Result<Json<Vec<Todo>>, RestError> {
    Ok(Json(service.list().await?))
}

async fn create_todo<R: TodoRepository>(
    State(service): State<TodoService<R>>,
    Json(new_todo): Json<NewTodo>,
) -> Result<(StatusCode, Json<Todo>), RestError> {
    let todo = service.create(new_todo).await?;
    debug!(id = todo.id, "created via REST");
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn get_todo<R: TodoRepository>(
    State(service): State<TodoService<R>>,
    Path(id): Path<u64>,
) -> Result<Json<Todo>, RestError> {
    Ok(Json(service.get(id).await?))
}

async fn update_todo<R: TodoRepository>(
    State(service): State<TodoService<R>>,
    Path(id): Path<u64>,
    Json(updates): Json<UpdateTodo>,
) -> Result<Json<Todo>, RestError> {
    Ok(Json(service.update(id, updates).await?))
}

async fn delete_todo<R: TodoRepository>(
    State(service): State<TodoService<R>>,
    Path(id): Path<u64>,
) -> Result<StatusCode, RestError> {
    service.delete(id).await?;
    debug!(id, "deleted via REST");
    Ok(StatusCode::NO_CONTENT)
}
