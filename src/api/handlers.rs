//! HTTP handlers for the todo API.
//!
//! - `GET /api/v1/todos` - list all todos
//! - `GET /api/v1/todos/:id` - get one todo
//! - `POST /api/v1/todos` - create a todo
//! - `PATCH|PUT /api/v1/todos/:id` - update a todo
//! - `DELETE /api/v1/todos/:id` - delete a todo

use crate::api::error::ApiError;
use crate::api::AppState;
use crate::error::StoreError;
use crate::types::{Todo, TodoDraft, TodoId, TodoPatch};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

/// Request body for create: `{"todo": {"title": ..., "completed": ...}}`.
///
/// Only `title` and `completed` are read from the nested object; any
/// client-supplied `id` or `created_at` is ignored.
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub todo: TodoDraft,
}

/// Request body for update; both fields optional.
#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    pub todo: TodoPatch,
}

/// Liveness probe.
pub async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}

/// List all todos.
pub async fn list_todos(State(state): State<AppState>) -> Json<Vec<Todo>> {
    Json(state.store.list())
}

/// Get a single todo by id.
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    let id = resolve_id(&id)?;
    let todo = state.store.find(id).map_err(|_| ApiError::not_found())?;
    Ok(Json(todo))
}

/// Create a todo.
pub async fn create_todo(
    State(state): State<AppState>,
    Json(request): Json<CreateTodoRequest>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    match state.store.create(request.todo) {
        Ok(todo) => Ok((StatusCode::CREATED, Json(todo))),
        Err(StoreError::Validation(details)) => {
            Err(ApiError::validation("Failed to create todo", details))
        }
        Err(err) => Err(ApiError::server_error(err.to_string())),
    }
}

/// Update a todo. Unset fields are left unchanged.
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateTodoRequest>,
) -> Result<Json<Todo>, ApiError> {
    let id = resolve_id(&id)?;
    match state.store.update(id, request.todo) {
        Ok(todo) => Ok(Json(todo)),
        Err(StoreError::NotFound(_)) => Err(ApiError::not_found()),
        Err(StoreError::Validation(details)) => {
            Err(ApiError::validation("Failed to update todo", details))
        }
        Err(err) => Err(ApiError::server_error(err.to_string())),
    }
}

/// Delete a todo.
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = resolve_id(&id)?;
    match state.store.delete(id) {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(StoreError::NotFound(_)) => Err(ApiError::not_found()),
        Err(StoreError::Validation(_)) => {
            Err(ApiError::unprocessable("Failed to delete todo"))
        }
        Err(err) => Err(ApiError::server_error(err.to_string())),
    }
}

/// Resolve a path parameter to a todo id.
///
/// A non-numeric parameter cannot match any stored record, so it
/// resolves to not-found rather than bad-request.
fn resolve_id(param: &str) -> Result<TodoId, ApiError> {
    param
        .parse()
        .map(TodoId)
        .map_err(|_| ApiError::not_found())
}
