use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};

use crate::adapters::http::dto::{CreateTodoDto, TodoItemDto, UpdateTodoDto};
use crate::adapters::http::error::ApiError;
use crate::application::services::TodoService;
use crate::domain::entities::todo::TodoId;
use crate::domain::repositories::TodoRepository;

/// Builds the Todo router over an injected service. The repository is
/// a type parameter so tests can run the full surface against the
/// in-memory store.
pub fn routes<R: TodoRepository>(service: Arc<TodoService<R>>) -> Router<()> {
  Router::new()
    .route("/todoitems", get(list_todos::<R>))
    .route("/todoitems", post(create_todo::<R>))
    .route("/todoitems/complete", get(list_completed::<R>))
    .route("/todoitems/:id", get(get_todo::<R>))
    .route("/todoitems/:id", put(update_todo::<R>))
    .route("/todoitems/:id", delete(delete_todo::<R>))
    .with_state(service)
}

async fn list_todos<R: TodoRepository>(
  State(service): State<Arc<TodoService<R>>>,
) -> Result<Json<Vec<TodoItemDto>>, ApiError> {
  let todos = service.list_todos().await?;
  Ok(Json(todos.into_iter().map(TodoItemDto::from).collect()))
}

async fn list_completed<R: TodoRepository>(
  State(service): State<Arc<TodoService<R>>>,
) -> Result<Json<Vec<TodoItemDto>>, ApiError> {
  let todos = service.list_completed().await?;
  Ok(Json(todos.into_iter().map(TodoItemDto::from).collect()))
}

async fn get_todo<R: TodoRepository>(
  Path(id): Path<TodoId>,
  State(service): State<Arc<TodoService<R>>>,
) -> Result<Json<TodoItemDto>, ApiError> {
  let todo = service.get_todo(id).await?;
  Ok(Json(TodoItemDto::from(todo)))
}

async fn create_todo<R: TodoRepository>(
  State(service): State<Arc<TodoService<R>>>,
  Json(payload): Json<CreateTodoDto>,
) -> Result<impl IntoResponse, ApiError> {
  let todo = service.create_todo(payload.name, payload.is_complete).await?;
  let location = format!("/todoitems/{}", todo.id);
  Ok((
    StatusCode::CREATED,
    [(header::LOCATION, location)],
    Json(TodoItemDto::from(todo)),
  ))
}

async fn update_todo<R: TodoRepository>(
  Path(id): Path<TodoId>,
  State(service): State<Arc<TodoService<R>>>,
  Json(payload): Json<UpdateTodoDto>,
) -> Result<StatusCode, ApiError> {
  service.update_todo(id, payload.name, payload.is_complete).await?;
  Ok(StatusCode::NO_CONTENT)
}

async fn delete_todo<R: TodoRepository>(
  Path(id): Path<TodoId>,
  State(service): State<Arc<TodoService<R>>>,
) -> Result<Json<TodoItemDto>, ApiError> {
  let todo = service.delete_todo(id).await?;
  Ok(Json(TodoItemDto::from(todo)))
}
