use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::repositories::todo_repository::RepositoryError;

/// HTTP-facing error for the Todo handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
  /// 404, empty body.
  #[error("not found")]
  NotFound,
  /// 409, the create body collided with an existing id.
  #[error("conflict: {0}")]
  Conflict(String),
  /// 503, the storage layer could not be reached.
  #[error("storage unavailable: {0}")]
  Unavailable(String),
}

#[derive(Serialize)]
struct ErrorBody {
  message: String,
}

impl From<RepositoryError> for ApiError {
  fn from(err: RepositoryError) -> Self {
    match err {
      RepositoryError::NotFound(_) => Self::NotFound,
      RepositoryError::Duplicate(id) => Self::Conflict(format!("todo {id} already exists")),
      RepositoryError::Unavailable(source) => Self::Unavailable(source.to_string()),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      Self::NotFound => StatusCode::NOT_FOUND.into_response(),
      Self::Conflict(message) => {
        (StatusCode::CONFLICT, Json(ErrorBody { message })).into_response()
      }
      Self::Unavailable(message) => {
        tracing::error!(error = %message, "storage unavailable");
        (
          StatusCode::SERVICE_UNAVAILABLE,
          Json(ErrorBody { message: "storage unavailable".to_string() }),
        )
          .into_response()
      }
    }
  }
}
