use serde::{Deserialize, Serialize};

use crate::domain::entities::todo::{Todo, TodoId};

/// Wire-facing projection of a Todo entity: a strict subset of the
/// entity's fields. `secret` must never appear here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItemDto {
  pub id: TodoId,
  pub name: Option<String>,
  pub is_complete: bool,
}

impl From<Todo> for TodoItemDto {
  fn from(todo: Todo) -> Self {
    Self {
      id: todo.id,
      name: todo.name,
      is_complete: todo.is_complete,
    }
  }
}

/// Create body. Any client-supplied id is ignored; the server assigns
/// one at creation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoDto {
  #[serde(default)]
  pub name: Option<String>,
  #[serde(default)]
  pub is_complete: bool,
}

/// Update body: overwrites `name` and `isComplete` in place.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoDto {
  #[serde(default)]
  pub name: Option<String>,
  #[serde(default)]
  pub is_complete: bool,
}
