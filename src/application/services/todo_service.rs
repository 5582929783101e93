use uuid::Uuid;

use crate::domain::entities::todo::{Todo, TodoId};
use crate::domain::repositories::todo_repository::{RepositoryError, TodoRepository};

/// Thin orchestration layer between the HTTP handlers and the
/// repository. Owns id assignment on create; everything else is a
/// single pass-through call.
pub struct TodoService<R: TodoRepository> {
  repo: R,
}

impl<R: TodoRepository> TodoService<R> {
  pub fn new(repo: R) -> Self {
    Self { repo }
  }

  pub async fn list_todos(&self) -> Result<Vec<Todo>, RepositoryError> {
    self.repo.list_all().await
  }

  pub async fn list_completed(&self) -> Result<Vec<Todo>, RepositoryError> {
    self.repo.list_completed().await
  }

  pub async fn get_todo(&self, id: TodoId) -> Result<Todo, RepositoryError> {
    self.repo.find_by_id(id).await
  }

  /// Creates a record with a fresh server-assigned id. The entity's
  /// `secret` field is internal and starts empty.
  pub async fn create_todo(
    &self,
    name: Option<String>,
    is_complete: bool,
  ) -> Result<Todo, RepositoryError> {
    let todo = Todo {
      id: Uuid::new_v4(),
      name,
      is_complete,
      secret: None,
    };
    self.repo.insert(todo).await
  }

  pub async fn update_todo(
    &self,
    id: TodoId,
    name: Option<String>,
    is_complete: bool,
  ) -> Result<Todo, RepositoryError> {
    self.repo.update(id, name, is_complete).await
  }

  pub async fn delete_todo(&self, id: TodoId) -> Result<Todo, RepositoryError> {
    self.repo.remove(id).await
  }
}
