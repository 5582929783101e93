use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::todo::{Todo, TodoId};
use crate::domain::repositories::todo_repository::{RepositoryError, TodoRepository};

/// In-memory repository over a locked map. Used when no database is
/// configured and throughout the test suite.
#[derive(Default)]
pub struct InMemoryTodoRepository {
  todos: RwLock<HashMap<TodoId, Todo>>,
}

impl InMemoryTodoRepository {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
  async fn find_by_id(&self, id: TodoId) -> Result<Todo, RepositoryError> {
    self
      .todos
      .read()
      .await
      .get(&id)
      .cloned()
      .ok_or(RepositoryError::NotFound(id))
  }

  async fn list_all(&self) -> Result<Vec<Todo>, RepositoryError> {
    Ok(self.todos.read().await.values().cloned().collect())
  }

  async fn list_completed(&self) -> Result<Vec<Todo>, RepositoryError> {
    Ok(
      self
        .todos
        .read()
        .await
        .values()
        .filter(|todo| todo.is_complete)
        .cloned()
        .collect(),
    )
  }

  async fn insert(&self, todo: Todo) -> Result<Todo, RepositoryError> {
    let mut todos = self.todos.write().await;
    if todos.contains_key(&todo.id) {
      return Err(RepositoryError::Duplicate(todo.id));
    }
    todos.insert(todo.id, todo.clone());
    Ok(todo)
  }

  async fn update(
    &self,
    id: TodoId,
    name: Option<String>,
    is_complete: bool,
  ) -> Result<Todo, RepositoryError> {
    let mut todos = self.todos.write().await;
    let todo = todos.get_mut(&id).ok_or(RepositoryError::NotFound(id))?;
    todo.name = name;
    todo.is_complete = is_complete;
    Ok(todo.clone())
  }

  async fn remove(&self, id: TodoId) -> Result<Todo, RepositoryError> {
    self
      .todos
      .write()
      .await
      .remove(&id)
      .ok_or(RepositoryError::NotFound(id))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use uuid::Uuid;

  fn sample(id: TodoId, name: &str, is_complete: bool) -> Todo {
    Todo {
      id,
      name: Some(name.to_string()),
      is_complete,
      secret: None,
    }
  }

  #[tokio::test]
  async fn insert_then_find_returns_matching_record() {
    let repo = InMemoryTodoRepository::new();
    let id = Uuid::new_v4();
    repo.insert(sample(id, "buy milk", false)).await.unwrap();

    let found = repo.find_by_id(id).await.unwrap();
    assert_eq!(found.name.as_deref(), Some("buy milk"));
    assert!(!found.is_complete);
  }

  #[tokio::test]
  async fn insert_rejects_duplicate_id() {
    let repo = InMemoryTodoRepository::new();
    let id = Uuid::new_v4();
    repo.insert(sample(id, "first", false)).await.unwrap();

    let err = repo.insert(sample(id, "second", true)).await.unwrap_err();
    assert!(matches!(err, RepositoryError::Duplicate(dup) if dup == id));
    // The original record is untouched.
    assert_eq!(
      repo.find_by_id(id).await.unwrap().name.as_deref(),
      Some("first")
    );
  }

  #[tokio::test]
  async fn list_completed_is_the_completed_subset_of_list_all() {
    let repo = InMemoryTodoRepository::new();
    repo.insert(sample(Uuid::new_v4(), "done", true)).await.unwrap();
    repo.insert(sample(Uuid::new_v4(), "pending", false)).await.unwrap();
    repo.insert(sample(Uuid::new_v4(), "also done", true)).await.unwrap();

    let all = repo.list_all().await.unwrap();
    let completed = repo.list_completed().await.unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(completed.len(), 2);
    assert!(completed.iter().all(|todo| todo.is_complete));
    for todo in &completed {
      assert!(all.iter().any(|t| t.id == todo.id));
    }
  }

  #[tokio::test]
  async fn update_missing_id_is_not_found_and_creates_nothing() {
    let repo = InMemoryTodoRepository::new();
    let id = Uuid::new_v4();

    let err = repo.update(id, Some("ghost".to_string()), true).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound(_)));
    assert!(repo.list_all().await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn update_overwrites_name_and_flag_in_place() {
    let repo = InMemoryTodoRepository::new();
    let id = Uuid::new_v4();
    repo.insert(sample(id, "draft", false)).await.unwrap();

    let updated = repo.update(id, None, true).await.unwrap();
    assert_eq!(updated.id, id);
    assert_eq!(updated.name, None);
    assert!(updated.is_complete);
    assert_eq!(repo.find_by_id(id).await.unwrap(), updated);
  }

  #[tokio::test]
  async fn remove_returns_last_state_and_second_remove_is_not_found() {
    let repo = InMemoryTodoRepository::new();
    let id = Uuid::new_v4();
    repo.insert(sample(id, "ephemeral", true)).await.unwrap();

    let removed = repo.remove(id).await.unwrap();
    assert_eq!(removed.name.as_deref(), Some("ephemeral"));

    assert!(matches!(
      repo.find_by_id(id).await.unwrap_err(),
      RepositoryError::NotFound(_)
    ));
    assert!(matches!(
      repo.remove(id).await.unwrap_err(),
      RepositoryError::NotFound(_)
    ));
  }
}
