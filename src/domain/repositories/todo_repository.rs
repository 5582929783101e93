use async_trait::async_trait;

use crate::domain::entities::todo::{Todo, TodoId};

/// Failures surfaced by the persistence gateway.
///
/// "Not found" and "storage unreachable" are distinct conditions and
/// must never be folded into each other.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
  #[error("todo {0} not found")]
  NotFound(TodoId),
  #[error("todo {0} already exists")]
  Duplicate(TodoId),
  #[error("storage unavailable")]
  Unavailable(#[source] anyhow::Error),
}

/// Persistence gateway for Todo records. Handlers never touch storage
/// directly; every read and write goes through this trait.
#[async_trait]
pub trait TodoRepository: Send + Sync + 'static {
  /// Exact-match lookup by id.
  async fn find_by_id(&self, id: TodoId) -> Result<Todo, RepositoryError>;

  /// Unordered snapshot of all live records.
  async fn list_all(&self) -> Result<Vec<Todo>, RepositoryError>;

  /// Same snapshot, filtered to `is_complete == true`.
  async fn list_completed(&self) -> Result<Vec<Todo>, RepositoryError>;

  /// Adds a new record. Ids already present are rejected with
  /// `Duplicate` rather than silently overwritten.
  async fn insert(&self, todo: Todo) -> Result<Todo, RepositoryError>;

  /// Overwrites `name` and `is_complete` in place and returns the new
  /// snapshot. The id is immutable; a missing id is `NotFound`, never
  /// an implicit create.
  async fn update(
    &self,
    id: TodoId,
    name: Option<String>,
    is_complete: bool,
  ) -> Result<Todo, RepositoryError>;

  /// Deletes by id and returns the record's last-known state.
  async fn remove(&self, id: TodoId) -> Result<Todo, RepositoryError>;
}
