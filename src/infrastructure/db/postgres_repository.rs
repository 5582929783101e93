use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::entities::todo::{Todo, TodoId};
use crate::domain::repositories::todo_repository::{RepositoryError, TodoRepository};

/// Postgres-backed repository over a shared connection pool.
pub struct PostgresTodoRepository {
  pool: PgPool,
}

impl PostgresTodoRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }

  /// Creates the todos table if it does not exist yet.
  pub async fn init(&self) -> Result<(), RepositoryError> {
    sqlx::query(
      "CREATE TABLE IF NOT EXISTS todos (
        id UUID PRIMARY KEY,
        name TEXT,
        is_complete BOOLEAN NOT NULL DEFAULT FALSE,
        secret TEXT
      );",
    )
    .execute(&self.pool)
    .await
    .map_err(unavailable)?;
    Ok(())
  }
}

fn unavailable(err: sqlx::Error) -> RepositoryError {
  RepositoryError::Unavailable(err.into())
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
  async fn find_by_id(&self, id: TodoId) -> Result<Todo, RepositoryError> {
    sqlx::query_as::<_, Todo>(
      "SELECT id, name, is_complete, secret FROM todos WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await
    .map_err(unavailable)?
    .ok_or(RepositoryError::NotFound(id))
  }

  async fn list_all(&self) -> Result<Vec<Todo>, RepositoryError> {
    sqlx::query_as::<_, Todo>("SELECT id, name, is_complete, secret FROM todos")
      .fetch_all(&self.pool)
      .await
      .map_err(unavailable)
  }

  async fn list_completed(&self) -> Result<Vec<Todo>, RepositoryError> {
    sqlx::query_as::<_, Todo>(
      "SELECT id, name, is_complete, secret FROM todos WHERE is_complete = TRUE",
    )
    .fetch_all(&self.pool)
    .await
    .map_err(unavailable)
  }

  async fn insert(&self, todo: Todo) -> Result<Todo, RepositoryError> {
    let result = sqlx::query(
      "INSERT INTO todos (id, name, is_complete, secret) VALUES ($1, $2, $3, $4)
       ON CONFLICT (id) DO NOTHING",
    )
    .bind(todo.id)
    .bind(&todo.name)
    .bind(todo.is_complete)
    .bind(&todo.secret)
    .execute(&self.pool)
    .await
    .map_err(unavailable)?;

    if result.rows_affected() == 0 {
      return Err(RepositoryError::Duplicate(todo.id));
    }
    Ok(todo)
  }

  async fn update(
    &self,
    id: TodoId,
    name: Option<String>,
    is_complete: bool,
  ) -> Result<Todo, RepositoryError> {
    sqlx::query_as::<_, Todo>(
      "UPDATE todos SET name = $2, is_complete = $3 WHERE id = $1
       RETURNING id, name, is_complete, secret",
    )
    .bind(id)
    .bind(&name)
    .bind(is_complete)
    .fetch_optional(&self.pool)
    .await
    .map_err(unavailable)?
    .ok_or(RepositoryError::NotFound(id))
  }

  async fn remove(&self, id: TodoId) -> Result<Todo, RepositoryError> {
    sqlx::query_as::<_, Todo>(
      "DELETE FROM todos WHERE id = $1 RETURNING id, name, is_complete, secret",
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await
    .map_err(unavailable)?
    .ok_or(RepositoryError::NotFound(id))
  }
}
