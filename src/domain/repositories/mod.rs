pub mod todo_repository;

pub use todo_repository::{RepositoryError, TodoRepository};
