pub mod memory_repository;
pub mod postgres_repository;

pub use memory_repository::InMemoryTodoRepository;
pub use postgres_repository::PostgresTodoRepository;
