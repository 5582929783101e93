use uuid::Uuid;

/// Identifier for Todo records. A single alias so the key variant is a
/// one-line deployment choice.
pub type TodoId = Uuid;

/// Storage-layer shape of a Todo record.
///
/// `secret` lives only on the entity; it is never copied into the
/// wire-facing transfer model.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Todo {
  pub id: TodoId,
  pub name: Option<String>,
  pub is_complete: bool,
  pub secret: Option<String>,
}
