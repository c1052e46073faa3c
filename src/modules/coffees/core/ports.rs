// Ports define what the coffees module needs from storage, without
// implementing it.
//
// Responsibilities
// - Describe the repository as a trait so handlers stay independent of the
//   backing store (in-memory today, a database tomorrow).
// - Keep absence a first-class result: a miss is `Ok(None)` or a silent
//   no-op, never an `Err`.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::coffees::core::coffee::Coffee;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("a coffee with id {0} already exists")]
    DuplicateId(String),

    #[error("backend error: {0}")]
    Backend(String),
}

/// Whether an upsert replaced an existing record or fell through to create.
/// The HTTP layer turns this into the 200-vs-201 status signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertOutcome {
    Updated(Coffee),
    Created(Coffee),
}

#[async_trait]
pub trait CoffeeRepository: Send + Sync {
    /// All records, in insertion order.
    async fn list(&self) -> Result<Vec<Coffee>, StorageError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Coffee>, StorageError>;

    /// Stores a new record. A blank id gets a generated one; a
    /// caller-supplied id that is already taken is rejected with
    /// [`StorageError::DuplicateId`].
    async fn create(&self, coffee: Coffee) -> Result<Coffee, StorageError>;

    /// Replaces the record stored under `id` with `coffee` as sent, or
    /// creates a fresh record from `coffee.name` when `id` is absent.
    async fn upsert(&self, id: &str, coffee: Coffee) -> Result<UpsertOutcome, StorageError>;

    /// Removes the record under `id`. Deleting an absent id is a no-op.
    async fn delete_by_id(&self, id: &str) -> Result<(), StorageError>;
}
