// In memory coffee repository.
//
// Responsibilities
// - Own the backing `Vec<Coffee>` behind a single lock; every operation
//   takes the guard once for its whole scan-and-mutate sequence, so
//   concurrent requests observe the same results as serial ones.
// - Exercise handlers without a database; `toggle_offline` makes every
//   operation fail with a backend error for the 5xx paths in tests.

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::modules::coffees::core::coffee::Coffee;
use crate::modules::coffees::core::ports::{CoffeeRepository, StorageError, UpsertOutcome};

#[derive(Default)]
pub struct InMemoryCoffees {
    coffees: RwLock<Vec<Coffee>>,
    is_offline: bool,
}

impl InMemoryCoffees {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), StorageError> {
        if self.is_offline {
            return Err(StorageError::Backend("coffee repository offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl CoffeeRepository for InMemoryCoffees {
    async fn list(&self) -> Result<Vec<Coffee>, StorageError> {
        self.ensure_online()?;
        Ok(self.coffees.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Coffee>, StorageError> {
        self.ensure_online()?;
        Ok(self.coffees.read().await.iter().find(|c| c.id == id).cloned())
    }

    async fn create(&self, mut coffee: Coffee) -> Result<Coffee, StorageError> {
        self.ensure_online()?;
        let mut guard = self.coffees.write().await;
        if coffee.id.is_empty() {
            coffee.id = Uuid::new_v4().to_string();
        } else if guard.iter().any(|c| c.id == coffee.id) {
            return Err(StorageError::DuplicateId(coffee.id));
        }
        guard.push(coffee.clone());
        Ok(coffee)
    }

    async fn upsert(&self, id: &str, coffee: Coffee) -> Result<UpsertOutcome, StorageError> {
        self.ensure_online()?;
        let mut guard = self.coffees.write().await;

        // The scan deliberately keeps going after a hit: should the store
        // ever hold colliding ids, every matching slot is overwritten, not
        // just the first. Observable behavior, kept as-is.
        let mut matched = false;
        for slot in guard.iter_mut() {
            if slot.id == id {
                *slot = coffee.clone();
                matched = true;
            }
        }
        if matched {
            return Ok(UpsertOutcome::Updated(coffee));
        }

        // Miss: neither the path id nor the body id is trusted; the new
        // record gets a generated id.
        let created = Coffee::new(coffee.name);
        guard.push(created.clone());
        Ok(UpsertOutcome::Created(created))
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StorageError> {
        self.ensure_online()?;
        self.coffees.write().await.retain(|c| c.id != id);
        Ok(())
    }
}
