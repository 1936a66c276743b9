//! In-memory implementation of DiceRepository
//!
//! Process-local store with auto-increment ids starting at 1.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use dice::{Dice, DiceRepository, DomainError};

#[derive(Debug)]
struct Store {
    // Wider than ids so running past i32::MAX is detectable
    next_id: i64,
    dices: BTreeMap<i32, i32>,
}

/// In-memory implementation of DiceRepository
#[derive(Debug)]
pub struct InMemoryDiceRepository {
    store: RwLock<Store>,
}

impl InMemoryDiceRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                next_id: 1,
                dices: BTreeMap::new(),
            }),
        }
    }
}

impl Default for InMemoryDiceRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DiceRepository for InMemoryDiceRepository {
    async fn save(&self, dice: &Dice) -> Result<Dice, DomainError> {
        let mut store = self.store.write().await;

        let id = match dice.id {
            Some(id) => id,
            None => i32::try_from(store.next_id)
                .map_err(|_| DomainError::Repository("Dice id sequence exhausted".to_string()))?,
        };
        // Ids handed out later never collide with explicitly saved ones
        store.next_id = store.next_id.max(i64::from(id) + 1);
        store.dices.insert(id, dice.size);

        Ok(Dice::with_id(id, dice.size))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Dice>, DomainError> {
        let store = self.store.read().await;
        Ok(store.dices.get(&id).map(|size| Dice::with_id(id, *size)))
    }

    async fn find_all(&self) -> Result<Vec<Dice>, DomainError> {
        let store = self.store.read().await;
        Ok(store
            .dices
            .iter()
            .map(|(id, size)| Dice::with_id(*id, *size))
            .collect())
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), DomainError> {
        let mut store = self.store.write().await;
        store
            .dices
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found("Dice", id))
    }

    async fn delete_all(&self) -> Result<(), DomainError> {
        // Ids keep counting up, as a database sequence would
        self.store.write().await.dices.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_assigns_increasing_ids() {
        let repo = InMemoryDiceRepository::new();

        let first = repo.save(&Dice::new(6)).await.unwrap();
        let second = repo.save(&Dice::new(9)).await.unwrap();

        assert_eq!(first, Dice::with_id(1, 6));
        assert_eq!(second, Dice::with_id(2, 9));
    }

    #[tokio::test]
    async fn test_save_with_id_replaces_and_advances_counter() {
        let repo = InMemoryDiceRepository::new();

        repo.save(&Dice::with_id(4, 6)).await.unwrap();
        repo.save(&Dice::with_id(4, 20)).await.unwrap();
        let next = repo.save(&Dice::new(8)).await.unwrap();

        assert_eq!(repo.find_by_id(4).await.unwrap(), Some(Dice::with_id(4, 20)));
        assert_eq!(next.id, Some(5));
    }

    #[tokio::test]
    async fn test_exhausted_sequence_does_not_overwrite() {
        let repo = InMemoryDiceRepository::new();
        repo.save(&Dice::with_id(i32::MAX, 6)).await.unwrap();

        let result = repo.save(&Dice::new(8)).await;

        assert!(matches!(result, Err(DomainError::Repository(_))));
        assert_eq!(
            repo.find_by_id(i32::MAX).await.unwrap(),
            Some(Dice::with_id(i32::MAX, 6))
        );
    }

    #[tokio::test]
    async fn test_find_all_in_id_order() {
        let repo = InMemoryDiceRepository::new();
        repo.save(&Dice::with_id(3, 12)).await.unwrap();
        repo.save(&Dice::with_id(1, 6)).await.unwrap();

        let all = repo.find_all().await.unwrap();

        assert_eq!(all, vec![Dice::with_id(1, 6), Dice::with_id(3, 12)]);
    }

    #[tokio::test]
    async fn test_delete_by_id_missing_is_not_found() {
        let repo = InMemoryDiceRepository::new();

        let result = repo.delete_by_id(5).await;

        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_all_clears_store() {
        let repo = InMemoryDiceRepository::new();
        repo.save(&Dice::new(6)).await.unwrap();
        repo.save(&Dice::new(8)).await.unwrap();

        repo.delete_all().await.unwrap();

        assert!(repo.find_all().await.unwrap().is_empty());
        assert_eq!(repo.find_by_id(1).await.unwrap(), None);
    }
}
