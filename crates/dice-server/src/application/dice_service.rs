//! Dice Application Service (Use Case)
//!
//! Orchestrates domain operations for Dice management and rolling.
//! Lookups that miss return `None`; only storage faults surface as errors.

use std::sync::Arc;

use dice::{roll_die, Dice, DiceRepository, DomainError, RollResult};

/// Application service for Dice operations
pub struct DiceService<R: DiceRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: DiceRepository + ?Sized> DiceService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Get all Dice in storage order
    pub async fn list_all(&self) -> Result<Vec<Dice>, DomainError> {
        self.repo.find_all().await
    }

    /// Persist a Dice
    ///
    /// The candidate's size is taken as given; callers check it with
    /// `dice::is_valid_size` first. Any id on the candidate is replaced by
    /// the one the store assigns.
    pub async fn create(&self, candidate: Dice) -> Result<Dice, DomainError> {
        let saved = self.repo.save(&Dice::new(candidate.size)).await?;

        tracing::info!("Created Dice: {:?} (size {})", saved.id, saved.size);

        Ok(saved)
    }

    /// Get a Dice by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Dice>, DomainError> {
        self.repo.find_by_id(id).await
    }

    /// Delete a Dice
    ///
    /// Returns `false` without touching storage when the id is unknown.
    pub async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        self.repo.delete_by_id(id).await?;
        tracing::info!("Deleted Dice: {}", id);

        Ok(true)
    }

    /// Roll a Dice
    pub async fn roll(&self, id: i32) -> Result<Option<RollResult>, DomainError> {
        let Some(dice) = self.repo.find_by_id(id).await? else {
            return Ok(None);
        };

        let roll = roll_die(dice.size, &mut rand::rng())?;
        tracing::info!("Rolled Dice {}: {} of {}", id, roll, dice.size);

        Ok(Some(RollResult::new(id, roll)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dice::MockDiceRepository;
    use mockall::predicate::eq;

    fn service(repo: MockDiceRepository) -> DiceService<MockDiceRepository> {
        DiceService::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_list_all_returns_storage_order() {
        let mut repo = MockDiceRepository::new();
        repo.expect_find_all().times(1).returning(|| {
            Ok(vec![
                Dice::with_id(1, 6),
                Dice::with_id(2, 9),
                Dice::with_id(3, 12),
            ])
        });

        let dices = service(repo).list_all().await.unwrap();

        assert_eq!(
            dices,
            vec![Dice::with_id(1, 6), Dice::with_id(2, 9), Dice::with_id(3, 12)]
        );
    }

    #[tokio::test]
    async fn test_list_all_empty_is_not_an_error() {
        let mut repo = MockDiceRepository::new();
        repo.expect_find_all().returning(|| Ok(vec![]));

        assert!(service(repo).list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_saves_once_and_returns_assigned_id() {
        let mut repo = MockDiceRepository::new();
        repo.expect_save()
            .with(eq(Dice::new(9)))
            .times(1)
            .returning(|dice| Ok(Dice::with_id(1, dice.size)));

        let created = service(repo).create(Dice::new(9)).await.unwrap();

        assert_eq!(created.id, Some(1));
        assert_eq!(created.size, 9);
    }

    #[tokio::test]
    async fn test_create_ignores_candidate_id() {
        let mut repo = MockDiceRepository::new();
        repo.expect_save()
            .withf(|dice| dice.id.is_none() && dice.size == 6)
            .times(1)
            .returning(|dice| Ok(Dice::with_id(7, dice.size)));

        let created = service(repo).create(Dice::with_id(99, 6)).await.unwrap();

        assert_eq!(created.id, Some(7));
    }

    #[tokio::test]
    async fn test_create_propagates_storage_fault() {
        let mut repo = MockDiceRepository::new();
        repo.expect_save()
            .returning(|_| Err(DomainError::Repository("connection reset".to_string())));

        let result = service(repo).create(Dice::new(6)).await;

        assert!(matches!(result, Err(DomainError::Repository(_))));
    }

    #[tokio::test]
    async fn test_get_by_id_found() {
        let mut repo = MockDiceRepository::new();
        repo.expect_find_by_id()
            .with(eq(1))
            .times(1)
            .returning(|id| Ok(Some(Dice::with_id(id, 6))));

        let dice = service(repo).get_by_id(1).await.unwrap();

        assert_eq!(dice, Some(Dice::with_id(1, 6)));
    }

    #[tokio::test]
    async fn test_get_by_id_missing_is_none() {
        let mut repo = MockDiceRepository::new();
        repo.expect_find_by_id()
            .with(eq(5))
            .times(1)
            .returning(|_| Ok(None));

        assert_eq!(service(repo).get_by_id(5).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_existing_checks_then_deletes() {
        let mut repo = MockDiceRepository::new();
        repo.expect_find_by_id()
            .with(eq(1))
            .times(1)
            .returning(|id| Ok(Some(Dice::with_id(id, 6))));
        repo.expect_delete_by_id()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(()));

        assert!(service(repo).delete(1).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_missing_never_touches_storage() {
        let mut repo = MockDiceRepository::new();
        repo.expect_find_by_id().with(eq(5)).returning(|_| Ok(None));
        repo.expect_delete_by_id().never();

        assert!(!service(repo).delete(5).await.unwrap());
    }

    #[tokio::test]
    async fn test_roll_existing_dice_within_faces() {
        let mut repo = MockDiceRepository::new();
        repo.expect_find_by_id()
            .with(eq(1))
            .times(1000)
            .returning(|id| Ok(Some(Dice::with_id(id, 6))));
        let service = service(repo);

        for _ in 0..1000 {
            let result = service.roll(1).await.unwrap().unwrap();
            assert_eq!(result.id, 1);
            assert!((1..=6).contains(&result.roll));
        }
    }

    #[tokio::test]
    async fn test_roll_missing_dice_is_none() {
        let mut repo = MockDiceRepository::new();
        repo.expect_find_by_id()
            .with(eq(5))
            .times(1)
            .returning(|_| Ok(None));

        assert_eq!(service(repo).roll(5).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_roll_corrupt_size_is_an_error() {
        let mut repo = MockDiceRepository::new();
        repo.expect_find_by_id()
            .returning(|id| Ok(Some(Dice::with_id(id, 0))));

        let result = service(repo).roll(3).await;

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }
}
