//! Dice Repository Port
//!
//! Abstract interface for Dice persistence operations.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Dice};

/// Repository interface for Dice entities
///
/// Ids are integers assigned by the store with auto-increment semantics.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait DiceRepository: Send + Sync {
    /// Persist a Dice and return it with its assigned id
    async fn save(&self, dice: &Dice) -> Result<Dice, DomainError>;

    /// Find a Dice by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Dice>, DomainError>;

    /// Find all Dice in storage order
    async fn find_all(&self) -> Result<Vec<Dice>, DomainError>;

    /// Delete a Dice by ID
    async fn delete_by_id(&self, id: i32) -> Result<(), DomainError>;

    /// Delete every Dice
    async fn delete_all(&self) -> Result<(), DomainError>;
}
