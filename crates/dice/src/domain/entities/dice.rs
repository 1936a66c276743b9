//! Dice - Persisted die with a face count
//!
//! Pure domain entity without infrastructure dependencies.

use serde::{Deserialize, Serialize};

/// Dice - A die identified by a store-assigned id
///
/// `size` is not checked here: candidates are validated at the HTTP boundary
/// with [`crate::is_valid_size`] before they reach the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dice {
    /// Assigned by the repository on save; `None` until persisted
    pub id: Option<i32>,
    pub size: i32,
}

impl Dice {
    /// Create a transient Dice that has not been persisted yet
    pub fn new(size: i32) -> Self {
        Self { id: None, size }
    }

    /// Rebuild a persisted Dice
    pub fn with_id(id: i32, size: i32) -> Self {
        Self { id: Some(id), size }
    }
}
