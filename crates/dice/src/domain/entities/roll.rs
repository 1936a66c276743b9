//! RollResult - Outcome of rolling a Dice

use serde::{Deserialize, Serialize};

/// A single draw in `[1, size]` against the Dice identified by `id`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResult {
    pub id: i32,
    pub roll: i32,
}

impl RollResult {
    pub fn new(id: i32, roll: i32) -> Self {
        Self { id, roll }
    }
}
