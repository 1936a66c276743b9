//! Dice request/response DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Create Dice request
///
/// Any `id` in the payload is ignored. A missing or null `size` reads as `0`
/// and is rejected by the size check, as are values wider than `i32`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateDiceRequest {
    #[serde(default)]
    #[schema(minimum = 1, maximum = 1000, example = 6)]
    pub size: Option<i64>,
}

impl CreateDiceRequest {
    /// Requested size, if it is one a Dice may have
    pub fn valid_size(&self) -> Option<i32> {
        i32::try_from(self.size.unwrap_or(0))
            .ok()
            .filter(|size| dice::is_valid_size(*size))
    }
}

/// Dice response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DiceResponse {
    pub id: Option<i32>,
    pub size: i32,
}

impl From<dice::Dice> for DiceResponse {
    fn from(dice: dice::Dice) -> Self {
        Self {
            id: dice.id,
            size: dice.size,
        }
    }
}

/// Roll response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RollResponse {
    pub id: i32,
    pub roll: i32,
}

impl From<dice::RollResult> for RollResponse {
    fn from(result: dice::RollResult) -> Self {
        Self {
            id: result.id,
            roll: result.roll,
        }
    }
}
