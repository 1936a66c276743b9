//! Dice API Routes
//!
//! - /api/v1/dices - Dice listing and creation
//! - /api/v1/dices/:id - Dice lookup and deletion
//! - /api/v1/dices/:id/rolls - Rolling

pub mod dice;
pub mod swagger;
