//! Domain Entities
//!
//! - Dice: Persisted die with a face count
//! - RollResult: Outcome of a single roll, never persisted

mod dice;
mod roll;

pub use dice::*;
pub use roll::*;
