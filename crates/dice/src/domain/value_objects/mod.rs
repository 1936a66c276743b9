//! Value Objects
//!
//! Rules attached to values rather than identity.

mod dice_size;

pub use dice_size::*;
