//! Dice API Data Models
//!
//! Request/response shapes exchanged over HTTP.

mod dice;

pub use self::dice::*;
