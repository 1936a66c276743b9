//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod dice_repository;

pub use dice_repository::*;
