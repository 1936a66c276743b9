//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates with repositories.

mod dice_service;

pub use dice_service::DiceService;
