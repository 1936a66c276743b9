//! Dice Domain Library
//!
//! Core domain types and interfaces for the dice service.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business entities and rules
//!   - `entities/`: Core domain models (Dice, RollResult)
//!   - `value_objects/`: Size range rules and the roll algorithm
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use dice::{is_valid_size, Dice, DiceRepository};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    is_valid_size, roll_die, Dice, DomainError, RollResult, MAX_DICE_SIZE, MIN_DICE_SIZE,
};
pub use ports::DiceRepository;

#[cfg(any(test, feature = "testing"))]
pub use ports::MockDiceRepository;
