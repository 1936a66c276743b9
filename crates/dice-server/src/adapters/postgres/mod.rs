//! PostgreSQL Repository Implementations

mod dice_repository;

pub use dice_repository::PgDiceRepository;
