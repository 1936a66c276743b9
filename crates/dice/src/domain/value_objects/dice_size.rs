//! Dice size rules - accepted range and the roll algorithm

use rand::Rng;

use crate::domain::errors::DomainError;

/// Smallest accepted face count
pub const MIN_DICE_SIZE: i32 = 1;

/// Largest accepted face count
pub const MAX_DICE_SIZE: i32 = 1000;

/// Check whether `size` may be persisted
pub fn is_valid_size(size: i32) -> bool {
    (MIN_DICE_SIZE..=MAX_DICE_SIZE).contains(&size)
}

/// Roll a die with `size` faces
///
/// Picks uniformly from `0..size` and adds one, so the result lies in
/// `[1, size]`. Fails on a non-positive size instead of panicking inside
/// the RNG.
pub fn roll_die<R: Rng + ?Sized>(size: i32, rng: &mut R) -> Result<i32, DomainError> {
    if size < MIN_DICE_SIZE {
        return Err(DomainError::Validation(format!(
            "Cannot roll a dice with size {}",
            size
        )));
    }

    Ok(rng.random_range(0..size) + 1)
}
