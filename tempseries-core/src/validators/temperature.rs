//! Temperature floor checks
//!
//! Validates temperature readings against absolute zero.

use crate::{
    constants::physics::ABSOLUTE_ZERO_CELSIUS,
    errors::{SeriesError, SeriesResult},
};

/// Check whether a reading is not below absolute zero
///
/// Only readings strictly below the floor are unphysical. NaN compares
/// false against everything and is let through.
#[inline]
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn is_physical(value: f64) -> bool {
    !(value < ABSOLUTE_ZERO_CELSIUS)
}

/// Check a single reading located at `index` within its batch
pub fn check_floor(value: f64, index: usize) -> SeriesResult<()> {
    if is_physical(value) {
        Ok(())
    } else {
        Err(SeriesError::InvalidMeasurement { value, index })
    }
}

/// Check every reading of a batch, reporting the first violation
pub fn check_batch(values: &[f64]) -> SeriesResult<()> {
    for (index, &value) in values.iter().enumerate() {
        if let Err(err) = check_floor(value, index) {
            log_warn!(
                "Rejected batch of {} readings: {} at index {} is below absolute zero",
                values.len(),
                value,
                index
            );
            return Err(err);
        }
    }
    Ok(())
}
