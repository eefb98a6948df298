//! Error Types for Series Ingestion and Queries
//!
//! ## Design Philosophy
//!
//! Only two things can go wrong with a temperature series:
//!
//! 1. **Bad input**: a measurement below absolute zero was submitted. The
//!    offending call performs no mutation at all.
//! 2. **No data**: an aggregate was requested from an empty series. There is
//!    no meaningful mean or minimum of nothing.
//!
//! Filters (`find_less_than`, `find_greater_or_equal`, `find_in_range`)
//! never fail. "No matches" is a valid answer, so an empty series just
//! yields an empty result.
//!
//! Errors are `Copy` and carry all their context inline, so they can be
//! returned from hot paths and compared in tests without allocation.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use tempseries_core::{SeriesError, SeriesStore};
//!
//! fn ingest(series: &mut SeriesStore, batch: &[f64]) {
//!     match series.append(batch) {
//!         Ok(len) => {
//!             // Batch stored, series now holds `len` readings
//!         }
//!         Err(SeriesError::InvalidMeasurement { index, .. }) => {
//!             // Nothing was stored, the sensor at `index` needs a look
//!         }
//!         Err(SeriesError::EmptySeries) => unreachable!("append never reports an empty series"),
//!     }
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for series operations
pub type SeriesResult<T> = Result<T, SeriesError>;

/// Series errors
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SeriesError {
    /// Measurement strictly below absolute zero
    #[error("Measurement {value} at index {index} is below absolute zero")]
    InvalidMeasurement {
        /// The rejected reading
        value: f64,
        /// Position of the reading within the submitted batch
        index: usize,
    },

    /// Aggregate requested from a series holding no measurements
    #[error("Temperature series is empty")]
    EmptySeries,
}
