//! Core statistics engine for TempSeries
//!
//! Holds an append-only series of temperature measurements and answers
//! aggregate queries over it. Every measurement is checked against absolute
//! zero on the way in, so the stored series is always physically valid.
//!
//! Key properties:
//! - Batch ingestion is atomic: one bad value rejects the whole batch
//! - Amortized O(1) appends through explicit capacity doubling
//! - Query results are owned snapshots, never views into storage
//!
//! ```rust
//! use tempseries_core::{SeriesStore, SeriesError};
//!
//! let mut series = SeriesStore::from_values(&[3.0, -5.0, 1.0, 5.0])?;
//! assert_eq!(series.append(&[10.0, 20.0])?, 6);
//!
//! let stats = series.summary()?;
//! assert_eq!(stats.max, 20.0);
//!
//! // Readings below absolute zero never make it into the series
//! assert!(matches!(
//!     series.append(&[-300.0]),
//!     Err(SeriesError::InvalidMeasurement { .. })
//! ));
//! assert_eq!(series.len(), 6);
//! # Ok::<(), tempseries_core::SeriesError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

#[macro_use]
mod macros;

pub mod buffer;
pub mod constants;
pub mod errors;
pub mod series;
pub mod summary;
pub mod validators;

// Public API
pub use constants::ABSOLUTE_ZERO_CELSIUS;
pub use errors::{SeriesError, SeriesResult};
pub use series::SeriesStore;
pub use summary::SummaryStatistics;

/// Crate version, taken from the manifest
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
