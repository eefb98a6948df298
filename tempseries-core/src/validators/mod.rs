//! Physics-Based Measurement Validation
//!
//! ## Overview
//!
//! A temperature reading is only accepted when it could physically exist.
//! The hard limit is absolute zero: nothing can be colder than -273.15 °C,
//! so anything below it is a sensor fault or a unit mix-up.
//!
//! ## Validation Layers
//!
//! ### 1. Single Value
//! [`check_floor`] rejects one reading when it is strictly below the floor.
//! The floor itself is a valid reading. NaN is never below anything and
//! passes.
//!
//! ### 2. Whole Batch
//! [`check_batch`] walks a batch front to back and stops at the first bad
//! reading. Callers run it before touching any state, which is what makes
//! batch ingestion all-or-nothing.
//!
//! ```rust
//! use tempseries_core::validators::check_batch;
//! use tempseries_core::SeriesError;
//!
//! assert!(check_batch(&[21.5, -40.0, 0.0]).is_ok());
//! assert_eq!(
//!     check_batch(&[1.0, -300.0, 5.0]),
//!     Err(SeriesError::InvalidMeasurement { value: -300.0, index: 1 })
//! );
//! ```

mod temperature;

pub use temperature::{check_batch, check_floor, is_physical};
