//! Constants for TempSeries Core
//!
//! Centralized numeric values used by the store and its validators. Each
//! constant carries its unit in the name and a note on where it comes from.
//!
//! Constants are grouped by domain:
//! - **Physics**: the physical floor every measurement must respect
//! - **Buffers**: growth policy and capacity hints for series storage

/// Physical constants and limits based on thermodynamics.
pub mod physics;

/// Growth factor and capacity hints for measurement storage.
pub mod buffers;

// Re-export commonly used constants for convenience
pub use physics::ABSOLUTE_ZERO_CELSIUS;

pub use buffers::{DEFAULT_INITIAL_CAPACITY, GROWTH_FACTOR};
