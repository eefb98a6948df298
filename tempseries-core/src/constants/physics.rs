//! Physical Constants for TempSeries
//!
//! Fundamental limits that decide whether a temperature reading can exist
//! at all. Values follow established metrology references.

// ===== FUNDAMENTAL PHYSICS CONSTANTS =====

/// Absolute zero in Celsius (°C).
///
/// The theoretical lower limit of temperature where molecular motion ceases.
/// No measurement below this value is accepted into a series.
///
/// Source: NIST Special Publication 330 (2019)
pub const ABSOLUTE_ZERO_CELSIUS: f64 = -273.15;
