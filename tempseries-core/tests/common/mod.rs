//! Common fixtures and data generators for integration tests
//!
//! Provides:
//! - The reference series used across the test suite
//! - A deterministic generator for realistic daily temperature curves
//! - Float assertion helpers

#![allow(dead_code)]

use tempseries_core::SeriesStore;

/// Tolerance for comparing computed statistics
pub const EPSILON: f64 = 1e-5;

/// Reference readings: mean 1.0, population deviation sqrt(14)
pub const REFERENCE_READINGS: [f64; 4] = [3.0, -5.0, 1.0, 5.0];

/// Series built from [`REFERENCE_READINGS`]
pub fn reference_series() -> SeriesStore {
    SeriesStore::from_values(&REFERENCE_READINGS).expect("reference readings are physical")
}

/// Series holding a single reading of 10 °C
pub fn single_reading_series() -> SeriesStore {
    SeriesStore::from_values(&[10.0]).expect("10 °C is physical")
}

/// Assert two floats agree within [`EPSILON`]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

/// Sort readings for order-independent comparison
pub fn sorted(mut values: Vec<f64>) -> Vec<f64> {
    values.sort_by(|a, b| a.partial_cmp(b).expect("no NaN in a series"));
    values
}

/// Deterministic generator for outdoor temperature curves
///
/// Simulates a diurnal sine cycle plus pseudo-random noise so test data is
/// realistic but reproducible.
pub struct TemperatureGenerator {
    seed: u32,
}

impl TemperatureGenerator {
    /// Create generator with a fixed seed
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }

    /// Generate `hours × samples_per_hour` readings around `base_temp`
    pub fn daily_curve(&mut self, base_temp: f64, hours: u32, samples_per_hour: u32) -> Vec<f64> {
        let total = hours * samples_per_hour;
        (0..total)
            .map(|i| {
                let hours_elapsed = i as f64 / samples_per_hour as f64;
                let diurnal = 5.0 * (2.0 * std::f64::consts::PI * hours_elapsed / 24.0).sin();
                base_temp + diurnal + self.noise(0.5)
            })
            .collect()
    }

    /// Uniform noise in `[-amplitude, amplitude)`
    fn noise(&mut self, amplitude: f64) -> f64 {
        (self.next_float() * 2.0 - 1.0) * amplitude
    }

    /// Linear congruential step mapped to `[0, 1)`
    fn next_float(&mut self) -> f64 {
        self.seed = self.seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        (self.seed >> 8) as f64 / (1u32 << 24) as f64
    }
}
