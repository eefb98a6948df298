//! Buffer Sizes and Growth Policy
//!
//! Parameters for the growable measurement buffer backing every series.

// ===== GROWTH POLICY =====

/// Multiplier applied to the current capacity when the buffer is full.
///
/// Doubling keeps the total copy cost of `n` appends at O(n), so each
/// appended element costs amortized O(1):
/// - 1 → 2 → 4 → 8 ... elements
/// - At most `2n` slots allocated for `n` measurements
///
/// Source: standard geometric growth analysis for dynamic arrays
pub const GROWTH_FACTOR: usize = 2;

// ===== CAPACITY HINTS =====

/// Capacity of a series created with `SeriesStore::new()`.
///
/// An empty series allocates nothing until its first append.
pub const DEFAULT_INITIAL_CAPACITY: usize = 0;

/// Capacity hint for a day of readings sampled once a minute.
///
/// - 1440 samples × 8 bytes/sample = ~11KB
/// - Avoids every reallocation for a full day of ingestion
///
/// Source: 24 h × 60 samples/h
pub const DAILY_MINUTE_SAMPLES: usize = 1440;
