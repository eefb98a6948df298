//! Growable Measurement Buffer with Explicit Capacity
//!
//! ## Overview
//!
//! This module provides the owned storage behind every temperature series.
//! Unlike `Vec`, which hides its growth policy, this buffer keeps the
//! allocated capacity and the logical length as two separate fields and
//! grows by an explicit, documented rule.
//!
//! ## Design Rationale
//!
//! ### Why Not Just `Vec<f64>`?
//!
//! `Vec` does grow geometrically, but its exact policy is an implementation
//! detail of the standard library. A series store wants a predictable one:
//!
//! 1. **Deterministic Capacity**: after any sequence of appends the capacity
//!    is a pure function of the batch sizes, so memory use can be planned.
//! 2. **Batch-Aware Growth**: a large batch jumps straight to the size it
//!    needs instead of doubling several times in a row.
//! 3. **No Leaked Views**: callers only ever see `&[f64]` of the logical
//!    length, never the spare tail.
//!
//! ### Growth Rule
//!
//! ```text
//! new_capacity = max(GROWTH_FACTOR × capacity, len + incoming)
//!
//! capacity 1, append 9  → max(2, 10)  = 10
//! capacity 10, append 1 → max(20, 11) = 20
//! capacity 0, append 3  → max(0, 3)   = 3
//! ```
//!
//! Doubling bounds the total copy work of `n` appends by `O(n)`, so each
//! element costs amortized O(1).
//!
//! ### Memory Layout
//!
//! ```text
//! MeasurementBuffer (len = 3, capacity = 5):
//! ┌──────┬──────┬──────┬──────┬──────┐
//! │ 21.5 │ 22.0 │ 19.8 │  --  │  --  │
//! └──────┴──────┴──────┴──────┴──────┘
//!   0      1      2      3      4
//!  └──── logical ─────┘└── spare ──┘
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use tempseries_core::buffer::MeasurementBuffer;
//!
//! let mut buf = MeasurementBuffer::with_capacity(1);
//! buf.extend_from_slice(&[1.0]);
//! buf.extend_from_slice(&[2.0, 3.0, 4.0]);
//!
//! assert_eq!(buf.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
//! assert_eq!(buf.capacity(), 4);
//! ```

use alloc::{boxed::Box, vec};
use core::fmt;

use crate::constants::buffers::{DEFAULT_INITIAL_CAPACITY, GROWTH_FACTOR};

/// Owned `f64` storage with an explicit capacity field
///
/// ## Internal Invariants
///
/// - `len <= data.len()` (never claim more readings than allocated slots)
/// - Slots `data[len..]` hold no meaningful values and are never exposed
///
/// ## Thread Safety
///
/// Plain owned data. Mutation needs `&mut self`, so sharing across threads
/// requires the usual external synchronization.
#[derive(Clone, Default)]
pub struct MeasurementBuffer {
    /// Allocated slots; `data.len()` is the capacity
    data: Box<[f64]>,

    /// Number of slots holding measurements
    len: usize,
}

/// Capacity after growing a buffer of `current` slots to hold `required`
///
/// ```rust
/// use tempseries_core::buffer::grown_capacity;
///
/// assert_eq!(grown_capacity(4, 5), 8);
/// assert_eq!(grown_capacity(1, 10), 10);
/// ```
pub fn grown_capacity(current: usize, required: usize) -> usize {
    current.saturating_mul(GROWTH_FACTOR).max(required)
}

impl MeasurementBuffer {
    /// Creates an empty buffer without allocating
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_INITIAL_CAPACITY)
    }

    /// Creates an empty buffer with room for `capacity` readings
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: vec![0.0; capacity].into_boxed_slice(),
            len: 0,
        }
    }

    /// Creates a buffer holding an independent copy of `values`
    ///
    /// Capacity matches the input length exactly.
    pub fn from_slice(values: &[f64]) -> Self {
        Self {
            data: Box::from(values),
            len: values.len(),
        }
    }

    /// Get number of stored readings
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if buffer is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get number of allocated slots
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// View the stored readings in insertion order
    pub fn as_slice(&self) -> &[f64] {
        &self.data[..self.len]
    }

    /// Iterate over readings from oldest to newest
    pub fn iter(&self) -> core::slice::Iter<'_, f64> {
        self.as_slice().iter()
    }

    /// Ensures room for `additional` more readings
    pub fn reserve(&mut self, additional: usize) {
        let required = self.len.saturating_add(additional);
        if required <= self.capacity() {
            return;
        }

        let old_capacity = self.capacity();
        let new_capacity = grown_capacity(old_capacity, required);

        let mut data = vec![0.0; new_capacity].into_boxed_slice();
        data[..self.len].copy_from_slice(self.as_slice());
        self.data = data;

        log_debug!(
            "Measurement buffer grown from {} to {} slots ({} in use)",
            old_capacity,
            new_capacity,
            self.len
        );
    }

    /// Appends `values` after the stored readings, growing if needed
    ///
    /// No validation happens here; callers check readings first.
    pub fn extend_from_slice(&mut self, values: &[f64]) {
        if values.is_empty() {
            return;
        }

        self.reserve(values.len());
        let end = self.len + values.len();
        self.data[self.len..end].copy_from_slice(values);
        self.len = end;
    }
}

impl PartialEq for MeasurementBuffer {
    /// Buffers are equal when their stored readings are; spare capacity is ignored
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl fmt::Debug for MeasurementBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MeasurementBuffer")
            .field("values", &self.as_slice())
            .field("capacity", &self.capacity())
            .finish()
    }
}
