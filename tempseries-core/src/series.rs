//! Temperature series store with validated ingestion
//!
//! [`SeriesStore`] owns an append-only sequence of readings and answers
//! every query over it. Two rules hold for its whole lifetime:
//!
//! - every stored reading is at or above absolute zero
//! - the logical length never exceeds the allocated capacity
//!
//! ## Query Semantics
//!
//! | Operation                 | Empty series      | Result order     |
//! |---------------------------|-------------------|------------------|
//! | `average`, `deviation`    | `EmptySeries`     | scalar           |
//! | `min`, `max`              | `EmptySeries`     | scalar           |
//! | `find_closest_to_*`       | `EmptySeries`     | scalar           |
//! | `find_less_than`          | empty `Vec`       | insertion order  |
//! | `find_greater_or_equal`   | empty `Vec`       | insertion order  |
//! | `find_in_range`           | empty `Vec`       | insertion order  |
//! | `summary`                 | `EmptySeries`     | value object     |
//!
//! Closest-value searches break ties toward the numerically larger reading,
//! so between -0.5 and 0.5 the positive one wins no matter which came first.

use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    buffer::MeasurementBuffer,
    errors::{SeriesError, SeriesResult},
    summary::SummaryStatistics,
    validators::check_batch,
};

/// Append-only series of temperature readings in °C
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<f64>", into = "Vec<f64>")
)]
pub struct SeriesStore {
    values: MeasurementBuffer,
}

impl SeriesStore {
    /// Creates an empty series
    pub fn new() -> Self {
        Self {
            values: MeasurementBuffer::new(),
        }
    }

    /// Creates an empty series with room for `capacity` readings
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: MeasurementBuffer::with_capacity(capacity),
        }
    }

    /// Creates a series holding a copy of `values`
    ///
    /// Fails with [`SeriesError::InvalidMeasurement`] if any reading is
    /// below absolute zero. Nothing is constructed in that case.
    pub fn from_values(values: &[f64]) -> SeriesResult<Self> {
        check_batch(values)?;
        Ok(Self {
            values: MeasurementBuffer::from_slice(values),
        })
    }

    /// Appends a batch of readings and returns the new length
    ///
    /// The batch is validated before anything is stored: if one reading is
    /// below absolute zero the series is left exactly as it was.
    pub fn append(&mut self, values: &[f64]) -> SeriesResult<usize> {
        check_batch(values)?;
        self.values.extend_from_slice(values);

        log_trace!(
            "Appended {} readings, series length {}",
            values.len(),
            self.values.len()
        );
        Ok(self.values.len())
    }

    /// Number of stored readings
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the series holds no readings
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of readings the series can hold before reallocating
    pub fn capacity(&self) -> usize {
        self.values.capacity()
    }

    /// View the readings in insertion order
    pub fn as_slice(&self) -> &[f64] {
        self.values.as_slice()
    }

    /// Iterate over readings from oldest to newest
    pub fn iter(&self) -> core::slice::Iter<'_, f64> {
        self.values.iter()
    }

    /// Arithmetic mean, accumulated in insertion order
    pub fn average(&self) -> SeriesResult<f64> {
        let values = self.non_empty()?;
        let sum = values.iter().fold(0.0, |acc, &v| acc + v);
        Ok(sum / values.len() as f64)
    }

    /// Population standard deviation
    ///
    /// Exactly `0.0` for a single reading.
    pub fn deviation(&self) -> SeriesResult<f64> {
        let mean = self.average()?;
        let values = self.as_slice();
        let sum_sq = values.iter().fold(0.0, |acc, &v| {
            let d = v - mean;
            acc + d * d
        });
        Ok(libm::sqrt(sum_sq / values.len() as f64))
    }

    /// Lowest reading
    pub fn min(&self) -> SeriesResult<f64> {
        let (&first, rest) = self.split_first()?;
        Ok(rest.iter().fold(first, |m, &v| if v < m { v } else { m }))
    }

    /// Highest reading
    pub fn max(&self) -> SeriesResult<f64> {
        let (&first, rest) = self.split_first()?;
        Ok(rest.iter().fold(first, |m, &v| if v > m { v } else { m }))
    }

    /// Reading with the smallest absolute value
    ///
    /// On a tie the positive reading wins.
    pub fn find_closest_to_zero(&self) -> SeriesResult<f64> {
        self.closest_by(libm::fabs)
    }

    /// Reading nearest to `target`
    ///
    /// On a tie the larger reading wins.
    pub fn find_closest_to_value(&self, target: f64) -> SeriesResult<f64> {
        self.closest_by(|v| libm::fabs(v - target))
    }

    /// Readings strictly below `threshold`
    pub fn find_less_than(&self, threshold: f64) -> Vec<f64> {
        self.filter(|v| v < threshold)
    }

    /// Readings at or above `threshold`
    ///
    /// The threshold itself is included.
    pub fn find_greater_or_equal(&self, threshold: f64) -> Vec<f64> {
        self.filter(|v| v >= threshold)
    }

    /// Readings in the half-open range `[lower, upper)`
    pub fn find_in_range(&self, lower: f64, upper: f64) -> Vec<f64> {
        self.filter(|v| v >= lower && v < upper)
    }

    /// Average, deviation and extrema in one value
    pub fn summary(&self) -> SeriesResult<SummaryStatistics> {
        Ok(SummaryStatistics {
            avg: self.average()?,
            stddev: self.deviation()?,
            min: self.min()?,
            max: self.max()?,
        })
    }

    fn non_empty(&self) -> SeriesResult<&[f64]> {
        if self.is_empty() {
            return Err(SeriesError::EmptySeries);
        }
        Ok(self.as_slice())
    }

    fn split_first(&self) -> SeriesResult<(&f64, &[f64])> {
        self.as_slice()
            .split_first()
            .ok_or(SeriesError::EmptySeries)
    }

    /// Left-to-right scan keeping the reading with the smallest distance.
    /// A candidate at equal distance replaces the best only if larger.
    fn closest_by<F>(&self, distance: F) -> SeriesResult<f64>
    where
        F: Fn(f64) -> f64,
    {
        let (&first, rest) = self.split_first()?;
        let mut best = first;
        let mut best_distance = distance(first);

        for &v in rest {
            let d = distance(v);
            if d < best_distance || (d == best_distance && v > best) {
                best = v;
                best_distance = d;
            }
        }
        Ok(best)
    }

    fn filter<P>(&self, predicate: P) -> Vec<f64>
    where
        P: Fn(f64) -> bool,
    {
        self.iter().copied().filter(|&v| predicate(v)).collect()
    }
}

impl TryFrom<&[f64]> for SeriesStore {
    type Error = SeriesError;

    fn try_from(values: &[f64]) -> SeriesResult<Self> {
        Self::from_values(values)
    }
}

impl TryFrom<Vec<f64>> for SeriesStore {
    type Error = SeriesError;

    fn try_from(values: Vec<f64>) -> SeriesResult<Self> {
        Self::from_values(&values)
    }
}

impl From<SeriesStore> for Vec<f64> {
    fn from(series: SeriesStore) -> Self {
        series.as_slice().to_vec()
    }
}

impl<'a> IntoIterator for &'a SeriesStore {
    type Item = &'a f64;
    type IntoIter = core::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn sample() -> SeriesStore {
        SeriesStore::from_values(&[3.0, -5.0, 1.0, 5.0]).unwrap()
    }

    #[test]
    fn aggregates() {
        let series = sample();
        assert!(libm::fabs(series.average().unwrap() - 1.0) < 1e-9);
        assert!(libm::fabs(series.deviation().unwrap() - libm::sqrt(14.0)) < 1e-9);
        assert_eq!(series.min().unwrap(), -5.0);
        assert_eq!(series.max().unwrap(), 5.0);
    }

    #[test]
    fn empty_series_aggregates_fail() {
        let series = SeriesStore::new();
        assert_eq!(series.average(), Err(SeriesError::EmptySeries));
        assert_eq!(series.deviation(), Err(SeriesError::EmptySeries));
        assert_eq!(series.min(), Err(SeriesError::EmptySeries));
        assert_eq!(series.max(), Err(SeriesError::EmptySeries));
        assert_eq!(series.find_closest_to_zero(), Err(SeriesError::EmptySeries));
        assert_eq!(
            series.find_closest_to_value(10.0),
            Err(SeriesError::EmptySeries)
        );
        assert_eq!(series.summary(), Err(SeriesError::EmptySeries));
    }

    #[test]
    fn empty_series_filters_return_nothing() {
        let series = SeriesStore::new();
        assert!(series.find_less_than(0.0).is_empty());
        assert!(series.find_greater_or_equal(0.0).is_empty());
        assert!(series.find_in_range(-100.0, 100.0).is_empty());
    }

    #[test]
    fn single_reading_has_zero_deviation() {
        let series = SeriesStore::from_values(&[10.0]).unwrap();
        assert_eq!(series.deviation().unwrap(), 0.0);
        assert_eq!(series.average().unwrap(), 10.0);
    }

    #[test]
    fn closest_to_zero_prefers_positive() {
        let series = SeriesStore::from_values(&[-0.5, 0.5, 10.0]).unwrap();
        assert_eq!(series.find_closest_to_zero().unwrap(), 0.5);

        let series = SeriesStore::from_values(&[0.5, -0.5]).unwrap();
        assert_eq!(series.find_closest_to_zero().unwrap(), 0.5);
    }

    #[test]
    fn closest_to_zero_negative_winner() {
        let series = SeriesStore::from_values(&[3.0, -1.0, 1.5, 5.0]).unwrap();
        assert_eq!(series.find_closest_to_zero().unwrap(), -1.0);
    }

    #[test]
    fn closest_to_value_prefers_larger() {
        let series = SeriesStore::from_values(&[2.0, 6.0]).unwrap();
        assert_eq!(series.find_closest_to_value(4.0).unwrap(), 6.0);

        assert_eq!(sample().find_closest_to_value(2.5).unwrap(), 3.0);
    }

    #[test]
    fn filters_keep_insertion_order() {
        let series = SeriesStore::from_values(&[3.0, -5.0, 1.0, 5.0, 4.0]).unwrap();
        assert_eq!(series.find_less_than(1.0), vec![-5.0]);
        assert_eq!(series.find_greater_or_equal(3.0), vec![3.0, 5.0, 4.0]);
        assert_eq!(series.find_in_range(1.0, 4.0), vec![3.0, 1.0]);
    }

    #[test]
    fn inverted_range_is_empty() {
        assert!(sample().find_in_range(5.0, -5.0).is_empty());
    }

    #[test]
    fn rejected_append_leaves_series_unchanged() {
        let mut series = sample();
        let capacity = series.capacity();

        let result = series.append(&[10.0, -400.0]);
        assert_eq!(
            result,
            Err(SeriesError::InvalidMeasurement {
                value: -400.0,
                index: 1,
            })
        );
        assert_eq!(series.as_slice(), &[3.0, -5.0, 1.0, 5.0]);
        assert_eq!(series.capacity(), capacity);
    }

    #[test]
    fn append_returns_new_length() {
        let mut series = sample();
        assert_eq!(series.append(&[]).unwrap(), 4);
        assert_eq!(series.append(&[10.0, 20.0]).unwrap(), 6);
        assert_eq!(series.max().unwrap(), 20.0);
    }

    #[test]
    fn conversions() {
        let series = SeriesStore::try_from(vec![1.0, 2.0]).unwrap();
        let mut sum = 0.0;
        for v in &series {
            sum += v;
        }
        assert_eq!(sum, 3.0);

        let values: Vec<f64> = series.into();
        assert_eq!(values, vec![1.0, 2.0]);

        assert!(SeriesStore::try_from(&[-300.0][..]).is_err());
    }
}
