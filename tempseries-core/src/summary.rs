//! Bundled summary statistics for a series snapshot

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Average, population standard deviation and extrema of a series
///
/// A value object computed on demand by
/// [`SeriesStore::summary`](crate::SeriesStore::summary). It is a snapshot:
/// appending to the series afterwards does not change it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SummaryStatistics {
    /// Arithmetic mean (°C)
    pub avg: f64,
    /// Population standard deviation (°C)
    pub stddev: f64,
    /// Lowest reading (°C)
    pub min: f64,
    /// Highest reading (°C)
    pub max: f64,
}

impl SummaryStatistics {
    /// Spread between the highest and lowest reading
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

impl fmt::Display for SummaryStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "avg {:.2}°C ± {:.2}°C, min {:.2}°C, max {:.2}°C",
            self.avg, self.stddev, self.min, self.max
        )
    }
}
