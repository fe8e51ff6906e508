//! Bucket occupancy statistics

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OccupancyStats {
    pub buckets: usize,
    pub elements: usize,
    pub min: usize,
    pub max: usize,
    pub mean: f64,
}

impl OccupancyStats {
    pub fn from_lengths(lengths: impl IntoIterator<Item = usize>) -> Self {
        let mut buckets = 0usize;
        let mut elements = 0usize;
        let mut min = usize::MAX;
        let mut max = 0usize;

        for len in lengths {
            buckets += 1;
            elements += len;
            min = min.min(len);
            max = max.max(len);
        }

        if buckets == 0 {
            return Self {
                buckets: 0,
                elements: 0,
                min: 0,
                max: 0,
                mean: 0.0,
            };
        }

        Self {
            buckets,
            elements,
            min,
            max,
            mean: elements as f64 / buckets as f64,
        }
    }

    /// `max - min`.
    pub fn spread(&self) -> usize {
        self.max - self.min
    }
}
