use std::collections::VecDeque;

/// Number of samples kept per series; one minute at the fixed tick cadence.
pub const HISTORY_CAPACITY: usize = 60;

/// Fixed-capacity rolling buffer of samples, oldest first.
#[derive(Debug, Clone)]
pub struct BoundedSeries {
    samples: VecDeque<f64>,
    capacity: usize,
}

impl BoundedSeries {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes `value` as the newest sample, evicting the oldest ones once
    /// the buffer holds more than `capacity` samples.
    pub fn append(&mut self, value: f64) {
        self.samples.push_back(value);
        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    pub fn values(&self) -> Vec<f64> {
        self.samples.iter().copied().collect()
    }

    pub fn latest(&self) -> Option<f64> {
        self.samples.back().copied()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for BoundedSeries {
    fn default() -> Self {
        Self::new(HISTORY_CAPACITY)
    }
}
