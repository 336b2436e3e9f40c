use std::collections::VecDeque;

use crate::core::scalar::Scalar;
use crate::core::types::Sample;

/// Producer-side series buffer that evicts from the front once full.
///
/// Plot state never bounds the series it is handed; producers that stream
/// indefinitely keep memory flat with this window and publish it with
/// `PlotHandle::update_data(window.iter())`.
#[derive(Debug, Clone, PartialEq)]
pub struct SlidingWindow<S> {
    samples: VecDeque<Sample<S>>,
    capacity: usize,
}

impl<S: Scalar> SlidingWindow<S> {
    /// A capacity of 0 is treated as 1.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends one sample and returns the evicted front sample, if any.
    pub fn push(&mut self, sample: Sample<S>) -> Option<Sample<S>> {
        let evicted = if self.samples.len() == self.capacity {
            self.samples.pop_front()
        } else {
            None
        };
        self.samples.push_back(sample);
        evicted
    }

    pub fn iter(&self) -> impl Iterator<Item = Sample<S>> + '_ {
        self.samples.iter().copied()
    }

    /// Samples whose x lies inside an inclusive window, in series order.
    #[must_use]
    pub fn samples_in_x_window(&self, start: f64, end: f64) -> Vec<Sample<S>> {
        let (min_x, max_x) = if start <= end {
            (start, end)
        } else {
            (end, start)
        };

        self.samples
            .iter()
            .copied()
            .filter(|sample| {
                let x = sample.x.to_f64();
                x >= min_x && x <= max_x
            })
            .collect()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}
