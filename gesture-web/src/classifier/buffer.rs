//! Rolling buffer of pixel x-coordinates for motion detection
//!
//! One buffer per tracked landmark (wrist, index tip). Once full, each push
//! overwrites the oldest sample.

use super::config::DEFAULT_BUFFER_CAPACITY;

#[derive(Clone, Debug)]
pub struct MotionBuffer {
    /// Circular storage, `capacity` slots
    data: Vec<i32>,

    /// Next slot to write; also the oldest sample once filled
    write_index: usize,

    /// Whether the buffer has wrapped at least once
    filled: bool,
}

impl MotionBuffer {
    /// Create an empty buffer. Capacity is clamped to at least 1.
    pub fn new(capacity: usize) -> Self {
        Self {
            data: vec![0; capacity.max(1)],
            write_index: 0,
            filled: false,
        }
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    pub fn push(&mut self, sample: i32) {
        self.data[self.write_index] = sample;
        self.write_index = (self.write_index + 1) % self.data.len();

        if self.write_index == 0 {
            self.filled = true;
        }
    }

    pub fn len(&self) -> usize {
        if self.filled {
            self.data.len()
        } else {
            self.write_index
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.filled
    }

    /// Samples from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        let start = if self.filled { self.write_index } else { 0 };
        let cap = self.data.len();
        (0..self.len()).map(move |i| self.data[(start + i) % cap])
    }

    pub fn first(&self) -> Option<i32> {
        self.iter().next()
    }

    pub fn last(&self) -> Option<i32> {
        if self.is_empty() {
            return None;
        }
        let cap = self.data.len();
        Some(self.data[(self.write_index + cap - 1) % cap])
    }

    /// max - min over the stored samples
    pub fn range(&self) -> Option<i32> {
        let min = self.iter().min()?;
        let max = self.iter().max()?;
        Some(max - min)
    }

    /// newest - oldest
    pub fn delta(&self) -> Option<i32> {
        Some(self.last()? - self.first()?)
    }

    pub fn clear(&mut self) {
        self.data.iter_mut().for_each(|s| *s = 0);
        self.write_index = 0;
        self.filled = false;
    }
}

impl Default for MotionBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_BUFFER_CAPACITY)
    }
}
