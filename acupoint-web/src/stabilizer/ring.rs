//! Fixed-capacity rolling buffer
//!
//! Storage is allocated once at construction; pushes overwrite the oldest slot.

/// Rolling buffer that keeps the last `capacity` items in chronological order
#[derive(Clone, Debug)]
pub struct RingBuffer<T> {
    /// Circular storage, `capacity` slots
    data: Vec<T>,

    /// Next slot to write
    write_index: usize,

    /// Number of valid items (saturates at capacity)
    len: usize,
}

impl<T: Copy + Default> RingBuffer<T> {
    /// `capacity` must be non-zero; configs are validated before this is reached.
    pub fn new(capacity: usize) -> Self {
        Self {
            data: vec![T::default(); capacity.max(1)],
            write_index: 0,
            len: 0,
        }
    }

    pub fn push(&mut self, item: T) {
        let capacity = self.data.len();
        self.data[self.write_index] = item;
        self.write_index = (self.write_index + 1) % capacity;
        self.len = (self.len + 1).min(capacity);
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The newest `n` items (fewer if not yet filled), oldest first
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &T> + '_ {
        let count = n.min(self.len);
        let capacity = self.data.len();
        let start = (self.write_index + capacity - count) % capacity;
        (0..count).map(move |i| &self.data[(start + i) % capacity])
    }

    pub fn clear(&mut self) {
        self.write_index = 0;
        self.len = 0;
    }
}

impl RingBuffer<f32> {
    /// Mean of the stored samples, 0 when empty
    pub fn mean(&self) -> f32 {
        if self.is_empty() {
            return 0.0;
        }
        self.recent(self.len).sum::<f32>() / self.len as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_is_chronological_after_wrap() {
        let mut buffer = RingBuffer::new(3);
        for v in 1..=5 {
            buffer.push(v);
        }
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.recent(3).copied().collect::<Vec<_>>(), vec![3, 4, 5]);
        assert_eq!(buffer.recent(2).copied().collect::<Vec<_>>(), vec![4, 5]);
    }

    #[test]
    fn test_recent_before_filled() {
        let mut buffer = RingBuffer::new(4);
        buffer.push(7);
        buffer.push(8);
        assert_eq!(buffer.recent(10).copied().collect::<Vec<_>>(), vec![7, 8]);
    }

    #[test]
    fn test_mean_and_clear() {
        let mut buffer = RingBuffer::new(2);
        buffer.push(1.0_f32);
        buffer.push(2.0);
        buffer.push(4.0);
        assert!((buffer.mean() - 3.0).abs() < 1e-6);

        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.mean(), 0.0);
        buffer.push(5.0);
        assert_eq!(buffer.recent(2).copied().collect::<Vec<_>>(), vec![5.0]);
    }
}
