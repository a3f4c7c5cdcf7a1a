use {serde::Serialize, std::collections::VecDeque};

/// One throughput rate sample, immutable once created
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThroughputSample {
    /// Monotonically increasing sample number, starting at 1
    pub seq: u64,
    /// Megabits per second over the elapsed sampling interval
    pub mbps: f64,
}

/// Fixed-capacity, insertion-ordered buffer of the most recent samples.
///
/// Appending at capacity evicts the oldest sample (FIFO); insertion order is
/// chronological order. Memory stays bounded by the capacity regardless of
/// how long the process runs.
#[derive(Debug)]
pub struct RollingWindow {
    samples: VecDeque<ThroughputSample>,
    capacity: usize,
}

impl RollingWindow {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a sample, evicting the oldest when full
    pub fn push(&mut self, sample: ThroughputSample) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Copy-on-read accessor for the render flow
    pub fn to_vec(&self) -> Vec<ThroughputSample> {
        self.samples.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(seq: u64) -> ThroughputSample {
        ThroughputSample {
            seq,
            mbps: seq as f64,
        }
    }

    #[test]
    fn test_never_exceeds_capacity() {
        let mut window = RollingWindow::new(3);
        for seq in 1..=10 {
            window.push(sample(seq));
            assert!(window.len() <= 3);
        }
    }

    #[test]
    fn test_evicts_oldest_in_fifo_order() {
        let mut window = RollingWindow::new(3);
        for seq in 1..=4 {
            window.push(sample(seq));
        }

        let seqs: Vec<u64> = window.to_vec().iter().map(|s| s.seq).collect();
        assert_eq!(seqs, vec![2, 3, 4]);
    }

    #[test]
    fn test_retained_sequence_is_contiguous_after_overflow() {
        let mut window = RollingWindow::new(5);
        for seq in 1..=6 {
            window.push(sample(seq));
        }

        let samples = window.to_vec();
        assert!(samples.iter().all(|s| s.seq != 1));
        for pair in samples.windows(2) {
            assert_eq!(pair[1].seq, pair[0].seq + 1);
        }
    }
}
