use {
    crate::window::{RollingWindow, ThroughputSample},
    std::{
        sync::{
            atomic::{AtomicU64, Ordering},
            Mutex,
        },
        time::{Duration, Instant},
    },
};

const MEGABIT: f64 = 1024.0 * 1024.0;

/// Counter-and-tick throughput aggregator.
///
/// The producer side (`record_bytes`) runs on the notification flow at
/// arbitrary, bursty rates; the consumer side (`tick`) runs on the periodic
/// driver and turns the accumulated counter into at most one rate sample per
/// sampling interval. Decoupling the two keeps memory bounded by the window
/// capacity no matter how many events arrive.
pub struct ThroughputAggregator {
    /// Bytes accepted since the last produced sample
    pending_bytes: AtomicU64,
    sample_interval: Duration,
    inner: Mutex<AggregatorInner>,
}

/// Mutated only under the lock; the window has a single writer (`tick`)
struct AggregatorInner {
    last_tick: Instant,
    next_seq: u64,
    window: RollingWindow,
}

impl ThroughputAggregator {
    pub fn new(window_capacity: usize, sample_interval: Duration) -> Self {
        Self {
            pending_bytes: AtomicU64::new(0),
            sample_interval,
            inner: Mutex::new(AggregatorInner {
                last_tick: Instant::now(),
                next_seq: 1,
                window: RollingWindow::new(window_capacity),
            }),
        }
    }

    /// Record bytes from one accepted artifact.
    ///
    /// Safe to call concurrently with `tick`; bytes recorded after the tick's
    /// exchange land in the next interval.
    pub fn record_bytes(&self, n: u64) {
        self.pending_bytes.fetch_add(n, Ordering::Relaxed);
    }

    /// Periodic aggregation step.
    ///
    /// Returns a new sample once the sampling interval has elapsed, `None`
    /// otherwise (an early tick is a no-op and leaves the counter alone).
    /// The counter is drained with a single atomic exchange, and the rate is
    /// computed over the true elapsed duration: a delayed driver stretches
    /// the interval instead of skewing the rate.
    pub fn tick(&self, now: Instant) -> Option<ThroughputSample> {
        let mut inner = self.inner.lock().unwrap();

        let elapsed = now.saturating_duration_since(inner.last_tick);
        if elapsed < self.sample_interval {
            return None;
        }

        let bytes = self.pending_bytes.swap(0, Ordering::AcqRel);
        let mbps = bytes as f64 * 8.0 / MEGABIT / elapsed.as_secs_f64();

        let sample = ThroughputSample {
            seq: inner.next_seq,
            mbps,
        };
        inner.next_seq += 1;
        inner.window.push(sample);
        inner.last_tick = now;

        Some(sample)
    }

    /// Copy of the rolling window for the render flow, oldest first
    pub fn window_snapshot(&self) -> Vec<ThroughputSample> {
        self.inner.lock().unwrap().window.to_vec()
    }
}
