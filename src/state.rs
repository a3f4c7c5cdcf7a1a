use {
    crate::{
        config::Config,
        error::WatchError,
        filter::ArtifactFilter,
        probe::SizeProbe,
        throughput::ThroughputAggregator,
        watcher::WatchMessage,
        window::ThroughputSample,
    },
    std::{
        path::PathBuf,
        sync::{Arc, Mutex},
        time::Instant,
    },
    tokio::sync::mpsc,
};

/// Point-in-time view handed to the renderer: the rolling window plus the
/// most recently accepted artifact. Non-blocking to produce, O(capacity).
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub samples: Vec<ThroughputSample>,
    pub latest_artifact: Option<PathBuf>,
}

/// Shared dashboard state: the throughput aggregator plus the single
/// latest-artifact slot.
///
/// Constructed once at startup and shared (not copied) between the
/// notification flow and the tick/render flow; all synchronization lives
/// inside, so every method takes `&self`.
pub struct DashboardState {
    throughput: ThroughputAggregator,
    latest_artifact: Mutex<Option<PathBuf>>,
}

impl DashboardState {
    pub fn new(config: &Config) -> Self {
        Self {
            throughput: ThroughputAggregator::new(config.window_size, config.sample_interval),
            latest_artifact: Mutex::new(None),
        }
    }

    /// Fold one accepted artifact into the metrics and overwrite the
    /// latest-artifact slot (last write wins)
    pub fn record_artifact(&self, path: PathBuf, size_bytes: u64) {
        self.throughput.record_bytes(size_bytes);
        *self.latest_artifact.lock().unwrap() = Some(path);
    }

    /// Most recently accepted artifact, or `None` before the first one
    pub fn latest_artifact(&self) -> Option<PathBuf> {
        self.latest_artifact.lock().unwrap().clone()
    }

    /// Periodic aggregation step, driven by the tick scheduler
    pub fn tick(&self, now: Instant) -> Option<ThroughputSample> {
        self.throughput.tick(now)
    }

    /// Snapshot for the render flow
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            samples: self.throughput.window_snapshot(),
            latest_artifact: self.latest_artifact(),
        }
    }
}

/// Background task that consumes raw creation notifications and runs the
/// filter → probe → record pipeline.
///
/// Probe failures are expected (producer still writing, or the file vanished)
/// and drop the event. A dead notification stream is fatal: the task returns
/// the failure instead of idling on a dead feed.
pub async fn watch_pipeline_task(
    mut rx: mpsc::Receiver<WatchMessage>,
    state: Arc<DashboardState>,
    filter: ArtifactFilter,
    probe: SizeProbe,
) -> Result<(), WatchError> {
    log::info!("Watch pipeline task started");

    while let Some(message) = rx.recv().await {
        match message {
            WatchMessage::Created(event) => {
                if !filter.accept(&event) {
                    log::debug!("Ignoring {}", event.path.display());
                    continue;
                }

                match probe.probe(&event.path).await {
                    Ok(accepted) => {
                        log::info!(
                            "📥 New data: {} ({:.1} KB)",
                            accepted.path.display(),
                            accepted.size_bytes as f64 / 1024.0
                        );
                        state.record_artifact(accepted.path, accepted.size_bytes);
                    }
                    Err(e) => {
                        log::debug!("Dropping {}: {}", event.path.display(), e);
                    }
                }
            }
            WatchMessage::StreamFailed(reason) => {
                return Err(WatchError::StreamFailure(reason));
            }
        }
    }

    log::info!("Watch pipeline task stopped");
    Ok(())
}
