#[cfg(test)]
mod tests {
    use {
        crate::{
            config::Config,
            filter::ArtifactFilter,
            probe::SizeProbe,
            state::{watch_pipeline_task, DashboardState},
            watcher::{RawEvent, WatchMessage},
        },
        std::{
            path::Path,
            sync::Arc,
            time::{Duration, Instant},
        },
        tokio::sync::mpsc,
    };

    const MIB: usize = 1024 * 1024;

    fn test_config(watch_dir: &Path) -> Config {
        Config {
            watch_dir: watch_dir.to_path_buf(),
            window_size: 60,
            sample_interval: Duration::from_secs(1),
            tick_cadence: Duration::from_millis(100),
            artifact_tag: "rx_".to_string(),
            artifact_ext: ".pgm".to_string(),
            settle_delay: Duration::from_millis(1),
        }
    }

    /// Three accepted artifacts (1 MiB + 2 MiB + 1 MiB) inside one sampling
    /// interval aggregate into a single ~32 Mbps sample at the next tick,
    /// while unrelated files leave the metrics and the registry untouched.
    #[tokio::test]
    async fn test_end_to_end_throughput_sample() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        let state = Arc::new(DashboardState::new(&config));
        let t0 = Instant::now();

        for (i, size) in [MIB, 2 * MIB, MIB].iter().enumerate() {
            let path = dir.path().join(format!("rx_{:04}.pgm", i));
            std::fs::write(&path, vec![0u8; *size]).unwrap();
        }
        std::fs::write(dir.path().join("tx_1.pgm"), b"not ours").unwrap();

        let (tx, rx) = mpsc::channel(16);
        let handle = tokio::spawn(watch_pipeline_task(
            rx,
            state.clone(),
            ArtifactFilter::new(&config.artifact_tag, &config.artifact_ext),
            SizeProbe::new(config.settle_delay),
        ));

        for i in 0..3 {
            tx.send(WatchMessage::Created(RawEvent {
                path: dir.path().join(format!("rx_{:04}.pgm", i)),
                is_directory: false,
            }))
            .await
            .unwrap();
        }

        // Filtered out: wrong tag on disk, and a matching name that vanished
        tx.send(WatchMessage::Created(RawEvent {
            path: dir.path().join("tx_1.pgm"),
            is_directory: false,
        }))
        .await
        .unwrap();
        tx.send(WatchMessage::Created(RawEvent {
            path: dir.path().join("rx_gone.pgm"),
            is_directory: false,
        }))
        .await
        .unwrap();

        drop(tx);
        handle.await.unwrap().unwrap();

        let sample = state
            .tick(t0 + Duration::from_secs(1))
            .expect("one sample due after the interval");
        assert_eq!(sample.seq, 1);
        assert!((sample.mbps - 32.0).abs() < 0.5, "got {}", sample.mbps);

        let snapshot = state.snapshot();
        assert_eq!(snapshot.samples.len(), 1);
        assert_eq!(
            snapshot.latest_artifact,
            Some(dir.path().join("rx_0002.pgm"))
        );
    }

    /// A second idle interval appends a zero sample with the next index
    #[tokio::test]
    async fn test_idle_interval_follows_with_zero_sample() {
        let dir = tempfile::tempdir().unwrap();
        let state = DashboardState::new(&test_config(dir.path()));
        let t0 = Instant::now();

        state.record_artifact(dir.path().join("rx_0000.pgm"), MIB as u64);

        let first = state.tick(t0 + Duration::from_secs(1)).unwrap();
        let second = state.tick(t0 + Duration::from_secs(2)).unwrap();

        assert!(first.mbps > 0.0);
        assert_eq!(second.mbps, 0.0);
        assert_eq!((first.seq, second.seq), (1, 2));
    }
}
