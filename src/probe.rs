use {
    crate::error::ProbeError,
    std::{
        path::{Path, PathBuf},
        time::Duration,
    },
};

/// An accepted artifact with its size as measured after the settle delay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedEvent {
    pub path: PathBuf,
    pub size_bytes: u64,
}

/// Reads artifact sizes once the producer has had a moment to finish writing.
///
/// A creation notification can fire while the producer is still mid-write.
/// The settle delay shrinks that race but cannot close it (the producer gives
/// no completion signal), so a read that still fails afterwards is expected
/// and the event is simply dropped.
#[derive(Debug, Clone, Copy)]
pub struct SizeProbe {
    settle_delay: Duration,
}

impl SizeProbe {
    pub fn new(settle_delay: Duration) -> Self {
        Self { settle_delay }
    }

    /// Probe the current size of `path`.
    ///
    /// Best effort: a path that vanished, is unreadable, or is not a regular
    /// file yields `ProbeError::Unavailable`. No retry.
    pub async fn probe(&self, path: &Path) -> Result<AcceptedEvent, ProbeError> {
        tokio::time::sleep(self.settle_delay).await;

        match tokio::fs::metadata(path).await {
            Ok(meta) if meta.is_file() => Ok(AcceptedEvent {
                path: path.to_path_buf(),
                size_bytes: meta.len(),
            }),
            Ok(_) | Err(_) => Err(ProbeError::Unavailable),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quick_probe() -> SizeProbe {
        SizeProbe::new(Duration::from_millis(1))
    }

    #[tokio::test]
    async fn test_missing_path_is_unavailable() {
        let result = quick_probe()
            .probe(Path::new("/nonexistent/rx_0001.pgm"))
            .await;
        assert_eq!(result, Err(ProbeError::Unavailable));
    }

    #[tokio::test]
    async fn test_reads_true_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rx_0001.pgm");
        std::fs::write(&path, vec![0u8; 4096]).unwrap();

        let event = quick_probe().probe(&path).await.unwrap();
        assert_eq!(event.size_bytes, 4096);
        assert_eq!(event.path, path);
    }

    #[tokio::test]
    async fn test_directory_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let result = quick_probe().probe(dir.path()).await;
        assert_eq!(result, Err(ProbeError::Unavailable));
    }
}
