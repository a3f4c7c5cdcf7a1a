use crate::watcher::RawEvent;

/// Pure predicate that classifies raw creation notifications.
///
/// The watch directory also receives unrelated files from the acquisition
/// process (logs, temp files); only artifacts matching the producer naming
/// convention may touch the metrics. Matching is on the base name, so a tag
/// appearing elsewhere in the path does not count.
#[derive(Debug, Clone)]
pub struct ArtifactFilter {
    tag: String,
    extension: String,
}

impl ArtifactFilter {
    pub fn new(tag: &str, extension: &str) -> Self {
        Self {
            tag: tag.to_string(),
            extension: extension.to_string(),
        }
    }

    /// Accept only file events whose base name carries the producer tag and
    /// ends with the configured extension. No side effects.
    pub fn accept(&self, event: &RawEvent) -> bool {
        if event.is_directory {
            return false;
        }

        let name = match event.path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => return false,
        };

        name.contains(&self.tag) && name.ends_with(&self.extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn default_filter() -> ArtifactFilter {
        ArtifactFilter::new("rx_", ".pgm")
    }

    fn file_event(path: &str) -> RawEvent {
        RawEvent {
            path: PathBuf::from(path),
            is_directory: false,
        }
    }

    #[test]
    fn test_accepts_matching_artifact() {
        assert!(default_filter().accept(&file_event("/data/rx_0001.pgm")));
    }

    #[test]
    fn test_rejects_directory_flagged_event() {
        let event = RawEvent {
            path: PathBuf::from("/data/rx_frames.pgm"),
            is_directory: true,
        };
        assert!(!default_filter().accept(&event));
    }

    #[test]
    fn test_rejects_wrong_extension() {
        assert!(!default_filter().accept(&file_event("/data/foo_rx_1.png")));
    }

    #[test]
    fn test_rejects_missing_producer_tag() {
        assert!(!default_filter().accept(&file_event("/data/tx_1.pgm")));
    }

    #[test]
    fn test_tag_in_parent_directory_does_not_count() {
        // Base-name matching only
        assert!(!default_filter().accept(&file_event("/data/rx_frames/frame1.pgm")));
    }
}
