use {
    crate::error::WatchError,
    notify::{
        event::CreateKind, Config as NotifyConfig, Event, EventKind, RecommendedWatcher,
        RecursiveMode, Watcher,
    },
    std::path::{Path, PathBuf},
    tokio::sync::mpsc,
};

/// Raw filesystem creation notification, consumed immediately by the pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEvent {
    pub path: PathBuf,
    pub is_directory: bool,
}

/// Message sent from the notification thread to the watch pipeline task
#[derive(Debug, Clone)]
pub enum WatchMessage {
    Created(RawEvent),
    StreamFailed(String),
}

/// Start watching `dir` for newly created files (non-recursive).
///
/// Creation events are forwarded into the bounded channel with `try_send`;
/// the OS notification thread never blocks on a slow consumer, a full channel
/// drops the event with a warning. The returned watcher must stay alive for
/// as long as events are wanted; dropping it stops the stream.
pub fn spawn_watcher(
    dir: &Path,
    tx: mpsc::Sender<WatchMessage>,
) -> Result<RecommendedWatcher, WatchError> {
    let mut watcher = RecommendedWatcher::new(
        move |res: Result<Event, notify::Error>| match res {
            Ok(event) => {
                for raw in creation_events(&event) {
                    if tx.try_send(WatchMessage::Created(raw)).is_err() {
                        log::warn!("⚠️  Watch channel full, dropping creation event");
                    }
                }
            }
            Err(e) => {
                let _ = tx.try_send(WatchMessage::StreamFailed(e.to_string()));
            }
        },
        NotifyConfig::default(),
    )
    .map_err(|e| WatchError::StreamFailure(format!("failed to create watcher: {}", e)))?;

    watcher
        .watch(dir, RecursiveMode::NonRecursive)
        .map_err(|e| {
            WatchError::StreamFailure(format!("failed to watch {}: {}", dir.display(), e))
        })?;

    log::info!("👀 Watching {} for new artifacts", dir.display());
    Ok(watcher)
}

/// Convert a notify event into raw creation events; everything else
/// (modify, remove, metadata) is discarded here.
fn creation_events(event: &Event) -> Vec<RawEvent> {
    match event.kind {
        EventKind::Create(kind) => event
            .paths
            .iter()
            .cloned()
            .map(|path| {
                let is_directory = matches!(kind, CreateKind::Folder) || path.is_dir();
                RawEvent { path, is_directory }
            })
            .collect(),
        _ => Vec::new(),
    }
}
