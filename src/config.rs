use std::{env, path::PathBuf, time::Duration};

/// Configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory watched for new artifacts (non-recursive)
    pub watch_dir: PathBuf,

    /// Rolling window capacity in samples
    pub window_size: usize,

    /// Wall-clock period over which accumulated bytes become one rate sample
    pub sample_interval: Duration,

    /// How often the tick scheduler drives the aggregator
    pub tick_cadence: Duration,

    /// Producer tag an artifact base name must contain
    pub artifact_tag: String,

    /// Extension an artifact base name must end with
    pub artifact_ext: String,

    /// Delay between a creation notification and the size read
    pub settle_delay: Duration,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - `QUASAR_WATCH_DIR` (default: .)
    /// - `QUASAR_WINDOW_SIZE` (default: 60)
    /// - `QUASAR_SAMPLE_INTERVAL_MS` (default: 1000)
    /// - `QUASAR_TICK_CADENCE_MS` (default: 100)
    /// - `QUASAR_ARTIFACT_TAG` (default: rx_)
    /// - `QUASAR_ARTIFACT_EXT` (default: .pgm)
    /// - `QUASAR_SETTLE_DELAY_MS` (default: 50)
    pub fn from_env() -> Self {
        Self {
            watch_dir: env::var("QUASAR_WATCH_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),

            window_size: env::var("QUASAR_WINDOW_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(60),

            sample_interval: Duration::from_millis(env_millis("QUASAR_SAMPLE_INTERVAL_MS", 1_000)),

            tick_cadence: Duration::from_millis(env_millis("QUASAR_TICK_CADENCE_MS", 100)),

            artifact_tag: env::var("QUASAR_ARTIFACT_TAG").unwrap_or_else(|_| "rx_".to_string()),

            artifact_ext: env::var("QUASAR_ARTIFACT_EXT").unwrap_or_else(|_| ".pgm".to_string()),

            settle_delay: Duration::from_millis(env_millis("QUASAR_SETTLE_DELAY_MS", 50)),
        }
    }
}

fn env_millis(key: &str, default: u64) -> u64 {
    env::var(key).ok().and_then(|s| s.parse().ok()).unwrap_or(default)
}
