//! Periodic tick driver for the throughput aggregator

use {
    crate::state::DashboardState,
    std::{
        sync::Arc,
        time::{Duration, Instant},
    },
    tokio::time::interval,
};

/// Tick scheduler task: drives the aggregator on a fixed cadence.
///
/// The cadence (default 100ms) is finer than the sampling interval so the
/// chart stays responsive; the aggregator itself decides when enough wall
/// time has elapsed to emit a sample, and a delayed driver stretches one
/// interval instead of losing data.
///
/// Runs until the process shuts down.
pub async fn tick_scheduler_task(state: Arc<DashboardState>, cadence: Duration) {
    log::info!("⏰ Starting tick scheduler (cadence: {}ms)", cadence.as_millis());

    let mut timer = interval(cadence);

    loop {
        timer.tick().await;

        if let Some(sample) = state.tick(Instant::now()) {
            log::debug!("📊 Sample #{}: {:.3} Mbps", sample.seq, sample.mbps);
        }
    }
}
