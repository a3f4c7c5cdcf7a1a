#[cfg(test)]
mod tests;

mod config;
mod error;
mod filter;
mod probe;
mod scheduler;
mod state;
mod throughput;
mod ui;
mod watcher;
mod window;

use {
    config::Config,
    filter::ArtifactFilter,
    probe::SizeProbe,
    state::DashboardState,
    std::sync::Arc,
    tokio::sync::mpsc,
    watcher::WatchMessage,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // Write logs to stderr (suppressed once the UI enters the alternate screen)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let config = Config::from_env();

    log::info!("🚀 Starting Quasar Dash...");
    log::info!("📊 Configuration:");
    log::info!("   Watch dir: {}", config.watch_dir.display());
    log::info!("   Window size: {} samples", config.window_size);
    log::info!("   Sample interval: {}ms", config.sample_interval.as_millis());
    log::info!(
        "   Artifact pattern: *{}*{}",
        config.artifact_tag,
        config.artifact_ext
    );

    // Bounded channel from the OS notification thread into the pipeline task
    let (tx, rx) = mpsc::channel::<WatchMessage>(1024);

    // Shared state, one instance for both flows
    let state = Arc::new(DashboardState::new(&config));

    // The watcher must stay alive for the whole run; dropping it stops the
    // notification stream and closes the channel. A startup failure here is
    // fatal, no metrics can be produced without the feed.
    let _watcher = watcher::spawn_watcher(&config.watch_dir, tx)?;

    // Spawn the pipeline task consuming raw creation events
    let pipeline_handle = {
        let state = state.clone();
        let filter = ArtifactFilter::new(&config.artifact_tag, &config.artifact_ext);
        let probe = SizeProbe::new(config.settle_delay);
        tokio::spawn(async move { state::watch_pipeline_task(rx, state, filter, probe).await })
    };

    // Spawn the periodic tick driver
    {
        let state = state.clone();
        let cadence = config.tick_cadence;
        tokio::spawn(async move {
            scheduler::tick_scheduler_task(state, cadence).await;
        });
    }

    log::info!("✅ Pipeline configured, launching dashboard...");

    let ui_state = state.clone();
    let refresh_interval = config.tick_cadence;
    let ui_handle = tokio::spawn(async move {
        if let Err(e) = ui::run_ui(ui_state, refresh_interval).await {
            log::error!("UI error: {}", e);
        }
    });

    tokio::select! {
        _ = ui_handle => {
            log::info!("UI exited");
        }
        result = pipeline_handle => {
            match result {
                Ok(Ok(())) => log::info!("Watch pipeline completed"),
                Ok(Err(e)) => {
                    log::error!("❌ {}", e);
                    return Err(Box::new(e) as Box<dyn std::error::Error>);
                }
                Err(e) => log::error!("❌ Watch pipeline panicked: {}", e),
            }
        }
    }

    Ok(())
}
