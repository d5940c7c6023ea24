use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use dictach_config::Config;
use dictach_config::log::{LogConfig, LogFormat};
use dictach_store::{HttpStore, ResourceStore};
use tokio::signal;
use tokio::task::JoinSet;
use tracing_subscriber::EnvFilter;

pub mod chrome;
pub mod cli;
pub mod controller;
pub mod demo;
pub mod events;
pub mod io;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;

use self::cli::Args;
use self::controller::AppController;
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut config = Config::new();
    args.apply(&mut config);

    init_tracing(&config.log);

    let store = build_store(&args, &config).await?;
    let state = Arc::new(AppState::new(config, store));
    let controller = AppController::new(state);
    let tasks = controller.spawn_tasks(args.launch());

    // Shutdown future (Ctrl+C)
    let shutdown = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl+c: {e}");
        }
    };

    run(&controller, tasks, shutdown).await;
    Ok(())
}

fn init_tracing(config: &LogConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match config.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.with_target(false).init(),
    }
}

async fn build_store(args: &Args, config: &Config) -> anyhow::Result<Arc<dyn ResourceStore>> {
    if args.demo {
        tracing::info!("Using in-memory demo store");
        let store = demo::seeded_store()
            .await
            .context("Failed to seed demo store")?;
        return Ok(Arc::new(store));
    }

    tracing::info!("Using API at {}", config.store.base_url);
    let store = HttpStore::new(
        config.store.base_url.clone(),
        Duration::from_secs(config.store.timeout_seconds),
    )
    .context("Failed to build HTTP client")?;
    Ok(Arc::new(store))
}

pub async fn run(
    controller: &AppController,
    mut tasks: JoinSet<anyhow::Result<()>>,
    shutdown: impl Future<Output = ()>,
) {
    tokio::select! {
        _ = shutdown => {
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            log_task_exit(result);
        }
    }

    controller.shutdown();
    while let Some(result) = tasks.join_next().await {
        log_task_exit(result);
    }
}

fn log_task_exit(result: Result<anyhow::Result<()>, tokio::task::JoinError>) {
    match result {
        Ok(Ok(())) => tracing::debug!("task exited"),
        Ok(Err(e)) => tracing::error!("task failed: {e}"),
        Err(e) => tracing::error!("task panicked: {e}"),
    }
}
