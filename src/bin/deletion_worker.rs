// src/bin/deletion_worker.rs
//! Standalone consumer for the author deletion queue.
use anyhow::Result;
use documan::{
    bootstrap::{self, Backend},
    config::WorkerConfig,
};
use tokio::sync::watch;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    bootstrap::init_tracing();

    let config = WorkerConfig::from_env()?;
    let backend = Backend::connect(&config).await?;
    let consumer = backend.deletion_consumer(backend.author_commands());

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let worker = tokio::spawn(consumer.run(shutdown_rx));

    bootstrap::shutdown_signal().await;
    let _ = shutdown_tx.send(true);
    worker.await?;

    backend.pool.close().await;
    Ok(())
}
