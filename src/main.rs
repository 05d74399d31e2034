use anyhow::Result;
use documan::{
    bootstrap::{self, Backend},
    config::AppConfig,
    presentation::http::{routes::build_router_with_options, state::HttpState},
};
use std::net::SocketAddr;
use tokio::sync::watch;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    bootstrap::init_tracing();

    let config = AppConfig::from_env()?;
    let backend = Backend::connect(config.worker()).await?;
    let services = backend.application_services(config.credentials().clone());

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let consumer = if config.run_deletion_consumer() {
        let consumer = backend.deletion_consumer(std::sync::Arc::clone(&services.author_commands));
        Some(tokio::spawn(consumer.run(shutdown_rx)))
    } else {
        tracing::info!("in-process deletion consumer disabled");
        None
    };

    let state = HttpState {
        services: std::sync::Arc::clone(&services),
    };
    let app = build_router_with_options(state, config.allowed_origins(), config.rate_limit());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(bootstrap::shutdown_signal())
    .await?;

    // The receiver may already be gone when the consumer is disabled.
    let _ = shutdown_tx.send(true);
    if let Some(handle) = consumer {
        if let Err(err) = handle.await {
            tracing::error!(error = %err, "deletion consumer task failed");
        }
    }

    backend.pool.close().await;
    Ok(())
}
