// src/bootstrap.rs
//! Process wiring shared by the API server and the deletion worker.
use crate::application::{
    commands::authors::AuthorCommandService,
    dto::ApiCredentials,
    ports::{messaging::AuthorDeletionPublisher, security::PasswordHasher, time::Clock},
    services::ApplicationServices,
};
use crate::config::WorkerConfig;
use crate::domain::{
    author::{AuthorReadRepository, AuthorWriteRepository},
    document::{DocumentReadRepository, DocumentWriteRepository},
};
use crate::infrastructure::{
    database,
    messaging::{
        AuthorDeletionConsumer, AuthorDeletionHandler, RedisAuthorDeletionQueue,
        create_consumer_pool, create_pool,
    },
    repositories::{
        PostgresAuthorReadRepository, PostgresAuthorWriteRepository,
        PostgresDocumentReadRepository, PostgresDocumentWriteRepository,
    },
    security::password::Argon2PasswordHasher,
    time::SystemClock,
};
use anyhow::Result;
use sqlx::PgPool;
use std::sync::Arc;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Connected backing stores plus the adapters built on top of them.
#[derive(Clone)]
pub struct Backend {
    pub pool: PgPool,
    pub redis: deadpool_redis::Pool,
    consumer_redis: deadpool_redis::Pool,
    pub author_write_repo: Arc<dyn AuthorWriteRepository>,
    pub author_read_repo: Arc<dyn AuthorReadRepository>,
    pub document_write_repo: Arc<dyn DocumentWriteRepository>,
    pub document_read_repo: Arc<dyn DocumentReadRepository>,
    pub deletion_publisher: Arc<dyn AuthorDeletionPublisher>,
    pub clock: Arc<dyn Clock>,
    config: WorkerConfig,
}

impl Backend {
    /// Connect to Postgres (running pending migrations) and prepare the Redis pool.
    pub async fn connect(config: &WorkerConfig) -> Result<Self> {
        let pool = database::init_pool(config.database_url()).await?;
        database::run_migrations(&pool).await?;
        tracing::info!("database ready");

        let redis = create_pool(config.redis_url())?;
        let consumer_redis = create_consumer_pool(config.redis_url(), config.deletion_queue())?;
        let deletion_publisher: Arc<dyn AuthorDeletionPublisher> = Arc::new(
            RedisAuthorDeletionQueue::new(redis.clone(), config.deletion_queue()),
        );

        Ok(Self {
            author_write_repo: Arc::new(PostgresAuthorWriteRepository::new(pool.clone())),
            author_read_repo: Arc::new(PostgresAuthorReadRepository::new(pool.clone())),
            document_write_repo: Arc::new(PostgresDocumentWriteRepository::new(pool.clone())),
            document_read_repo: Arc::new(PostgresDocumentReadRepository::new(pool.clone())),
            deletion_publisher,
            clock: SystemClock::shared(),
            pool,
            redis,
            consumer_redis,
            config: config.clone(),
        })
    }

    pub fn application_services(&self, credentials: ApiCredentials) -> Arc<ApplicationServices> {
        let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
        Arc::new(ApplicationServices::new(
            Arc::clone(&self.author_write_repo),
            Arc::clone(&self.author_read_repo),
            Arc::clone(&self.document_write_repo),
            Arc::clone(&self.document_read_repo),
            Arc::clone(&self.deletion_publisher),
            password_hasher,
            credentials,
            Arc::clone(&self.clock),
        ))
    }

    pub fn author_commands(&self) -> Arc<AuthorCommandService> {
        Arc::new(AuthorCommandService::new(
            Arc::clone(&self.author_write_repo),
            Arc::clone(&self.author_read_repo),
            Arc::clone(&self.deletion_publisher),
            Arc::clone(&self.clock),
        ))
    }

    pub fn deletion_consumer(&self, commands: Arc<AuthorCommandService>) -> AuthorDeletionConsumer {
        AuthorDeletionConsumer::new(
            self.consumer_redis.clone(),
            self.config.deletion_queue().clone(),
            AuthorDeletionHandler::new(commands),
        )
    }
}

pub fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

/// Resolves on Ctrl-C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
