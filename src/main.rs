use anyhow::Result;
use jotter_core::application::{
    ports::time::Clock,
    services::{ApplicationServices, Repositories},
};
use jotter_core::config::AppConfig;
use jotter_core::infrastructure::{
    database,
    repositories::{
        SqliteCategoryRepository, SqlitePostReadRepository, SqlitePostWriteRepository,
        SqliteProjectRepository, SqliteTagRepository, SqliteTodoCategoryRepository,
        SqliteTodoRepository,
    },
    seed,
    time::SystemClock,
};
use std::sync::Arc;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

/// Migrate (and optionally seed) the database, wire the services, then idle
/// until shutdown. Request handling lives outside this crate.
async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.database_max_connections())
        .await?;
    database::run_migrations(&pool).await?;

    if config.seed_on_start() {
        seed::seed_defaults(&pool, config.seed_admin_email()).await?;
    }
    let pool = Arc::new(pool);

    let repos = Repositories {
        post_write: Arc::new(SqlitePostWriteRepository::new(Arc::clone(&pool))),
        post_read: Arc::new(SqlitePostReadRepository::new(Arc::clone(&pool))),
        categories: Arc::new(SqliteCategoryRepository::new(Arc::clone(&pool))),
        tags: Arc::new(SqliteTagRepository::new(Arc::clone(&pool))),
        todos: Arc::new(SqliteTodoRepository::new(Arc::clone(&pool))),
        todo_categories: Arc::new(SqliteTodoCategoryRepository::new(Arc::clone(&pool))),
        projects: Arc::new(SqliteProjectRepository::new(Arc::clone(&pool))),
    };
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let services = ApplicationServices::new(repos, clock, config.slug_write_attempts());

    let categories = services.category_queries.list_categories().await?;
    tracing::info!(
        categories = categories.len(),
        slug_write_attempts = config.slug_write_attempts(),
        "content services ready"
    );

    shutdown_signal().await;
    pool.close().await;
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
