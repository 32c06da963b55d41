//! posts-server: loads config from the environment, prepares the store, serves the API.

use posts_api::{
    app, apply_migrations, ensure_database_exists, AppConfig, AppState, MemoryPostStore,
    PgPostStore, StoreKind,
};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("posts_api=info,posts_server=info,tower_http=info")),
        )
        .init();

    let state = match config.store {
        StoreKind::Postgres => {
            ensure_database_exists(&config.database_url).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(&config.database_url)
                .await?;
            if config.run_migrations {
                apply_migrations(&pool).await?;
            }
            AppState::new(PgPostStore::new(pool))
        }
        StoreKind::Memory => {
            tracing::warn!("using in-memory store; posts are lost on shutdown");
            AppState::new(MemoryPostStore::new())
        }
    };

    let router = app(state, config.body_limit_bytes);
    let listener = TcpListener::bind(config.bind_addr()?).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
