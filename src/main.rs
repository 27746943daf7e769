use anyhow::Context;
use tokio::signal;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, EnvFilter};
use crate::secrets::SECRET_MANAGER;
mod models;
mod controllers;
mod routers;
mod db;
mod error;
mod extract;
mod utils;
use routers::build_router;
use db::Database;
mod secrets;

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("🛑 Shutting down server...");
}

/// `directives` uses `RUST_LOG` syntax; when it names no level, everything at `info` and above is logged.
fn env_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    fmt()
        .with_env_filter(env_filter(&directives))
        .with_target(false)
        .init();

    SECRET_MANAGER.validate()?;

    // Initialize database
    let database = Database::new(&SECRET_MANAGER)
        .await
        .context("Failed to connect to MySQL database")?;
    info!("📊 Connected to MySQL database");

    // Run migrations
    if SECRET_MANAGER.run_migrations() {
        sqlx::migrate!("./migrations")
            .run(database.pool())
            .await
            .context("Database migrations failed")?;
        info!("📊 Database migrations completed");
    }

    let port = SECRET_MANAGER.port();
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("Failed to bind to port {}", port))?;

    let cors_origins = SECRET_MANAGER.cors_origins();
    let app = build_router(database, &cors_origins);

    info!("🎵 Music Player API listening on port {}", port);
    info!("🌐 CORS enabled for {:?}", cors_origins);
    info!("✅ Health check: /api/health");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    Ok(())
}
