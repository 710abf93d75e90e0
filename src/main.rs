use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use fizik::adapters::{build_router, postgres, PostgresSessionRepository};
use fizik::config::AppConfig;
use fizik::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;

    telemetry::init_tracing(&config.server).context("failed to initialise logging")?;

    info!(
        max_connections = config.database.max_connections,
        "Connecting to database..."
    );
    let pool = postgres::connect(&config.database).await?;

    if config.database.run_migrations {
        postgres::run_migrations(&pool).await?;
        info!("Migrations applied");
    }

    let repository = Arc::new(PostgresSessionRepository::new(pool.clone()));
    let app = build_router(repository, &config.server).context("invalid CORS origin")?;

    let addr = config
        .server
        .socket_addr()
        .context("invalid bind address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("failed to bind TCP listener")?;

    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    pool.close().await;
    info!("Server stopped.");
    Ok(())
}

// ── Graceful shutdown ──────────────────────────────────────────────────────

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to listen for SIGTERM: {}", e);
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

    info!("Shutdown signal received, stopping server...");
}
