//! Cloud Gateway Server
//!
//! Exposes S3 bucket/object operations and DynamoDB item operations as REST
//! endpoints, with Swagger UI at `/swagger/index.html`.

use anyhow::Context;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cloud_gateway_server::{routes, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before the log filter is read
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cloud_gateway_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config from env: {}, using defaults", e);
        Config::default()
    });

    tracing::info!("Starting Cloud Gateway Server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("DynamoDB table: {}", config.key_value.table_name);

    let bind_host = config.server.host.clone();
    let bind_port = config.server.port;

    let app_state = AppState::from_config(config).await;
    let app = routes::router(app_state);

    // Start server with graceful shutdown
    let listener = tokio::net::TcpListener::bind((bind_host.as_str(), bind_port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", bind_host, bind_port))?;
    tracing::info!("Cloud Gateway Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown...");
        },
    }
}
