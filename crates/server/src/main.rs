//! Concierge Server Entry Point

use std::net::SocketAddr;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use concierge_agent::Responder;
use concierge_config::{load_settings, FileCatalogProvider, Settings};
use concierge_core::CatalogProvider;
use concierge_server::{create_router, init_metrics, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Configuration first, tracing needs the observability section
    let env = std::env::var("CONCIERGE_ENV").ok();
    let config = load_settings(env.as_deref()).context("Failed to load configuration")?;

    init_tracing(&config);

    tracing::info!("Starting Concierge Server v{}", env!("CARGO_PKG_VERSION"));

    // Without a catalog there is nothing to serve
    let provider = FileCatalogProvider::new(&config.catalog.path);
    let catalog = provider
        .load()
        .with_context(|| format!("Failed to load intent catalog from {}", provider.source_name()))?;
    let responder = Responder::from_config(catalog, &config.matcher).context("Invalid intent catalog")?;
    tracing::info!(
        intents = responder.catalog().len(),
        patterns = responder.catalog().pattern_count(),
        threshold = responder.threshold(),
        "Loaded intent catalog"
    );

    let log = concierge_persistence::init(&config.interaction_log)
        .await
        .with_context(|| format!("Failed to open interaction log at {}", config.interaction_log.path))?;

    if config.observability.metrics_enabled {
        init_metrics().context("Failed to install Prometheus recorder")?;
        tracing::info!("Initialized Prometheus metrics at /metrics");
    }

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .with_context(|| format!("Invalid listen address {}:{}", config.server.host, config.server.port))?;

    let app = create_router(AppState::new(config, responder, log));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
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
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}

/// Console logging, plain or JSON
///
/// `RUST_LOG` overrides `observability.log_level`.
fn init_tracing(config: &Settings) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = &config.observability.log_level;
        format!("concierge={},tower_http=debug", level).into()
    });

    let fmt_layer = if config.observability.log_json {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
