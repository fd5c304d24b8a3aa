//! Portico - GraphQL gateway for the todo-service REST API.
//!
//! # Usage
//!
//! ```bash
//! # Start with default config
//! portico
//!
//! # Start with environment overrides
//! REST_URL=http://localhost:8080 GRAPHQL_PORT=4000 portico
//! ```

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::signal;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use portico_core::metrics::init_metrics;
use portico_core::query::DecoratorRegistry;
use portico_graphql::{build_schema, serve_with_shutdown, GatewayContext, ServerConfig};
use portico_rest::{BearerAuthDecorator, HealthChecker, RestClient};

/// Portico CLI - GraphQL gateway for the todo service.
#[derive(Parser, Debug)]
#[command(name = "portico")]
#[command(about = "Portico - GraphQL gateway for the todo-service REST API")]
#[command(version)]
struct Cli {
    /// Base URL of the downstream REST service.
    #[arg(long, env = "REST_URL", default_value = "http://127.0.0.1:8080")]
    rest_url: String,

    /// GraphQL server port.
    #[arg(long, env = "GRAPHQL_PORT", default_value = "4000")]
    graphql_port: u16,

    /// Prometheus metrics port.
    #[arg(long, env = "METRICS_PORT", default_value = "9090")]
    metrics_port: u16,

    /// Enable JSON log output.
    #[arg(long, env = "JSON_LOGS")]
    json_logs: bool,

    /// Disable the GraphQL playground UI.
    #[arg(long, env = "DISABLE_PLAYGROUND")]
    disable_playground: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.json_logs);

    // Prometheus metrics exporter (optional - failures don't crash the app)
    let metrics_enabled = match format!("0.0.0.0:{}", cli.metrics_port).parse::<std::net::SocketAddr>() {
        Ok(metrics_addr) => {
            match PrometheusBuilder::new()
                .with_http_listener(metrics_addr)
                .install()
            {
                Ok(()) => {
                    init_metrics();
                    true
                }
                Err(e) => {
                    warn!("⚠️  Failed to start metrics exporter: {}. Continuing without metrics.", e);
                    false
                }
            }
        }
        Err(e) => {
            warn!("⚠️  Invalid metrics address: {}. Continuing without metrics.", e);
            false
        }
    };

    // ─────────────────────────────────────────────────────────────────────────
    // 🚀 STARTUP
    // ─────────────────────────────────────────────────────────────────────────
    info!("🚀 Starting Portico Gateway");
    debug!(rest_url = %cli.rest_url, "REST endpoint");

    reqwest::Url::parse(&cli.rest_url).context("Invalid REST service URL")?;

    // ─────────────────────────────────────────────────────────────────────────
    // 🧩 COMPOSITION ROOT
    // ─────────────────────────────────────────────────────────────────────────
    // Registration happens once, here; the frozen registry is read lock-free
    // for the rest of the process lifetime.
    let registry = DecoratorRegistry::builder().register_standard().freeze();
    info!("🧩 Registered {} filter creators", registry.len());

    let http = reqwest::Client::new();
    let client = RestClient::new(http.clone(), Arc::new(BearerAuthDecorator));
    let health = HealthChecker::new(http, cli.rest_url.clone());

    let gateway = Arc::new(GatewayContext::new(registry, client, cli.rest_url.clone()));
    let schema = build_schema(gateway);

    let graphql_config = ServerConfig {
        host: "0.0.0.0".to_string(),
        port: cli.graphql_port,
        enable_playground: !cli.disable_playground,
    };

    // ─────────────────────────────────────────────────────────────────────────
    // ✅ READY
    // ─────────────────────────────────────────────────────────────────────────
    info!("✅ Portico ready");
    info!("   ⚡ GraphQL:  http://localhost:{}/graphql", cli.graphql_port);
    if metrics_enabled {
        info!(
            "   📊 Metrics:  http://localhost:{}/metrics",
            cli.metrics_port
        );
    } else {
        info!("   📊 Metrics:  disabled");
    }
    info!("   Press Ctrl+C to stop");

    serve_with_shutdown(schema, health, graphql_config, shutdown_signal())
        .await
        .context("Server error")?;

    info!("🛑 Shutdown complete");
    Ok(())
}

/// Initialize tracing subscriber.
fn init_tracing(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if json {
        fmt().with_env_filter(filter).json().init();
    } else {
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .init();
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
