//! uptime-checker host process.
//!
//! Wraps the checker core with a config file, an endpoints file, log sinks
//! and the HTTP API.
//!
//! ```text
//!   config.toml ──▶ AppConfig ──▶ Checker::new ──▶ start()
//!   sites.json  ──▶ load_endpoints_file ─┘          │
//!                                                   ▼
//!   HTTP API (axum) ◀──── register / query ──── Checker ────▶ result stream
//!                                                   │           │
//!   Ctrl+C ─────────────────────────────────▶ stop() ◀──────────┘ (drained)
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use uptime_core::config::{load_config, AppConfig};
use uptime_core::http::ApiServer;
use uptime_core::observability::logging;
use uptime_core::Checker;

#[derive(Parser)]
#[command(name = "uptime-checker")]
#[command(about = "Periodic HTTP endpoint checker", long_about = None)]
struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON endpoints file (overrides `endpoints_file` in the config)
    #[arg(short, long)]
    endpoints: Option<PathBuf>,

    /// API bind address (overrides `api.bind_address`)
    #[arg(short, long)]
    bind: Option<String>,

    /// Print every result to stdout as a JSON line
    #[arg(long)]
    print_results: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.api.bind_address = bind;
    }

    logging::init(&config.logging)?;

    tracing::info!("uptime-checker v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        workers = config.checker.workers,
        timeout_ms = config.checker.timeout_ms,
        log_retention = config.checker.log_retention,
        api_enabled = config.api.enabled,
        "Configuration loaded"
    );

    let checker = Arc::new(Checker::new(config.checker.clone())?);

    let endpoints_file = args
        .endpoints
        .or_else(|| config.endpoints_file.as_ref().map(PathBuf::from));
    if let Some(path) = endpoints_file {
        let count = checker.load_endpoints_file(&path)?;
        tracing::info!(count, path = %path.display(), "Endpoints loaded");
    }

    checker.start();

    let stream = checker.result_stream();
    let print_results = args.print_results;
    let consumer = tokio::spawn(async move {
        let mut received = 0u64;
        while let Some(result) = stream.recv().await {
            received += 1;
            if print_results {
                match serde_json::to_string(&result) {
                    Ok(line) => println!("{line}"),
                    Err(e) => tracing::error!(error = %e, "Failed to serialize result"),
                }
            }
        }
        received
    });

    let served = if config.api.enabled {
        ApiServer::new(checker.clone())
            .serve(&config.api.bind_address, shutdown_signal())
            .await
    } else {
        shutdown_signal().await;
        Ok(())
    };

    // Drain the checker even when the API failed.
    checker.stop().await;
    let received = consumer.await?;
    tracing::info!(results = received, "Shutdown complete");

    served.map_err(|e| {
        tracing::error!(error = %e, "HTTP API failed");
        e.into()
    })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
    }
    tracing::info!("Shutdown signal received");
}
