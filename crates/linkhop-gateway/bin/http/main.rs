mod cli;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use linkhop_core::Repository;
use linkhop_gateway::{App, AppState};
use linkhop_redirector::RedirectorService;
use linkhop_shortener::{RandomGenerator, RandomGeneratorSettings, ShortenerService};
use linkhop_storage::{InMemoryRepository, MySqlRepository};
use linkhop_telemetry::TelemetryConfig;
use tokio::signal;
use tracing::{error, info};

use crate::cli::{StorageBackendArg, CLI};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::parse();

    let telemetry = TelemetryConfig::builder()
        .service_name("linkhop-gateway")
        .log_format(config.log_format.into())
        .otlp_endpoint(config.otlp_endpoint.clone());
    let _telemetry = linkhop_telemetry::init(telemetry.build())?;

    info!(
        listen_addr = %config.listen_addr,
        base_url = %config.base_url,
        storage_backend = %config.storage,
        code_length = config.code_length,
        "starting gateway"
    );

    let generator = RandomGenerator::new(
        RandomGeneratorSettings::builder()
            .length(usize::from(config.code_length))
            .build(),
    )?;

    let state = match config.storage {
        StorageBackendArg::InMemory => {
            build_state(InMemoryRepository::new(), generator, &config.base_url)
        }
        StorageBackendArg::Mysql => {
            let mysql_dsn = config
                .mysql_dsn
                .as_deref()
                .context("mysql dsn is required when storage backend is mysql")?;
            let repository = MySqlRepository::connect(mysql_dsn)
                .await
                .context("failed to connect to mysql")?;
            repository
                .migrate()
                .await
                .context("failed to apply mysql schema")?;
            build_state(repository, generator, &config.base_url)
        }
    };

    serve(config.listen_addr, state).await
}

fn build_state<R: Repository>(
    repository: R,
    generator: RandomGenerator,
    base_url: &str,
) -> AppState {
    let repository = Arc::new(repository);
    AppState::new(
        Arc::new(ShortenerService::from_shared(Arc::clone(&repository), generator)),
        Arc::new(RedirectorService::from_shared(repository)),
        base_url,
    )
}

async fn serve(listen_addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(listen_addr)
        .await
        .with_context(|| format!("failed to bind {listen_addr}"))?;
    info!(listen_addr = %listener.local_addr()?, "gateway listening");

    axum::serve(listener, App::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("gateway shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received ctrl-c, shutting down"),
        _ = terminate => info!("received SIGTERM, shutting down"),
    }
}
