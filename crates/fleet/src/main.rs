mod channels;
mod config;
mod signal;
mod worker;

use anyhow::Context;
use fleet_config::constants;
use fleet_core::{Action, BranchIdentity, PipelineRequest};
use fleet_stacks::{DeploymentSettings, PipelineOrchestrator};
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use worker::PipelineWorker;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    let config_path = std::env::var("FLEET_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(constants::DEFAULT_CONFIG_PATH));
    let fleet_config = fleet_config::load_fleet_config(&config_path)
        .await
        .with_context(|| format!("Failed to load {}", config_path.display()))?;

    let clients = config::create_clients(&fleet_config).await?;
    let orchestrator = PipelineOrchestrator::new(
        clients.providers.clone(),
        DeploymentSettings::from_config(&fleet_config),
    );
    let worker = PipelineWorker {
        orchestrator,
        secrets: clients.secrets.clone(),
        github_token: config::github_token(&fleet_config),
    };

    match std::env::var("ACTION") {
        Ok(action) => run_once(&worker, &action).await,
        Err(_) => serve(&fleet_config, worker).await,
    }
}

async fn run_once(worker: &PipelineWorker, action: &str) -> anyhow::Result<()> {
    let action: Action = action.parse()?;
    let identity = BranchIdentity::new(
        required_env("OWNER")?,
        required_env("REPOSITORY")?,
        required_env("BRANCH")?,
    )?;

    tracing::info!(
        "Running {} for {}/{}",
        action,
        identity.repository(),
        identity.branch()
    );

    worker
        .process(PipelineRequest { identity, action })
        .await
        .with_context(|| format!("{} failed", action))?;

    tracing::info!("{} complete", action);

    Ok(())
}

async fn serve(
    fleet_config: &fleet_config::FleetConfig,
    worker: PipelineWorker,
) -> anyhow::Result<()> {
    let secret = config::webhook_secret(fleet_config, worker.secrets.as_ref()).await?;
    let channels = channels::create_channels();

    let webhook_router = fleet_webhook::router(fleet_webhook::WebhookConfig {
        secret,
        pipeline_tx: channels.pipeline_tx,
    });

    let worker_handle = tokio::spawn(worker::run_pipeline_worker(channels.pipeline_rx, worker));

    let api_host = std::env::var("API_HOST").unwrap_or_else(|_| constants::DEFAULT_API_HOST.into());
    let api_port = std::env::var("API_PORT").unwrap_or_else(|_| constants::DEFAULT_API_PORT.into());
    let api_addr = format!("{api_host}:{api_port}");

    tracing::info!("Starting webhook server on {api_addr}");
    let listener = TcpListener::bind(&api_addr)
        .await
        .with_context(|| format!("Failed to bind {api_addr}"))?;

    // The router owns the only sender; once the server stops the worker drains and exits.
    let server_handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(
            listener,
            webhook_router.into_make_service_with_connect_info::<std::net::SocketAddr>(),
        )
        .with_graceful_shutdown(signal::shutdown_signal())
        .await
        {
            tracing::error!("Webhook server failed: {}", e);
        }
    });

    tokio::select! {
        _ = async {
            let _ = tokio::join!(server_handle, worker_handle);
        } => {
            tracing::info!("All components shut down gracefully");
        }
        _ = async {
            signal::shutdown_signal().await;
            tokio::time::sleep(constants::SHUTDOWN_TIMEOUT).await;
        } => {
            tracing::warn!("Shutdown timeout reached, forcing exit");
        }
    }

    tracing::info!("Fleet shutdown complete");

    Ok(())
}

fn required_env(name: &str) -> anyhow::Result<String> {
    std::env::var(name).with_context(|| format!("{name} must be set"))
}
