// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crd_storedversion_cleanup::cleanup::CleanupOrchestrator;
use crd_storedversion_cleanup::config::{Args, Config};
use crd_storedversion_cleanup::constants::DEFAULT_LOG_FILTER;
use crd_storedversion_cleanup::kubernetes::{create_client, KubeCrdRepository};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = Config::from_args(&args);

    let client = create_client().await?;
    info!("Connected to Kubernetes cluster");

    let cancel = CancellationToken::new();
    let on_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupt received, stopping after the current CRD");
            on_signal.cancel();
        }
    });

    let orchestrator = CleanupOrchestrator::new(KubeCrdRepository::new(client), config);
    orchestrator.run(&cancel).await?;

    Ok(())
}
