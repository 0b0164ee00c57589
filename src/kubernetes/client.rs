// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes client creation

use crate::error::{CleanupError, Result};
use kube::Client;
use tracing::{debug, instrument};

/// Create a client from the local kubeconfig or the in-cluster service account
#[instrument]
pub async fn create_client() -> Result<Client> {
    let client = Client::try_default()
        .await
        .map_err(CleanupError::ClientError)?;

    debug!("Kubernetes client created");
    Ok(client)
}
