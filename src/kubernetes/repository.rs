// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Access to CustomResourceDefinitions and their status subresource

use crate::cleanup::stored_versions;
use crate::constants::FIELD_MANAGER;
use crate::error::{CleanupError, Result};
use async_trait::async_trait;
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use kube::{
    api::{ListParams, Patch, PatchParams},
    Api, Client, ResourceExt,
};
use serde_json::json;
use tracing::{debug, instrument};

/// The cluster surface the cleanup runs against
#[async_trait]
pub trait CrdRepository: Send + Sync {
    /// All CRDs visible to the caller
    async fn list(&self) -> Result<Vec<CustomResourceDefinition>>;

    /// Persist `status.storedVersions` of `crd`. With `dry_run` the server
    /// validates and echoes the result without committing it.
    async fn update_status(
        &self,
        crd: &CustomResourceDefinition,
        dry_run: bool,
    ) -> Result<CustomResourceDefinition>;
}

pub struct KubeCrdRepository {
    api: Api<CustomResourceDefinition>,
}

impl KubeCrdRepository {
    pub fn new(client: Client) -> Self {
        Self {
            api: Api::all(client),
        }
    }
}

#[async_trait]
impl CrdRepository for KubeCrdRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<CustomResourceDefinition>> {
        let crds = self
            .api
            .list(&ListParams::default())
            .await
            .map_err(CleanupError::ListError)?;

        debug!("Listed {} CustomResourceDefinitions", crds.items.len());
        Ok(crds.items)
    }

    #[instrument(skip(self, crd), fields(crd = %crd.name_any()))]
    async fn update_status(
        &self,
        crd: &CustomResourceDefinition,
        dry_run: bool,
    ) -> Result<CustomResourceDefinition> {
        let pp = PatchParams {
            dry_run,
            field_manager: Some(FIELD_MANAGER.to_string()),
            ..Default::default()
        };

        self.api
            .patch_status(&crd.name_any(), &pp, &Patch::Merge(status_patch(crd)))
            .await
            .map_err(CleanupError::PersistError)
    }
}

/// Merge patch carrying the stored versions. The resource version makes the
/// server reject the write if the CRD changed since it was listed.
fn status_patch(crd: &CustomResourceDefinition) -> serde_json::Value {
    let mut patch = json!({
        "status": {
            "storedVersions": stored_versions(crd)
        }
    });

    if let Some(resource_version) = crd.resource_version() {
        patch["metadata"] = json!({ "resourceVersion": resource_version });
    }

    patch
}
