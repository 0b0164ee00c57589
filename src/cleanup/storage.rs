// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Storage version resolution and the `status.storedVersions` rewrite.

use crate::error::{CleanupError, Result};
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;

/// Name of the version flagged as storage. The first flagged entry wins.
pub fn storage_version(crd: &CustomResourceDefinition) -> Result<&str> {
    crd.spec
        .versions
        .iter()
        .find(|v| v.storage)
        .map(|v| v.name.as_str())
        .ok_or(CleanupError::NoStorageVersion)
}

/// Replace `status.storedVersions` with the storage version only.
/// The CRD is left untouched when no storage version exists.
pub fn cleanup_stored_versions(crd: &mut CustomResourceDefinition) -> Result<String> {
    let name = storage_version(crd)?.to_string();

    crd.status.get_or_insert_with(Default::default).stored_versions = Some(vec![name.clone()]);

    Ok(name)
}

/// Current `status.storedVersions`, empty when no status has been reported
pub fn stored_versions(crd: &CustomResourceDefinition) -> Vec<String> {
    crd.status
        .as_ref()
        .and_then(|s| s.stored_versions.clone())
        .unwrap_or_default()
}
