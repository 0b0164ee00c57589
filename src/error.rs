// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CleanupError {
    #[error("Failed to create Kubernetes client: {0}")]
    ClientError(#[source] kube::Error),

    #[error("Failed to list CustomResourceDefinitions: {0}")]
    ListError(#[source] kube::Error),

    #[error("no storage version name found")]
    NoStorageVersion,

    #[error("Failed to update status: {0}")]
    PersistError(#[source] kube::Error),

    #[error("Cancelled before completion")]
    Cancelled,
}

impl CleanupError {
    /// Errors that abort the whole run instead of a single CRD
    pub fn is_fatal(&self) -> bool {
        matches!(self, CleanupError::ClientError(_) | CleanupError::ListError(_))
    }
}

pub type Result<T> = std::result::Result<T, CleanupError>;
