// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Drives one cleanup pass over every CRD in the cluster.

use crate::cleanup::storage::{cleanup_stored_versions, stored_versions};
use crate::config::Config;
use crate::error::{CleanupError, Result};
use crate::kubernetes::CrdRepository;
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use kube::ResourceExt;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument, warn};

/// Terminal state of a single CRD within a pass
#[derive(Debug)]
pub enum Outcome {
    /// Rejected by the group filter
    Skipped,
    /// Status written (or validated, in dry-run mode)
    Succeeded { stored_versions: Vec<String> },
    Failed(CleanupError),
}

#[derive(Debug)]
pub struct RecordOutcome {
    pub name: String,
    pub outcome: Outcome,
}

/// Per-CRD outcomes in processing order
#[derive(Debug, Default)]
pub struct CleanupReport {
    pub dry_run: bool,
    pub outcomes: Vec<RecordOutcome>,
}

impl CleanupReport {
    fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            outcomes: Vec::new(),
        }
    }

    pub fn outcome(&self, name: &str) -> Option<&Outcome> {
        self.outcomes
            .iter()
            .find(|o| o.name == name)
            .map(|o| &o.outcome)
    }

    pub fn succeeded(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Succeeded { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed(_)))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Skipped))
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.outcome)).count()
    }

    pub fn log_summary(&self) {
        info!(
            "Processed {} CRDs{}: {} updated, {} failed, {} skipped",
            self.outcomes.len(),
            if self.dry_run { " (dry run)" } else { "" },
            self.succeeded(),
            self.failed(),
            self.skipped()
        );
    }
}

/// Filters, resolves and persists the stored versions of each CRD.
/// A failing CRD never stops the pass; only listing failures are fatal.
pub struct CleanupOrchestrator<R> {
    repository: R,
    config: Config,
}

impl<R: CrdRepository> CleanupOrchestrator<R> {
    pub fn new(repository: R, config: Config) -> Self {
        Self { repository, config }
    }

    pub async fn run(&self, cancel: &CancellationToken) -> Result<CleanupReport> {
        info!(
            "Cleaning up storedVersions: group filter {}, dry run {}",
            self.config.filter, self.config.dry_run
        );

        let crds = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(CleanupError::Cancelled),
            crds = self.repository.list() => crds?,
        };

        info!("Found {} CustomResourceDefinitions", crds.len());

        let total = crds.len();
        let mut report = CleanupReport::new(self.config.dry_run);

        // Each CRD is moved into its own step, so mutations never leak across records
        for (index, crd) in crds.into_iter().enumerate() {
            if cancel.is_cancelled() {
                warn!(
                    "Cancellation requested, {} of {} CRDs not processed",
                    total - index,
                    total
                );
                break;
            }

            let name = crd.name_any();
            let outcome = self.cleanup_crd(crd, cancel).await;
            report.outcomes.push(RecordOutcome { name, outcome });
        }

        report.log_summary();
        Ok(report)
    }

    #[instrument(skip(self, crd, cancel), fields(crd = %crd.name_any()))]
    async fn cleanup_crd(
        &self,
        mut crd: CustomResourceDefinition,
        cancel: &CancellationToken,
    ) -> Outcome {
        let name = crd.name_any();

        if !self.config.filter.matches(&crd) {
            debug!(
                "{}: group {} does not match {}, skipping",
                name, crd.spec.group, self.config.filter
            );
            return Outcome::Skipped;
        }

        if let Err(e) = cleanup_stored_versions(&mut crd) {
            error!("{}: {}", name, e);
            return Outcome::Failed(e);
        }

        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(CleanupError::Cancelled),
            updated = self.repository.update_status(&crd, self.config.dry_run) => updated,
        };

        match result {
            Ok(updated) => {
                let stored_versions = stored_versions(&updated);
                if self.config.dry_run {
                    info!(
                        "{}: updated status.storedVersions (dry run): {:?}",
                        name, stored_versions
                    );
                } else {
                    info!("{}: updated status.storedVersions: {:?}", name, stored_versions);
                }
                Outcome::Succeeded { stored_versions }
            }
            Err(e) => {
                error!("{}: {}", name, e);
                Outcome::Failed(e)
            }
        }
    }
}
