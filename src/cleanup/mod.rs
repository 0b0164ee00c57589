// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Filtering, storage version resolution and the cleanup pass itself.

pub mod filter;
pub mod orchestrator;
pub mod storage;

pub use filter::GroupFilter;
pub use orchestrator::{CleanupOrchestrator, CleanupReport, Outcome, RecordOutcome};
pub use storage::{cleanup_stored_versions, storage_version, stored_versions};
