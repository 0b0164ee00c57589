// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::cleanup::GroupFilter;
use clap::Parser;

/// Reset status.storedVersions of CustomResourceDefinitions to their storage version
#[derive(Parser, Debug, Clone)]
#[command(name = "crd-storedversion-cleanup", version)]
pub struct Args {
    /// The spec.group that should be filtered. Matches to the suffix so api.io goes for a.api.io and b.api.io
    #[arg(long, default_value = "")]
    pub group: String,

    /// Send status updates as server-side dry-run requests
    #[arg(long)]
    pub dry_run: bool,
}

/// Cleanup configuration, built once and handed to the orchestrator
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub filter: GroupFilter,
    pub dry_run: bool,
}

impl Config {
    pub fn from_args(args: &Args) -> Self {
        Config {
            filter: GroupFilter::from_group(&args.group),
            dry_run: args.dry_run,
        }
    }
}
