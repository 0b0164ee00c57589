// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes client creation and CRD access.

pub mod client;
pub mod repository;

pub use client::create_client;
pub use repository::{CrdRepository, KubeCrdRepository};
