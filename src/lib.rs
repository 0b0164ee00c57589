// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod cleanup;
pub mod config;
pub mod constants;
pub mod error;
pub mod kubernetes;
