// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Selection of the CRDs eligible for cleanup.

use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use std::fmt;

/// Selects CRDs by their `spec.group`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GroupFilter {
    #[default]
    MatchAll,
    /// Raw string suffix, so `api.io` matches both `a.api.io` and `fooapi.io`
    MatchGroupSuffix(String),
}

impl GroupFilter {
    /// An empty group selects every CRD
    pub fn from_group(group: &str) -> Self {
        if group.is_empty() {
            GroupFilter::MatchAll
        } else {
            GroupFilter::MatchGroupSuffix(group.to_string())
        }
    }

    pub fn matches(&self, crd: &CustomResourceDefinition) -> bool {
        self.matches_group(&crd.spec.group)
    }

    pub fn matches_group(&self, group: &str) -> bool {
        match self {
            GroupFilter::MatchAll => true,
            GroupFilter::MatchGroupSuffix(suffix) => group.ends_with(suffix.as_str()),
        }
    }
}

impl fmt::Display for GroupFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupFilter::MatchAll => write!(f, "*"),
            GroupFilter::MatchGroupSuffix(suffix) => write!(f, "*{}", suffix),
        }
    }
}
