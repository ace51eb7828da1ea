// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Resolver configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// AKS API server endpoint, e.g. `https://<fqdn>:443`. Read from kubeconfig when unset.
    pub server: Option<String>,
    /// Kubeconfig file to read the server from instead of the default lookup
    pub kubeconfig: Option<PathBuf>,
    /// Explicit registry login server; empty means `<cluster>.azurecr.io`
    pub registry: String,
    /// Subscription the registry lives in, when different from the active one
    pub registry_subscription: Option<String>,
    pub assign_role: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from `lookup`; empty values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let assign_role = match non_empty("ASSIGN_REGISTRY_ROLE") {
            Some(v) => v
                .parse()
                .with_context(|| format!("ASSIGN_REGISTRY_ROLE must be true or false, got '{}'", v))?,
            None => true,
        };

        Ok(Config {
            server: non_empty("AKS_SERVER"),
            kubeconfig: non_empty("AKS_KUBECONFIG").map(PathBuf::from),
            registry: non_empty("AZURE_REGISTRY").unwrap_or_default(),
            registry_subscription: non_empty("AZURE_REGISTRY_SUBSCRIPTION"),
            assign_role,
        })
    }
}
