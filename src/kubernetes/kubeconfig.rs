// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! API server discovery from the active kubeconfig context

use crate::error::{RegistryError, Result};
use kube::config::Kubeconfig;
use std::fs;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Server URL of the current context, read from `path` or the default kubeconfig
#[instrument]
pub fn current_server(path: Option<&Path>) -> Result<String> {
    let kubeconfig = match path {
        Some(path) => {
            let contents = fs::read_to_string(path).map_err(|e| {
                RegistryError::KubeconfigError(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                ))
            })?;
            parse_kubeconfig(&contents)?
        }
        None => Kubeconfig::read().map_err(|e| {
            RegistryError::KubeconfigError(format!("Failed to load kubeconfig: {}", e))
        })?,
    };

    let server = server_for_current_context(&kubeconfig)?;
    info!("Using API server {} from kubeconfig", server);
    Ok(server)
}

/// Parse a kubeconfig document
pub fn parse_kubeconfig(contents: &str) -> Result<Kubeconfig> {
    serde_yaml::from_str(contents).map_err(|e| RegistryError::KubeconfigError(e.to_string()))
}

/// Resolve `current-context` -> context -> cluster -> server
pub fn server_for_current_context(kubeconfig: &Kubeconfig) -> Result<String> {
    let Some(context_name) = kubeconfig.current_context.as_deref() else {
        return Err(RegistryError::KubeconfigError(
            "no current-context set".to_string(),
        ));
    };

    let Some(context) = kubeconfig
        .contexts
        .iter()
        .find(|c| c.name == context_name)
        .and_then(|c| c.context.as_ref())
    else {
        return Err(RegistryError::KubeconfigError(format!(
            "context '{}' not found",
            context_name
        )));
    };

    debug!("Context '{}' uses cluster '{}'", context_name, context.cluster);

    kubeconfig
        .clusters
        .iter()
        .find(|c| c.name == context.cluster)
        .and_then(|c| c.cluster.as_ref())
        .and_then(|c| c.server.clone())
        .ok_or_else(|| {
            RegistryError::KubeconfigError(format!(
                "cluster '{}' has no server",
                context.cluster
            ))
        })
}
