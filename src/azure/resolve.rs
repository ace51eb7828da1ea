// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster to registry resolution for a kube API server

use super::{AzureRunner, ResolvedRegistry};
use crate::command::CommandRunner;
use crate::error::{RegistryError, Result};
use crate::types::{is_managed_registry, ClusterIdentity};
use tracing::{info, instrument};

/// The cluster behind an API server and the registry resolved for it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterRegistry {
    /// Empty when the registry is outside ACR and no cluster lookup was needed
    pub cluster: ClusterIdentity,
    pub registry: ResolvedRegistry,
}

impl<R: CommandRunner> AzureRunner<R> {
    /// Resolve the registry for the cluster serving `server`.
    ///
    /// An explicit `registry` outside ACR is passed through without looking the
    /// cluster up. Otherwise an unknown server is [`RegistryError::ClusterNotFound`].
    #[instrument(skip(self))]
    pub fn resolve_for_server(
        &self,
        server: &str,
        subscription: Option<&str>,
        registry: &str,
    ) -> Result<ClusterRegistry> {
        if !registry.is_empty() && !is_managed_registry(registry) {
            info!("Registry {} is not an ACR registry, skipping cluster lookup", registry);
            return Ok(ClusterRegistry {
                cluster: ClusterIdentity::default(),
                registry: ResolvedRegistry {
                    login_server: registry.to_string(),
                    ..Default::default()
                },
            });
        }

        let cluster = self.find_cluster(server)?;
        if !cluster.is_found() {
            return Err(RegistryError::ClusterNotFound(server.to_string()));
        }

        let registry =
            self.resolve_registry(subscription, &cluster.resource_group, &cluster.name, registry)?;

        Ok(ClusterRegistry { cluster, registry })
    }
}
