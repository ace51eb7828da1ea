// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! AKS cluster lookup by API server endpoint

use super::AzureRunner;
use crate::command::{CommandRequest, CommandRunner};
use crate::constants::queries;
use crate::error::Result;
use crate::types::{ClusterIdentity, ClusterRecord};
use tracing::{debug, info, instrument};

impl<R: CommandRunner> AzureRunner<R> {
    /// Find the resource group, name and service principal client ID of the
    /// cluster serving `server` (`https://<fqdn>:443`).
    ///
    /// Returns an empty [`ClusterIdentity`] when no listed cluster matches.
    #[instrument(skip(self))]
    pub fn find_cluster(&self, server: &str) -> Result<ClusterIdentity> {
        let request = CommandRequest::az(["aks", "list", "--query", queries::CLUSTERS]);
        let output = self.runner.run(&request)?;
        let clusters = ClusterRecord::parse_list(&output)?;

        debug!("Azure CLI listed {} clusters", clusters.len());

        match clusters.into_iter().find(|c| c.endpoint() == server) {
            Some(cluster) => {
                info!(
                    "Found AKS cluster '{}' in resource group '{}'",
                    cluster.name, cluster.group
                );
                Ok(cluster.into())
            }
            None => {
                info!("No AKS cluster serves {}", server);
                Ok(ClusterIdentity::default())
            }
        }
    }
}
