// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! ACR lookup, creation and credential retrieval

use super::AzureRunner;
use crate::command::{CommandRequest, CommandRunner};
use crate::constants::{provisioning, queries};
use crate::error::{RegistryError, Result};
use crate::types::{
    is_managed_registry, login_server_for, RegistryAuthDocument, RegistryCredential,
    RegistryRecord,
};
use tracing::{debug, info, instrument, warn};

/// Outcome of searching the registry list for a login server
#[derive(Debug)]
pub enum RegistryLookup {
    Found(RegistryRecord),
    NotFound,
    /// The list call itself failed; treated like `NotFound` by the resolver
    ListFailed(RegistryError),
}

/// A registry created by [`AzureRunner::create_registry`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionedRegistry {
    pub id: String,
    pub login_server: String,
}

/// Result of [`AzureRunner::resolve_registry`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedRegistry {
    /// Serialized registry auth document; empty for registries outside ACR
    pub docker_config: String,
    pub login_server: String,
    /// ARM resource ID; empty for registries outside ACR
    pub registry_id: String,
}

impl<R: CommandRunner> AzureRunner<R> {
    /// Resolve the registry for a cluster, creating `<cluster>.azurecr.io` in the
    /// cluster's resource group when it does not exist yet.
    ///
    /// `registry` is an explicit login server, or empty for the cluster default.
    /// Login servers outside ACR are returned untouched with no credential.
    #[instrument(skip(self))]
    pub fn resolve_registry(
        &self,
        subscription: Option<&str>,
        resource_group: &str,
        cluster_name: &str,
        registry: &str,
    ) -> Result<ResolvedRegistry> {
        let login_server = if registry.is_empty() {
            login_server_for(cluster_name)
        } else {
            registry.to_string()
        };

        if !is_managed_registry(&login_server) {
            info!("Registry {} is not an ACR registry, skipping", login_server);
            return Ok(ResolvedRegistry {
                login_server,
                ..Default::default()
            });
        }

        let (group, name, registry_id, login_server) =
            match self.lookup_registry(subscription, &login_server)? {
                RegistryLookup::Found(record) => {
                    debug!("Using existing registry {}", record.id);
                    (record.group, record.name, record.id, login_server)
                }
                lookup => {
                    if let RegistryLookup::ListFailed(e) = lookup {
                        warn!("Could not list registries, assuming {} does not exist: {}", login_server, e);
                    }
                    let created = self.create_registry(subscription, resource_group, cluster_name)?;
                    (
                        resource_group.to_string(),
                        cluster_name.to_string(),
                        created.id,
                        created.login_server,
                    )
                }
            };

        let docker_config = self.registry_auth_document(subscription, &group, &name)?;

        Ok(ResolvedRegistry {
            docker_config,
            login_server,
            registry_id,
        })
    }

    /// Search the registries visible to `subscription` for `login_server`.
    ///
    /// A failing list call is reported as [`RegistryLookup::ListFailed`]; an
    /// unparseable list is an error.
    #[instrument(skip(self))]
    pub fn lookup_registry(
        &self,
        subscription: Option<&str>,
        login_server: &str,
    ) -> Result<RegistryLookup> {
        let request = CommandRequest::az(["acr", "list", "--query", queries::REGISTRIES])
            .with_subscription(subscription);

        let output = match self.runner.run(&request) {
            Ok(output) => output,
            Err(e) => return Ok(RegistryLookup::ListFailed(e)),
        };

        let registries = RegistryRecord::parse_list(&output)?;

        Ok(registries
            .into_iter()
            .find(|r| r.uri == login_server)
            .map_or(RegistryLookup::NotFound, RegistryLookup::Found))
    }

    /// Create an admin-enabled registry named `name` in `resource_group`
    #[instrument(skip(self))]
    pub fn create_registry(
        &self,
        subscription: Option<&str>,
        resource_group: &str,
        name: &str,
    ) -> Result<ProvisionedRegistry> {
        let request = CommandRequest::az([
            "acr",
            "create",
            "-g",
            resource_group,
            "-n",
            name,
            "--sku",
            provisioning::SKU,
            "--admin-enabled",
            "--query",
            "id",
            "-o",
            "tsv",
        ])
        .with_subscription(subscription);

        info!("Creating registry {} in resource group {}", name, resource_group);

        let id = self.runner.run(&request).inspect_err(|_| {
            info!(
                "Failed to create registry {} in resource group {}",
                name, resource_group
            )
        })?;

        Ok(ProvisionedRegistry {
            id,
            login_server: login_server_for(name),
        })
    }

    /// Fetch the admin credential of a registry as a serialized auth document
    #[instrument(skip(self))]
    pub fn registry_auth_document(
        &self,
        subscription: Option<&str>,
        resource_group: &str,
        name: &str,
    ) -> Result<String> {
        let request =
            CommandRequest::az(["acr", "credential", "show", "-g", resource_group, "-n", name])
                .with_subscription(subscription);

        let output = self.runner.run(&request).inspect_err(|_| {
            info!(
                "Failed to get credential for registry {} in resource group {}",
                name, resource_group
            )
        })?;

        let credential = RegistryCredential::parse(&output)?;
        RegistryAuthDocument::for_credential(&login_server_for(name), &credential)?.to_json()
    }
}
