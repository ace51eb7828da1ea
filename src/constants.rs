// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Name of the Azure CLI executable
pub const AZ_PROGRAM: &str = "az";

/// Domain suffix of registries managed by Azure Container Registry
pub const REGISTRY_DOMAIN: &str = "azurecr.io";

/// Port the AKS API server endpoint is published on
pub const API_SERVER_PORT: u16 = 443;

/// JMESPath projections passed to `--query`
pub mod queries {
    /// Projects `az aks list` output onto `ClusterRecord`
    pub const CLUSTERS: &str =
        "[].{uri:fqdn,id:servicePrincipalProfile.clientId,group:resourceGroup,name:name}";
    /// Projects `az acr list` output onto `RegistryRecord`
    pub const REGISTRIES: &str = "[].{uri:loginServer,id:id,name:name,group:resourceGroup}";
}

/// Settings for registries created on behalf of a cluster
pub mod provisioning {
    pub const SKU: &str = "Standard";
    /// Role granted to the cluster's service principal over its registry
    pub const PULL_ROLE: &str = "Reader";
}
