// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::API_SERVER_PORT;
use crate::error::{RegistryError, Result};
use crate::types::null_as_empty;
use serde::{Deserialize, Serialize};

/// One entry of the projected `az aks list` output
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ClusterRecord {
    /// Service principal client ID
    #[serde(default, deserialize_with = "null_as_empty")]
    pub id: String,
    /// API server FQDN
    #[serde(default, deserialize_with = "null_as_empty")]
    pub uri: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub group: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
}

impl ClusterRecord {
    /// Decode the JSON array returned by `az aks list`
    pub fn parse_list(json: &str) -> Result<Vec<ClusterRecord>> {
        serde_json::from_str(json).map_err(RegistryError::decode("cluster list"))
    }

    /// API server endpoint as it appears in a kubeconfig
    pub fn endpoint(&self) -> String {
        format!("https://{}:{}", self.uri, API_SERVER_PORT)
    }
}

/// Identity of the cluster serving a given API endpoint.
///
/// All fields are empty when no cluster matched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClusterIdentity {
    pub resource_group: String,
    pub name: String,
    pub client_id: String,
}

impl ClusterIdentity {
    pub fn is_found(&self) -> bool {
        !self.name.is_empty()
    }
}

impl From<ClusterRecord> for ClusterIdentity {
    fn from(record: ClusterRecord) -> Self {
        Self {
            resource_group: record.group,
            name: record.name,
            client_id: record.id,
        }
    }
}
