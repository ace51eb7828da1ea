// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::REGISTRY_DOMAIN;
use crate::error::{RegistryError, Result};
use crate::types::{null_as_empty, null_as_empty_vec};
use serde::{Deserialize, Serialize};

/// One entry of the projected `az acr list` output
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistryRecord {
    /// ARM resource ID
    #[serde(default, deserialize_with = "null_as_empty")]
    pub id: String,
    /// Login server
    #[serde(default, deserialize_with = "null_as_empty")]
    pub uri: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub group: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
}

impl RegistryRecord {
    /// Decode the JSON array returned by `az acr list`
    pub fn parse_list(json: &str) -> Result<Vec<RegistryRecord>> {
        serde_json::from_str(json).map_err(RegistryError::decode("registry list"))
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CredentialPassword {
    pub name: String,
    pub value: String,
}

/// Admin credential returned by `az acr credential show`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RegistryCredential {
    #[serde(default, deserialize_with = "null_as_empty_vec")]
    pub passwords: Vec<CredentialPassword>,
    pub username: String,
}

impl RegistryCredential {
    pub fn parse(json: &str) -> Result<RegistryCredential> {
        serde_json::from_str(json).map_err(RegistryError::decode("registry credential"))
    }

    /// The first password slot, which is the one used for pulls
    pub fn primary_password(&self) -> Result<&str> {
        self.passwords
            .first()
            .map(|p| p.value.as_str())
            .ok_or_else(|| {
                RegistryError::CredentialShapeError(format!(
                    "credential for user '{}' contains no passwords",
                    self.username
                ))
            })
    }
}

/// Login server of the registry with the given name
pub fn login_server_for(name: &str) -> String {
    format!("{}.{}", name, REGISTRY_DOMAIN)
}

/// Whether a login server belongs to Azure Container Registry
pub fn is_managed_registry(login_server: &str) -> bool {
    login_server.ends_with(REGISTRY_DOMAIN)
}
