// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Azure CLI response schemas and the registry auth document.

pub mod auth;
pub mod cluster;
pub mod registry;

pub use auth::{AuthEntry, RegistryAuthDocument};
pub use cluster::{ClusterIdentity, ClusterRecord};
pub use registry::{
    is_managed_registry, login_server_for, CredentialPassword, RegistryCredential, RegistryRecord,
};

use serde::{Deserialize, Deserializer};

/// The CLI projects missing attributes as `null`
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) fn null_as_empty_vec<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
