// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Docker `config.json` style registry auth document

use crate::error::Result;
use crate::types::registry::RegistryCredential;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Authentication entry keyed by login server
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AuthEntry {
    /// Base64-encoded "username:password"
    #[serde(skip_serializing_if = "String::is_empty")]
    pub auth: String,
}

impl AuthEntry {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            auth: base64::engine::general_purpose::STANDARD
                .encode(format!("{}:{}", username, password)),
        }
    }

    /// Split the auth value back into username and password
    pub fn decode(&self) -> Option<(String, String)> {
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(&self.auth)
            .ok()?;
        let decoded = String::from_utf8(decoded).ok()?;
        let (username, password) = decoded.split_once(':')?;
        Some((username.to_string(), password.to_string()))
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistryAuthDocument {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub auths: BTreeMap<String, AuthEntry>,
}

impl RegistryAuthDocument {
    /// Build a document holding the credential's first password for `login_server`
    pub fn for_credential(login_server: &str, credential: &RegistryCredential) -> Result<Self> {
        let password = credential.primary_password()?;
        let mut auths = BTreeMap::new();
        auths.insert(
            login_server.to_string(),
            AuthEntry::new(&credential.username, password),
        );
        Ok(Self { auths })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
