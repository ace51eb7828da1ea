// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("No AKS cluster found for API server {0}")]
    ClusterNotFound(String),

    #[error("Azure CLI invocation failed: {0}")]
    InvocationError(String),

    #[error("Failed to decode {kind} response: {source}")]
    DecodeError {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unexpected registry credential shape: {0}")]
    CredentialShapeError(String),

    #[error("Failed to encode registry auth document: {0}")]
    EncodeError(#[from] serde_json::Error),

    #[error("Failed to parse kubeconfig: {0}")]
    KubeconfigError(String),
}

impl RegistryError {
    pub(crate) fn decode(kind: &'static str) -> impl FnOnce(serde_json::Error) -> Self {
        move |source| RegistryError::DecodeError { kind, source }
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;
