// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! AKS cluster and ACR registry discovery on top of the Azure CLI.

pub mod cluster;
pub mod registry;
pub mod resolve;
pub mod role;

pub use registry::{ProvisionedRegistry, RegistryLookup, ResolvedRegistry};
pub use resolve::ClusterRegistry;

use crate::command::{CommandRunner, SystemCommandRunner};

/// Drives the Azure CLI through a [`CommandRunner`]
#[derive(Debug, Clone, Default)]
pub struct AzureRunner<R = SystemCommandRunner> {
    runner: R,
}

impl AzureRunner {
    /// Runner that executes the real `az` binary
    pub fn new() -> Self {
        Self::with_runner(SystemCommandRunner)
    }
}

impl<R: CommandRunner> AzureRunner<R> {
    pub fn with_runner(runner: R) -> Self {
        Self { runner }
    }
}
