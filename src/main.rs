// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use aks_registry::azure::{AzureRunner, ClusterRegistry};
use aks_registry::config::Config;
use aks_registry::kubernetes::current_server;

fn main() -> Result<()> {
    // Logs go to stderr, stdout only carries the auth document
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;

    let server = match config.server.clone() {
        Some(server) => server,
        None => current_server(config.kubeconfig.as_deref())?,
    };
    info!("Resolving registry for cluster at {}", server);

    let az = AzureRunner::new();

    let ClusterRegistry { cluster, registry } = az.resolve_for_server(
        &server,
        config.registry_subscription.as_deref(),
        &config.registry,
    )?;
    info!("Using registry {}", registry.login_server);

    if config.assign_role {
        az.assign_pull_role(&cluster.client_id, &registry.registry_id);
    }

    if registry.docker_config.is_empty() {
        warn!(
            "Registry {} is not managed by ACR, no credential produced",
            registry.login_server
        );
    } else {
        println!("{}", registry.docker_config);
    }

    Ok(())
}
