// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use super::AzureRunner;
use crate::command::{CommandRequest, CommandRunner};
use crate::constants::provisioning::PULL_ROLE;
use tracing::{debug, info, instrument, warn};

impl<R: CommandRunner> AzureRunner<R> {
    /// Grant `client` read access over the registry `scope`.
    ///
    /// Best effort: failures are logged and otherwise ignored.
    #[instrument(skip(self))]
    pub fn assign_pull_role(&self, client: &str, scope: &str) {
        if client.is_empty() || scope.is_empty() {
            debug!("Missing client or registry scope, skipping role assignment");
            return;
        }

        let request = CommandRequest::az([
            "role",
            "assignment",
            "create",
            "--assignee",
            client,
            "--role",
            PULL_ROLE,
            "--scope",
            scope,
        ]);

        match self.runner.run(&request) {
            Ok(_) => info!("Assigned role '{}' to '{}'", PULL_ROLE, client),
            Err(e) => warn!("Ignoring failed role assignment for '{}': {}", client, e),
        }
    }
}
