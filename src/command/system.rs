// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Command runner backed by `std::process`

use super::{CommandRequest, CommandRunner};
use crate::error::{RegistryError, Result};
use std::process::Command;
use tracing::{debug, instrument};

/// Spawns real processes and waits for them to exit
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    #[instrument(skip(self, request), fields(command = %request))]
    fn run(&self, request: &CommandRequest) -> Result<String> {
        debug!("Running command");

        let output = Command::new(&request.program)
            .args(&request.args)
            .output()
            .map_err(|e| {
                RegistryError::InvocationError(format!("failed to start '{}': {}", request, e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RegistryError::InvocationError(format!(
                "'{}' exited with {}: {}",
                request,
                output.status,
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout.trim().to_string())
    }
}
