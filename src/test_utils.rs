// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for scripting Azure CLI responses.

use crate::command::{CommandRequest, CommandRunner};
use crate::error::{RegistryError, Result};
use std::sync::{Arc, Mutex};

/// A mock command runner that returns predefined output based on the argument list.
#[derive(Clone, Default)]
pub struct MockRunner {
    responses: Arc<Mutex<Vec<(String, std::result::Result<String, String>)>>>,
    calls: Arc<Mutex<Vec<CommandRequest>>>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Succeed with `stdout` for commands whose arguments start with `prefix`
    pub fn on(self, prefix: &str, stdout: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push((prefix.to_string(), Ok(stdout.to_string())));
        self
    }

    /// Fail with an invocation error for commands whose arguments start with `prefix`
    pub fn fail(self, prefix: &str, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push((prefix.to_string(), Err(message.to_string())));
        self
    }

    /// All requests seen so far, in order
    pub fn calls(&self) -> Vec<CommandRequest> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of requests whose arguments start with `prefix`
    pub fn call_count(&self, prefix: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.args.join(" ").starts_with(prefix))
            .count()
    }

    /// The last request whose arguments start with `prefix`
    pub fn last_call(&self, prefix: &str) -> Option<CommandRequest> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|r| r.args.join(" ").starts_with(prefix))
            .cloned()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, request: &CommandRequest) -> Result<String> {
        self.calls.lock().unwrap().push(request.clone());

        let line = request.args.join(" ");
        let responses = self.responses.lock().unwrap();

        // Longest matching prefix wins
        let response = responses
            .iter()
            .filter(|(prefix, _)| line.starts_with(prefix.as_str()))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(_, response)| response.clone());

        match response {
            Some(Ok(stdout)) => Ok(stdout),
            Some(Err(message)) => Err(RegistryError::InvocationError(message)),
            None => Err(RegistryError::InvocationError(format!(
                "no response scripted for '{}'",
                request
            ))),
        }
    }
}

/// Create a mock `az aks list` entry
pub fn cluster_json(uri: &str, client_id: &str, group: &str, name: &str) -> serde_json::Value {
    serde_json::json!({
        "uri": uri,
        "id": client_id,
        "group": group,
        "name": name
    })
}

/// Create a mock `az acr list` entry
pub fn registry_json(uri: &str, id: &str, group: &str, name: &str) -> serde_json::Value {
    serde_json::json!({
        "uri": uri,
        "id": id,
        "group": group,
        "name": name
    })
}

/// Create a mock `az acr credential show` response
pub fn credential_json(username: &str, passwords: &[&str]) -> String {
    let passwords: Vec<_> = passwords
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let name = if i == 0 {
                "password".to_string()
            } else {
                format!("password{}", i + 1)
            };
            serde_json::json!({"name": name, "value": value})
        })
        .collect();

    serde_json::json!({
        "passwords": passwords,
        "username": username
    })
    .to_string()
}
