// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! External command execution used to drive the Azure CLI.

pub mod system;

pub use system::SystemCommandRunner;

use crate::constants::AZ_PROGRAM;
use crate::error::Result;
use std::fmt;

/// A single invocation of an external program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandRequest {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Build an `az` invocation
    pub fn az<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(AZ_PROGRAM, args)
    }

    /// Append `--subscription <id>` when a subscription override is given
    pub fn with_subscription(mut self, subscription: Option<&str>) -> Self {
        if let Some(subscription) = subscription.filter(|s| !s.is_empty()) {
            self.args.push("--subscription".to_string());
            self.args.push(subscription.to_string());
        }
        self
    }
}

impl fmt::Display for CommandRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Runs a command to completion and returns its captured standard output.
///
/// Implementations block until the process exits and never retry.
pub trait CommandRunner {
    fn run(&self, request: &CommandRequest) -> Result<String>;
}
