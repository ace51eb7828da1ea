// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for locating the API server of the active cluster.

pub mod kubeconfig;

pub use kubeconfig::current_server;
