// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Type for configuration / validation failures
//! Any result returned by the declaration or validation methods in this crate
//! is a `ConfigError`. Setting the ports of a switch never fails.

use crate::switch::dpid::DpidError;
use thiserror::Error;

/// The reasons why we may reject a topology declaration
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("A switch with name '{0}' already exists")]
    DuplicateSwitchName(String),
    #[error("Switch '{0}' has no ports configured")]
    MissingPorts(String),
    #[error("Switch registered as '{0}' is named '{1}'")]
    KeyMismatch(String, String),
    #[error("Bad datapath id: {0}")]
    BadDpid(#[from] DpidError),
}

/// Result-like type for configurations
pub type ConfigResult = Result<(), ConfigError>;

#[must_use]
pub fn stringify(conf_result: &ConfigResult) -> String {
    match conf_result {
        Ok(()) => "Ok".to_string(),
        Err(e) => format!("FAILED: {e}"),
    }
}
