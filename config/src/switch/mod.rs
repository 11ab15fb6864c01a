// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Generic switch declaration: the attributes every switch stanza carries,
//! regardless of the kind of switch being declared.

pub mod dpid;

use derive_builder::Builder;
use dpid::Dpid;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ConfigResult;

/// Attributes common to all declared switches. The name is given when the
/// switch is declared and never changes afterwards. A switch may be declared
/// without a name.
#[derive(Builder, Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[builder(default)]
pub struct SwitchConfig {
    #[builder(setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[builder(setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    dpid: Option<Dpid>,
}

impl SwitchConfig {
    #[must_use]
    pub fn new(name: Option<&str>) -> Self {
        Self {
            name: name.map(str::to_owned),
            dpid: None,
        }
    }
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
    #[must_use]
    pub fn dpid(&self) -> Option<Dpid> {
        self.dpid
    }
    pub fn set_dpid(&mut self, dpid: &str) -> ConfigResult {
        let dpid: Dpid = dpid.parse()?;
        debug!(
            "Switch {}: datapath id set to {}",
            self.name().unwrap_or("(unnamed)"),
            dpid.short()
        );
        self.dpid = Some(dpid);
        Ok(())
    }
}
