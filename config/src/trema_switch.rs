// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! The `trema_switch` stanza: a software switch declared by name, with its
//! ports given as a comma-separated list.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ports::{IndexedPorts, PortEntry, PortFormatter, port_entries};
use crate::switch::SwitchConfig;
use crate::switch::dpid::Dpid;
use crate::{ConfigError, ConfigResult};

/// A declared software switch.
///
/// The ports are absent until [`TremaSwitch::set_ports`] is called. Each call
/// replaces the stored ports entirely. Mutation requires exclusive access, so a
/// declaration has a single writer: the code evaluating the stanza.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
pub struct TremaSwitch {
    #[serde(flatten)]
    base: SwitchConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ports: Option<String>,
}

impl TremaSwitch {
    #[must_use]
    pub fn new(name: Option<&str>) -> Self {
        Self::from_config(SwitchConfig::new(name))
    }
    #[must_use]
    pub fn from_config(base: SwitchConfig) -> Self {
        Self { base, ports: None }
    }
    #[must_use]
    pub fn base(&self) -> &SwitchConfig {
        &self.base
    }
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.base.name()
    }
    #[must_use]
    pub fn dpid(&self) -> Option<Dpid> {
        self.base.dpid()
    }
    #[must_use]
    pub fn ports(&self) -> Option<&str> {
        self.ports.as_deref()
    }

    /// Set the ports from a comma-separated list: `"eth0,eth1"` is stored as
    /// `"eth0/1,eth1/2"`. Never fails.
    pub fn set_ports(&mut self, ports: &str) {
        self.set_ports_with(ports, &IndexedPorts);
    }

    /// Set the ports, formatting them with the given [`PortFormatter`]
    pub fn set_ports_with(&mut self, ports: &str, formatter: &impl PortFormatter) {
        let formatted = formatter.format_ports(ports);
        debug!(
            "Switch {}: ports '{ports}' set as '{formatted}'",
            self.name().unwrap_or("(unnamed)")
        );
        self.ports = Some(formatted);
    }

    pub fn set_dpid(&mut self, dpid: &str) -> ConfigResult {
        self.base.set_dpid(dpid)
    }

    #[must_use]
    pub fn with_ports(mut self, ports: &str) -> Self {
        self.set_ports(ports);
        self
    }

    pub fn with_dpid(mut self, dpid: &str) -> Result<Self, ConfigError> {
        self.set_dpid(dpid)?;
        Ok(self)
    }

    /// The entries of the stored port list, empty if ports were never set
    pub fn port_entries(&self) -> impl Iterator<Item = PortEntry<'_>> {
        self.ports.as_deref().into_iter().flat_map(port_entries)
    }
}
