// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! The in-memory topology: every switch declared so far, in declaration order.

use ordermap::OrderMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::trema_switch::TremaSwitch;
use crate::{ConfigError, ConfigResult};

/// The switches of a topology, keyed by name.
///
/// A deserialized topology does not go through [`Topology::add_switch`]: its
/// keys are checked against the switch names by [`Topology::validate`], while
/// stored ports are taken as they are, since a declaration may have been
/// formatted by any [`crate::PortFormatter`].
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
pub struct Topology {
    #[serde(default)]
    switches: OrderMap<String, TremaSwitch>,
}

impl Topology {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a declared switch. A switch without a name is registered under
    /// the first free `switch-<n>`, starting from its position in the topology.
    /// The switch itself remains unnamed.
    pub fn add_switch(&mut self, switch: TremaSwitch) -> ConfigResult {
        let key = match switch.name() {
            Some(name) => name.to_owned(),
            None => self.free_generated_key(),
        };
        if self.switches.contains_key(&key) {
            return Err(ConfigError::DuplicateSwitchName(key));
        }
        debug!("Registering switch {key}");
        let _ = self.switches.insert(key, switch);
        Ok(())
    }

    fn free_generated_key(&self) -> String {
        let mut n = self.switches.len() + 1;
        loop {
            let key = format!("switch-{n}");
            if !self.switches.contains_key(&key) {
                return key;
            }
            n += 1;
        }
    }

    /// Declare a switch and register it, as a `trema_switch` stanza does.
    /// The switch is only registered if `declare` succeeds.
    pub fn trema_switch<F>(&mut self, name: Option<&str>, declare: F) -> ConfigResult
    where
        F: FnOnce(&mut TremaSwitch) -> ConfigResult,
    {
        let mut switch = TremaSwitch::new(name);
        declare(&mut switch)?;
        self.add_switch(switch)
    }

    #[must_use]
    pub fn get_switch(&self, key: &str) -> Option<&TremaSwitch> {
        self.switches.get(key)
    }
    pub fn switches(&self) -> impl Iterator<Item = (&str, &TremaSwitch)> {
        self.switches.iter().map(|(key, switch)| (key.as_str(), switch))
    }
    #[must_use]
    pub fn len(&self) -> usize {
        self.switches.len()
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.switches.is_empty()
    }

    /// Every switch must have its ports set, and a named switch must be
    /// registered under its own name
    pub fn validate(&self) -> ConfigResult {
        debug!("Validating topology with {} switches..", self.len());
        if let Some((key, switch)) = self
            .switches()
            .find(|(key, switch)| switch.name().is_some_and(|name| name != *key))
        {
            return Err(ConfigError::KeyMismatch(
                key.to_owned(),
                switch.name().unwrap_or_default().to_owned(),
            ));
        }
        if let Some((key, _)) = self.switches().find(|(_, switch)| switch.ports().is_none()) {
            return Err(ConfigError::MissingPorts(key.to_owned()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[rustfmt::skip]
mod test {
    use super::*;
    use crate::switch::dpid::{Dpid, DpidError};
    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    fn build_topology() -> Topology {
        let mut topology = Topology::new();
        topology.trema_switch(Some("switch1"), |s| {
            s.set_dpid("0x1")?;
            s.set_ports("eth0,eth1");
            Ok(())
        }).expect("Should succeed");
        topology.trema_switch(Some("switch2"), |s| {
            s.set_dpid("0x2")?;
            s.set_ports("eth2");
            Ok(())
        }).expect("Should succeed");
        topology
    }

    #[traced_test]
    #[test]
    fn test_topology_declare() {
        let topology = build_topology();
        assert_eq!(topology.len(), 2);
        assert!(!topology.is_empty());
        assert!(logs_contain("Registering switch switch2"));

        let switch1 = topology.get_switch("switch1").expect("Should find switch");
        assert_eq!(switch1.ports(), Some("eth0/1,eth1/2"));
        assert_eq!(switch1.dpid(), Some(Dpid::new(1)));

        let keys: Vec<&str> = topology.switches().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["switch1", "switch2"]);
        assert_eq!(topology.validate(), Ok(()));
    }

    #[test]
    fn test_topology_duplicate_name() {
        let mut topology = build_topology();
        let result = topology.add_switch(TremaSwitch::new(Some("switch1")).with_ports("eth9"));
        assert_eq!(result, Err(ConfigError::DuplicateSwitchName("switch1".to_string())));

        // the existing declaration is untouched
        let switch1 = topology.get_switch("switch1").expect("Should find switch");
        assert_eq!(switch1.ports(), Some("eth0/1,eth1/2"));
        assert_eq!(topology.len(), 2);
    }

    #[test]
    fn test_topology_unnamed_switches() {
        let mut topology = Topology::new();
        topology.add_switch(TremaSwitch::new(None).with_ports("eth0")).expect("Should succeed");
        topology.add_switch(TremaSwitch::new(None).with_ports("eth1")).expect("Should succeed");

        let unnamed = topology.get_switch("switch-2").expect("Should find switch");
        assert_eq!(unnamed.name(), None);
        assert_eq!(unnamed.ports(), Some("eth1/1"));

        // a named switch can't take a generated key
        let result = topology.add_switch(TremaSwitch::new(Some("switch-1")));
        assert_eq!(result, Err(ConfigError::DuplicateSwitchName("switch-1".to_string())));
    }

    #[test]
    fn test_topology_unnamed_switch_skips_taken_key() {
        let mut topology = Topology::new();
        topology.add_switch(TremaSwitch::new(Some("switch-2")).with_ports("eth0")).expect("Should succeed");
        topology.add_switch(TremaSwitch::new(None).with_ports("eth1")).expect("Should succeed");

        let keys: Vec<&str> = topology.switches().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["switch-2", "switch-3"]);
        let named = topology.get_switch("switch-2").expect("Should find switch");
        assert_eq!(named.ports(), Some("eth0/1"));
        let unnamed = topology.get_switch("switch-3").expect("Should find switch");
        assert_eq!(unnamed.name(), None);
        assert_eq!(unnamed.ports(), Some("eth1/1"));
        assert_eq!(topology.validate(), Ok(()));
    }

    #[test]
    fn test_topology_failed_declaration() {
        let mut topology = Topology::new();
        let result = topology.trema_switch(Some("switch1"), |s| {
            s.set_ports("eth0");
            s.set_dpid("0x")
        });
        assert_eq!(result, Err(ConfigError::BadDpid(DpidError::MissingDigits("0x".to_string()))));
        assert!(topology.is_empty());
    }

    #[traced_test]
    #[test]
    fn test_topology_validate() {
        let mut topology = build_topology();
        topology.add_switch(TremaSwitch::new(Some("switch3"))).expect("Should succeed");
        assert_eq!(topology.validate(), Err(ConfigError::MissingPorts("switch3".to_string())));
        assert!(logs_contain("Validating topology with 3 switches"));
    }

    #[test]
    fn test_topology_serde_yaml() {
        let topology = build_topology();
        let yaml = serde_yaml_ng::to_string(&topology).expect("Should serialize");
        let back: Topology = serde_yaml_ng::from_str(&yaml).expect("Should deserialize");
        assert_eq!(back, topology);

        let yaml = "switches:\n  sw:\n    name: sw\n    dpid: '0xabc'\n    ports: eth0/1,eth1/2\n";
        let parsed: Topology = serde_yaml_ng::from_str(yaml).expect("Should deserialize");
        let sw = parsed.get_switch("sw").expect("Should find switch");
        assert_eq!(sw.dpid(), Some(Dpid::new(0xabc)));
        assert_eq!(sw.port_entries().count(), 2);

        let yaml = "switches:\n  sw:\n    name: sw\n    dpid: 0xabc\n    ports: eth0/1\n";
        let parsed: Topology = serde_yaml_ng::from_str(yaml).expect("Should deserialize");
        let sw = parsed.get_switch("sw").expect("Should find switch");
        assert_eq!(sw.dpid(), Some(Dpid::new(0xabc)));
    }

    #[test]
    fn test_topology_deserialized_key_mismatch() {
        let yaml = "switches:\n  sw1:\n    name: sw2\n    ports: eth0/1\n  sw3:\n    ports: eth1/1\n";
        let parsed: Topology = serde_yaml_ng::from_str(yaml).expect("Should deserialize");
        assert_eq!(parsed.validate(), Err(ConfigError::KeyMismatch("sw1".to_string(), "sw2".to_string())));

        // unnamed switches may sit under any key
        let yaml = "switches:\n  anything:\n    ports: eth1/1\n";
        let parsed: Topology = serde_yaml_ng::from_str(yaml).expect("Should deserialize");
        assert_eq!(parsed.validate(), Ok(()));
    }
}
