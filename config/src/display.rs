// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Display of model objects

use std::fmt::Display;

use crate::switch::dpid::Dpid;
use crate::topology::Topology;
use crate::trema_switch::TremaSwitch;

const UNSET: &str = "-";

impl Display for TremaSwitch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let dpid = self.dpid().map(Dpid::short);
        write!(
            f,
            "switch {} dpid: {} ports: {}",
            self.name().unwrap_or(UNSET),
            dpid.as_deref().unwrap_or(UNSET),
            self.ports().unwrap_or(UNSET)
        )
    }
}

/* ========= Topology =========*/

macro_rules! SWITCH_TBL_FMT {
    () => {
        " {:<18} {:<18} {:<18} {}"
    };
}
fn fmt_switch_table_heading(f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    writeln!(
        f,
        "{}",
        format_args!(SWITCH_TBL_FMT!(), "key", "name", "dpid", "ports")
    )
}

impl Display for Topology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, " ━━━━━━━━━ Switches ({}) ━━━━━━━━━", self.len())?;
        fmt_switch_table_heading(f)?;
        for (key, switch) in self.switches() {
            let dpid = switch.dpid().map(Dpid::short);
            writeln!(
                f,
                "{}",
                format_args!(
                    SWITCH_TBL_FMT!(),
                    key,
                    switch.name().unwrap_or(UNSET),
                    dpid.as_deref().unwrap_or(UNSET),
                    switch.ports().unwrap_or(UNSET)
                )
            )?;
        }
        Ok(())
    }
}
