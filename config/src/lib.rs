// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Configuration model for network topology declarations. Each switch stanza of a
//! topology description is evaluated into a [`TremaSwitch`]: a generic
//! [`SwitchConfig`] (name, datapath id) plus a port list, which is stored in its
//! canonical `"port/index"` form. Declared switches are collected in a [`Topology`].

#![deny(
    unsafe_code,
    clippy::all,
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic
)]
#![allow(clippy::redundant_closure_for_method_calls)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

pub mod display;
pub mod errors;
pub mod ports;
pub mod switch;
pub mod topology;
pub mod trema_switch;

pub use errors::{ConfigError, ConfigResult, stringify}; // re-export
pub use ports::{IndexedPorts, PortEntry, PortFormatter}; // re-export
pub use switch::SwitchConfig; // re-export
pub use switch::dpid::{Dpid, DpidError}; // re-export
pub use topology::Topology; // re-export
pub use trema_switch::TremaSwitch; // re-export
