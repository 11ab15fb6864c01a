// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Port specifications.
//!
//! A switch declaration takes its ports as a single comma-separated string
//! (`"eth0,eth1,eth2"`). The stored form is a canonical list where every port
//! token carries its 1-based position: `"eth0/1,eth1/2,eth2/3"`.

#[cfg(any(test, feature = "bolero"))]
pub use contract::*;

/// Separator between port tokens, in both the raw and the canonical form
pub const PORT_SEPARATOR: &str = ",";
/// Separator between a port token and its index in the canonical form
pub const INDEX_SEPARATOR: char = '/';

/// Turns a raw port specification into the form stored in a switch declaration.
pub trait PortFormatter {
    fn format_ports(&self, raw: &str) -> String;
}

/// The canonical formatter: the i-th token `v` becomes `"v/i"`.
///
/// Tokens are not trimmed, checked or deduplicated. Empty segments are kept,
/// so an empty specification yields a single entry `"/1"`.
#[derive(Clone, Copy, Debug, Default)]
pub struct IndexedPorts;

impl PortFormatter for IndexedPorts {
    fn format_ports(&self, raw: &str) -> String {
        raw.split(PORT_SEPARATOR)
            .enumerate()
            .map(|(i, token)| format!("{token}{INDEX_SEPARATOR}{}", i + 1))
            .collect::<Vec<_>>()
            .join(PORT_SEPARATOR)
    }
}

/// One entry of a canonical port list
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct PortEntry<'a> {
    pub token: &'a str,
    pub index: usize,
}

/// Iterate over the entries of a canonical port list. Each segment is split at
/// its last `/`, so tokens which contain a `/` themselves are preserved.
/// Segments without a numeric index are skipped.
pub fn port_entries(canonical: &str) -> impl Iterator<Item = PortEntry<'_>> {
    canonical.split(PORT_SEPARATOR).filter_map(|segment| {
        let (token, index) = segment.rsplit_once(INDEX_SEPARATOR)?;
        Some(PortEntry {
            token,
            index: index.parse().ok()?,
        })
    })
}

#[cfg(any(test, feature = "bolero"))]
mod contract {
    use super::PORT_SEPARATOR;
    use bolero::{Driver, TypeGenerator};

    /// A non-empty list of port tokens, none of which contains the port separator
    #[derive(Clone, Debug)]
    pub struct PortTokens(pub Vec<String>);

    impl PortTokens {
        #[must_use]
        pub fn raw(&self) -> String {
            self.0.join(PORT_SEPARATOR)
        }
    }

    impl TypeGenerator for PortTokens {
        fn generate<D: Driver>(driver: &mut D) -> Option<Self> {
            const TOKEN_CHARS: [char; 12] =
                ['e', 't', 'h', 'p', '0', '1', '2', '9', '/', '.', '-', ' '];
            let count = 1 + usize::from(driver.produce::<u8>()? % 16);
            let mut tokens = Vec::with_capacity(count);
            for _ in 0..count {
                let len = usize::from(driver.produce::<u8>()? % 8);
                let mut token = String::with_capacity(len);
                for _ in 0..len {
                    let selected = usize::from(driver.produce::<u8>()?) % TOKEN_CHARS.len();
                    token.push(TOKEN_CHARS[selected]);
                }
                tokens.push(token);
            }
            Some(PortTokens(tokens))
        }
    }
}
