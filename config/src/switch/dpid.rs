// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, LowerHex};
use std::str::FromStr;

/// An OpenFlow datapath id.
///
/// Datapath ids are declared either in hexadecimal with a `0x` prefix (`0xabc`)
/// or in decimal (`2748`). They are rendered in two forms: the short form
/// ([`Dpid::short`]) used in declarations and the 16-digit long form
/// ([`Dpid::long`]) used by tools that want fixed-width ids.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(try_from = "DpidRepr", into = "String")]
#[repr(transparent)]
pub struct Dpid(u64);

/// What a descriptor may hold for a datapath id: YAML reads an unquoted `0xabc`
/// as an integer, a quoted one as a string.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
enum DpidRepr {
    Number(u64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DpidError {
    #[error("datapath id must not be empty")]
    Empty,
    #[error("datapath id '{0}' has no digits")]
    MissingDigits(String),
    #[error("datapath id '{0}' contains invalid digits")]
    InvalidDigits(String),
    #[error("datapath id '{0}' does not fit in 64 bits")]
    Overflow(String),
}

impl Dpid {
    #[must_use]
    pub fn new(raw: u64) -> Self {
        Dpid(raw)
    }

    #[must_use]
    pub fn to_u64(self) -> u64 {
        self.0
    }

    /// Hex form with a `0x` prefix and no padding, e.g. `0xabc`
    #[must_use]
    pub fn short(self) -> String {
        format!("{:#x}", self.0)
    }

    /// Zero-padded 16-digit hex form, e.g. `0000000000000abc`
    #[must_use]
    pub fn long(self) -> String {
        format!("{:016x}", self.0)
    }
}

impl FromStr for Dpid {
    type Err = DpidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(DpidError::Empty);
        }
        let (digits, radix) = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(hex) => (hex, 16),
            None => (s, 10),
        };
        if digits.is_empty() {
            return Err(DpidError::MissingDigits(s.to_owned()));
        }
        // from_str_radix tolerates a leading sign, we don't
        if !digits.chars().all(|c| c.is_digit(radix)) {
            return Err(DpidError::InvalidDigits(s.to_owned()));
        }
        u64::from_str_radix(digits, radix)
            .map(Dpid)
            .map_err(|_| DpidError::Overflow(s.to_owned()))
    }
}

impl TryFrom<&str> for Dpid {
    type Error = DpidError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for Dpid {
    type Error = DpidError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<DpidRepr> for Dpid {
    type Error = DpidError;

    fn try_from(value: DpidRepr) -> Result<Self, Self::Error> {
        match value {
            DpidRepr::Number(raw) => Ok(Dpid(raw)),
            DpidRepr::Text(text) => text.parse(),
        }
    }
}

impl From<u64> for Dpid {
    fn from(value: u64) -> Self {
        Dpid(value)
    }
}

impl From<Dpid> for String {
    fn from(value: Dpid) -> Self {
        value.short()
    }
}

impl LowerHex for Dpid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        LowerHex::fmt(&self.0, f)
    }
}

impl Display for Dpid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short())
    }
}

#[cfg(any(test, feature = "bolero"))]
mod contract {
    use super::Dpid;
    use bolero::{Driver, TypeGenerator};

    impl TypeGenerator for Dpid {
        fn generate<D: Driver>(driver: &mut D) -> Option<Self> {
            Some(Dpid(driver.produce()?))
        }
    }
}
