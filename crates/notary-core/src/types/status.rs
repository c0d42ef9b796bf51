use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr};

/// Address the notary answers with for a fingerprint it has seen.
pub const SEEN_ADDR: Ipv4Addr = Ipv4Addr::new(127, 0, 0, 1);

/// Address the notary answers with for a fingerprint that also validated.
pub const VALIDATED_ADDR: Ipv4Addr = Ipv4Addr::new(127, 0, 0, 2);

/// What the notary knows about a fingerprint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Never observed, or the answer was not a known code
    #[default]
    Unknown,
    /// Observed on the wire
    Seen,
    /// Observed and chained to a trusted root
    Validated,
}

impl Status {
    /// Map a single A record answer to a status.
    ///
    /// IPv4-mapped IPv6 answers are unmapped first. Anything that is not
    /// one of the two sentinel addresses is [`Status::Unknown`].
    #[must_use]
    pub fn from_addr(addr: IpAddr) -> Self {
        let v4 = match addr {
            IpAddr::V4(v4) => Some(v4),
            IpAddr::V6(v6) => v6.to_ipv4_mapped(),
        };
        match v4 {
            Some(ip) if ip == SEEN_ADDR => Self::Seen,
            Some(ip) if ip == VALIDATED_ADDR => Self::Validated,
            _ => Self::Unknown,
        }
    }

    /// Lowercase label used in CLI output
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Seen => "seen",
            Self::Validated => "validated",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
