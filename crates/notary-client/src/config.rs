//! Client configuration types.

use notary_core::NOTARY_DOMAIN;
use std::net::IpAddr;

/// Standard DNS port
const DNS_PORT: u16 = 53;

/// Where and how the client looks fingerprints up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Zone suffix appended to the fingerprint label
    pub domain: String,

    /// Nameservers to query; empty means the system resolver configuration
    pub nameservers: Vec<IpAddr>,

    /// Port the nameservers listen on
    pub port: u16,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientConfig {
    /// Default configuration: public notary zone, system resolver
    #[must_use]
    pub fn new() -> Self {
        Self {
            domain: NOTARY_DOMAIN.to_string(),
            nameservers: Vec::new(),
            port: DNS_PORT,
        }
    }

    /// Set the zone suffix
    #[must_use]
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    /// Query these nameservers instead of the system ones
    #[must_use]
    pub fn nameservers(mut self, nameservers: impl IntoIterator<Item = IpAddr>) -> Self {
        self.nameservers = nameservers.into_iter().collect();
        self
    }

    /// Set the nameserver port
    #[must_use]
    pub const fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Whether lookups go through the system resolver configuration
    #[must_use]
    pub fn uses_system_resolver(&self) -> bool {
        self.nameservers.is_empty()
    }
}
