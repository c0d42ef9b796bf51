//! Command implementations.

pub mod config;
pub mod fingerprint;
pub mod query;
pub mod status;

use anyhow::Context as _;
use notary::{Fingerprint, NotaryClient};
use std::net::IpAddr;
use std::path::Path;

use crate::cli::args::LookupArgs;
use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Notary zone suffix
    pub domain: String,

    /// Nameservers to query; empty means the system resolver
    pub nameservers: Vec<IpAddr>,

    /// Port of the nameservers above
    pub port: u16,

    /// Output format
    pub output_format: OutputFormat,

    /// Whether to show educational explanations
    pub explain: bool,
}

impl Context {
    /// Create a notary client for the configured zone and nameservers.
    pub fn client(&self) -> anyhow::Result<NotaryClient> {
        tracing::debug!(
            domain = %self.domain,
            nameservers = ?self.nameservers,
            port = self.port,
            "creating notary client"
        );
        NotaryClient::builder()
            .domain(&self.domain)
            .nameservers(self.nameservers.iter().copied())
            .port(self.port)
            .build()
            .context("failed to set up DNS resolver")
    }

    /// DNS name that will be queried for a fingerprint.
    pub fn query_name(&self, fingerprint: &Fingerprint) -> String {
        notary::query_name(fingerprint, &self.domain)
    }
}

impl LookupArgs {
    /// The fingerprint to look up, from the hex argument or the certificate file.
    pub fn fingerprint(&self) -> anyhow::Result<Fingerprint> {
        match (&self.hash, &self.cert) {
            (_, Some(path)) => read_certificate(path),
            (Some(hash), None) => Fingerprint::from_hex(hash).context("invalid hash"),
            (None, None) => anyhow::bail!("a hash or --cert is required"),
        }
    }
}

/// Read a PEM or DER certificate and fingerprint it.
pub fn read_certificate(path: &Path) -> anyhow::Result<Fingerprint> {
    let data = std::fs::read(path)
        .with_context(|| format!("failed to read certificate {}", path.display()))?;
    Fingerprint::of_certificate(&data)
        .with_context(|| format!("failed to fingerprint {}", path.display()))
}
