//! Notary lookup client.

use crate::config::ClientConfig;
use crate::resolver::{HickoryResolver, LookupError, NotaryResolver};
use notary_core::{parse_response, query_name, NotaryError, Response, Result, Status};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, warn};

/// Client for the ICSI certificate notary
///
/// Cheap to clone; clones share the resolver. Every lookup sends exactly one
/// DNS query and keeps no state between calls.
#[derive(Clone)]
pub struct NotaryClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    resolver: Box<dyn NotaryResolver>,
    domain: String,
}

impl NotaryClient {
    /// Create a client for the public notary using the system resolver
    pub fn new() -> Result<Self> {
        NotaryClientBuilder::new().build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> NotaryClientBuilder {
        NotaryClientBuilder::new()
    }

    /// Zone suffix lookups are made under
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.inner.domain
    }

    /// DNS name queried for `fingerprint`
    #[must_use]
    pub fn query_name(&self, fingerprint: impl AsRef<[u8]>) -> String {
        query_name(fingerprint, &self.inner.domain)
    }

    /// Look up whether the notary has seen or validated a fingerprint.
    ///
    /// A name that does not exist is [`Status::Unknown`], not an error.
    pub async fn query_status(&self, fingerprint: impl AsRef<[u8]>) -> Result<Status> {
        let name = self.query_name(fingerprint);
        debug!(name = %name, "querying notary status");

        let Some(addrs) = found(self.inner.resolver.lookup_addrs(&name).await)? else {
            debug!(name = %name, "fingerprint not known to notary");
            return Ok(Status::Unknown);
        };

        let addr = single(&name, addrs)?;
        let status = Status::from_addr(addr);
        debug!(name = %name, %addr, %status, "notary status");
        Ok(status)
    }

    /// Fetch the notary's detail record for a fingerprint.
    ///
    /// Returns `Ok(None)` when the notary has no data for it.
    pub async fn query(&self, fingerprint: impl AsRef<[u8]>) -> Result<Option<Response>> {
        let name = self.query_name(fingerprint);
        debug!(name = %name, "querying notary details");

        let Some(records) = found(self.inner.resolver.lookup_txt(&name).await)? else {
            debug!(name = %name, "fingerprint not known to notary");
            return Ok(None);
        };

        let txt = single(&name, records)?;
        debug!(name = %name, txt = %txt, "notary TXT record");
        parse_response(&txt).map(Some)
    }
}

/// `Ok(None)` for a missing name, the resolver error for anything else.
fn found<T>(result: std::result::Result<T, LookupError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(LookupError::NameNotFound) => Ok(None),
        Err(LookupError::Resolver(source)) => Err(NotaryError::Resolve(source)),
    }
}

/// Exactly one record, or a data-integrity error.
fn single<T>(name: &str, records: Vec<T>) -> Result<T> {
    match <[T; 1]>::try_from(records) {
        Ok([record]) => Ok(record),
        Err(records) => {
            warn!(name = %name, count = records.len(), "expected exactly one record");
            Err(NotaryError::MultipleRecords {
                count: records.len(),
            })
        }
    }
}

/// Builder for configuring a [`NotaryClient`]
#[derive(Default)]
pub struct NotaryClientBuilder {
    config: ClientConfig,
    resolver: Option<Box<dyn NotaryResolver>>,
}

impl NotaryClientBuilder {
    /// Create a builder with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration
    #[must_use]
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the zone suffix (useful for mirrors and testing)
    #[must_use]
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.config.domain = domain.into();
        self
    }

    /// Query these nameservers instead of the system ones
    #[must_use]
    pub fn nameservers(mut self, nameservers: impl IntoIterator<Item = IpAddr>) -> Self {
        self.config = self.config.nameservers(nameservers);
        self
    }

    /// Port the configured nameservers listen on
    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.config = self.config.port(port);
        self
    }

    /// Use a custom resolver; nameserver settings are then ignored
    #[must_use]
    pub fn resolver(mut self, resolver: impl NotaryResolver + 'static) -> Self {
        self.resolver = Some(Box::new(resolver));
        self
    }

    /// Build the client
    pub fn build(self) -> Result<NotaryClient> {
        let resolver = match self.resolver {
            Some(resolver) => resolver,
            None if self.config.uses_system_resolver() => Box::new(HickoryResolver::system()?),
            None => Box::new(HickoryResolver::with_nameservers(
                &self.config.nameservers,
                self.config.port,
            )),
        };

        Ok(NotaryClient {
            inner: Arc::new(ClientInner {
                resolver,
                domain: self.config.domain,
            }),
        })
    }
}
