//! Blocking notary client.
//!
//! Wraps the async [`NotaryClient`](crate::NotaryClient) in a private
//! current-thread runtime. Each call blocks the calling thread until the
//! resolver answers. Must not be used from inside an async context.

use crate::client::NotaryClientBuilder;
use notary_core::{NotaryError, Response, Result, Status};
use tokio::runtime::{Builder, Runtime};

/// Blocking client for the ICSI certificate notary
pub struct NotaryClient {
    inner: crate::NotaryClient,
    runtime: Runtime,
}

impl NotaryClient {
    /// Create a client for the public notary using the system resolver
    pub fn new() -> Result<Self> {
        Self::from_builder(NotaryClientBuilder::new())
    }

    /// Create a client from a configured async builder
    pub fn from_builder(builder: NotaryClientBuilder) -> Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| NotaryError::Config(format!("failed to start runtime: {e}")))?;

        let inner = {
            let _guard = runtime.enter();
            builder.build()?
        };

        Ok(Self { inner, runtime })
    }

    /// Zone suffix lookups are made under
    #[must_use]
    pub fn domain(&self) -> &str {
        self.inner.domain()
    }

    /// Blocking version of [`crate::NotaryClient::query_status`]
    pub fn query_status(&self, fingerprint: impl AsRef<[u8]>) -> Result<Status> {
        self.runtime.block_on(self.inner.query_status(fingerprint))
    }

    /// Blocking version of [`crate::NotaryClient::query`]
    pub fn query(&self, fingerprint: impl AsRef<[u8]>) -> Result<Option<Response>> {
        self.runtime.block_on(self.inner.query(fingerprint))
    }
}
