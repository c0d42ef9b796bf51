use thiserror::Error;

/// Result type alias for notary operations
pub type Result<T> = std::result::Result<T, NotaryError>;

/// Errors that can occur when querying the notary
///
/// A name that does not exist in DNS is not an error: lookups report it as
/// [`Status::Unknown`](crate::Status::Unknown) or `None`.
#[derive(Error, Debug)]
pub enum NotaryError {
    /// DNS resolution failed for a reason other than a missing name
    #[error("DNS resolution failed: {0}")]
    Resolve(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The lookup returned a record count other than exactly one
    #[error("multiple records: expected exactly one, got {count}")]
    MultipleRecords {
        /// Number of records the resolver returned
        count: usize,
    },

    /// The TXT record does not follow the `key=value` token format
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// The TXT record declares a protocol version other than 1
    #[error("unknown version: {0}")]
    UnknownVersion(i32),

    /// A fingerprint given as text is not valid hex
    #[error("invalid fingerprint: {0}")]
    InvalidFingerprint(String),

    /// Certificate input could not be decoded
    #[error("certificate error: {0}")]
    Certificate(String),

    /// Resolver or runtime configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl NotaryError {
    /// Wrap any resolver-level error, keeping it as the source
    pub fn resolve<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Resolve(err.into())
    }

    /// Returns true if the error came from the DNS transport
    #[must_use]
    pub const fn is_resolve_error(&self) -> bool {
        matches!(self, Self::Resolve(_))
    }

    /// Returns true if the notary answered but the data was unusable
    #[must_use]
    pub const fn is_data_error(&self) -> bool {
        matches!(
            self,
            Self::MultipleRecords { .. } | Self::InvalidResponse(_) | Self::UnknownVersion(_)
        )
    }
}
