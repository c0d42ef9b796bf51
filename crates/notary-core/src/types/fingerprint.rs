use ring::digest::{digest, SHA1_FOR_LEGACY_USE_ONLY};
use std::fmt;
use std::str::FromStr;

use crate::error::{NotaryError, Result};

/// PEM tag of an X.509 certificate block
const CERTIFICATE_TAG: &str = "CERTIFICATE";

/// Certificate fingerprint used as the lookup key
///
/// The notary indexes certificates by the SHA-1 digest of their DER
/// encoding, but any byte sequence is accepted and turned into a query name
/// as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Fingerprint(Vec<u8>);

impl Fingerprint {
    /// Wrap raw digest bytes
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Parse a hex fingerprint
    ///
    /// Case-insensitive. Colon-separated octets as printed by
    /// `openssl x509 -fingerprint` are accepted too.
    pub fn from_hex(s: &str) -> Result<Self> {
        let cleaned: String = s.trim().chars().filter(|c| *c != ':').collect();
        hex::decode(&cleaned)
            .map(Self)
            .map_err(|e| NotaryError::InvalidFingerprint(format!("{s:?}: {e}")))
    }

    /// SHA-1 of a DER-encoded certificate
    #[must_use]
    pub fn of_der(der: &[u8]) -> Self {
        Self(digest(&SHA1_FOR_LEGACY_USE_ONLY, der).as_ref().to_vec())
    }

    /// SHA-1 of the first certificate in a PEM document
    pub fn of_pem(pem_data: impl AsRef<[u8]>) -> Result<Self> {
        let blocks =
            pem::parse_many(pem_data).map_err(|e| NotaryError::Certificate(e.to_string()))?;
        blocks
            .iter()
            .find(|block| block.tag() == CERTIFICATE_TAG)
            .map(|block| Self::of_der(block.contents()))
            .ok_or_else(|| NotaryError::Certificate("no CERTIFICATE block found".into()))
    }

    /// Fingerprint a certificate in either PEM or DER form
    pub fn of_certificate(data: &[u8]) -> Result<Self> {
        let start = data
            .iter()
            .position(|b| !b.is_ascii_whitespace())
            .unwrap_or(data.len());
        if data[start..].starts_with(b"-----BEGIN") {
            Self::of_pem(data)
        } else {
            Ok(Self::of_der(data))
        }
    }

    /// Raw digest bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Lowercase hex encoding
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl AsRef<[u8]> for Fingerprint {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Fingerprint {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for Fingerprint {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl FromStr for Fingerprint {
    type Err = NotaryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
