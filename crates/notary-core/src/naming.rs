//! DNS name encoding for fingerprint lookups.
//!
//! Fingerprints are published under `notary.icsi.berkeley.edu`, one label
//! per fingerprint holding its full lowercase hex encoding.

/// Zone suffix the notary answers under.
pub const NOTARY_DOMAIN: &str = "notary.icsi.berkeley.edu";

/// Build the DNS query name for a fingerprint under `domain`.
///
/// No length check is made; an empty fingerprint yields `.<domain>`.
///
/// Example: `[0xc1, 0x95]` under the default zone -> `"c195.notary.icsi.berkeley.edu"`
#[must_use]
pub fn query_name(fingerprint: impl AsRef<[u8]>, domain: &str) -> String {
    format!("{}.{domain}", hex::encode(fingerprint.as_ref()))
}
