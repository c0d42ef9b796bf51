//! Core types for the ICSI certificate notary client.
//!
//! The notary answers DNS queries about certificate fingerprints it has
//! observed on the wire. This crate holds everything that does not touch the
//! network:
//!
//! - **Naming**: fingerprint to query hostname ([`query_name`])
//! - **Types**: [`Fingerprint`], [`Status`] and [`Response`]
//! - **Parsing**: the `key=value` TXT micro-format ([`parse_response`])
//! - **Errors**: [`NotaryError`] and the [`Result`] alias
//!
//! # Example
//!
//! ```rust
//! use notary_core::{parse_response, query_name, Fingerprint, NOTARY_DOMAIN};
//!
//! let fp = Fingerprint::from_hex("c1956dc8a7dfb2a5a56934da09778e3a11023358").unwrap();
//! assert_eq!(
//!     query_name(&fp, NOTARY_DOMAIN),
//!     "c1956dc8a7dfb2a5a56934da09778e3a11023358.notary.icsi.berkeley.edu"
//! );
//!
//! let r = parse_response("version=1 times_seen=3 validated=0").unwrap();
//! assert_eq!(r.times_seen, 3);
//! ```

#![doc(html_root_url = "https://docs.rs/notary-core/0.1.0")]

mod error;
mod naming;
mod txt;
pub mod types;

pub use error::{NotaryError, Result};
pub use naming::{query_name, NOTARY_DOMAIN};
pub use txt::parse_response;
pub use types::*;
