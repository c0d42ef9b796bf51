//! Client for the ICSI certificate notary.
//!
//! The notary (<http://notary.icsi.berkeley.edu/>) passively watches TLS
//! traffic and publishes what it has seen over DNS. Ask it about a
//! certificate by its SHA-1 fingerprint.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use notary::{Fingerprint, NotaryClient};
//!
//! #[tokio::main]
//! async fn main() -> notary::Result<()> {
//!     let client = NotaryClient::new()?;
//!     let fp = Fingerprint::from_hex("C1956DC8A7DFB2A5A56934DA09778E3A11023358")?;
//!
//!     // A record: unknown / seen / validated
//!     println!("status: {}", client.query_status(&fp).await?);
//!
//!     // TXT record: first/last seen, count, validation flag
//!     if let Some(r) = client.query(&fp).await? {
//!         println!("seen {} times since {:?}", r.times_seen, r.first_seen);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! Without an async runtime, use [`blocking::NotaryClient`].

#![doc(html_root_url = "https://docs.rs/notary/0.1.0")]

// Re-export core types
pub use notary_core::*;

// Re-export client
pub use notary_client::{
    blocking, is_name_not_found, ClientConfig, HickoryResolver, LookupError, NotaryClient,
    NotaryClientBuilder, NotaryResolver,
};

// Re-export runtime for convenience
pub use tokio;
