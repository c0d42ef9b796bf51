//! DNS client for the ICSI certificate notary.
//!
//! This crate provides [`NotaryClient`], which turns a certificate
//! fingerprint into a query under `notary.icsi.berkeley.edu` and interprets
//! the answer:
//!
//! - [`NotaryClient::query_status`] reads the A record as a [`Status`]
//! - [`NotaryClient::query`] reads the TXT record as a [`Response`]
//!
//! A blocking wrapper lives in [`blocking`].

#![doc(html_root_url = "https://docs.rs/notary-client/0.1.0")]

pub mod blocking;
mod client;
mod config;
mod resolver;

pub use client::{NotaryClient, NotaryClientBuilder};
pub use config::ClientConfig;
pub use notary_core::{Fingerprint, NotaryError, Response, Result, Status};
pub use resolver::{is_name_not_found, HickoryResolver, LookupError, NotaryResolver};
