//! # notary-cli
//!
//! Command-line interface for the ICSI certificate notary.
//!
//! ## Features
//!
//! - **Detail lookup**: first/last seen dates, observation count, validation flag
//! - **Status lookup**: unknown / seen / validated from the A record
//! - **Fingerprinting**: SHA-1 of PEM or DER certificate files
//! - **Educational mode**: `--explain` shows the DNS query being made
//! - **Multiple output formats**: Pretty, JSON, CSV, YAML

pub mod cli;
pub mod config;
pub mod education;
pub mod output;

pub use cli::run;
