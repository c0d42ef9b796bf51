//! notary-query - ICSI certificate notary lookups
//!
//! Asks the notary what it knows about a certificate fingerprint.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    notary_cli::run().await
}
