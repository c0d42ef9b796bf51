//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::net::IpAddr;
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Query the ICSI certificate notary
///
/// Looks certificates up by their SHA-1 fingerprint over DNS and reports
/// whether the notary has seen them on the wire.
/// Use --explain on any command to see the query being made.
///
/// Notary: http://notary.icsi.berkeley.edu/
#[derive(Parser, Debug)]
#[command(name = "notary-query")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Notary zone to query under (or set NOTARY_DOMAIN env var)
    #[arg(short, long, env = "NOTARY_DOMAIN", global = true)]
    pub domain: Option<String>,

    /// Nameserver to use instead of the system resolver (repeatable)
    #[arg(short = 'n', long = "nameserver", value_name = "IP", global = true)]
    pub nameservers: Vec<IpAddr>,

    /// Port the --nameserver addresses listen on
    #[arg(long, value_name = "PORT", global = true, default_value_t = 53)]
    pub port: u16,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Explain what this command does (educational mode)
    #[arg(long, global = true)]
    pub explain: bool,

    /// Increase verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the notary's record for a certificate (TXT lookup)
    Query(LookupArgs),

    /// Check whether a certificate was seen or validated (A lookup)
    Status(LookupArgs),

    /// Print the SHA-1 fingerprint of a certificate file
    Fingerprint(FingerprintArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Query / status commands
// ============================================================================

#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Certificate fingerprint in hex (SHA-1 of the DER encoding)
    #[arg(required_unless_present = "cert", conflicts_with = "cert")]
    pub hash: Option<String>,

    /// Fingerprint this certificate file (PEM or DER) instead
    #[arg(short, long, value_name = "FILE")]
    pub cert: Option<PathBuf>,
}

// ============================================================================
// Fingerprint command
// ============================================================================

#[derive(Args, Debug)]
pub struct FingerprintArgs {
    /// Certificate file (PEM or DER)
    pub cert: PathBuf,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Key to set (e.g., domain, nameservers, output_format)
        key: String,

        /// Value to set
        value: String,
    },

    /// Show config file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn query_takes_hash_or_cert() {
        let cli = Cli::parse_from(["notary-query", "query", "c195"]);
        let Commands::Query(args) = cli.command else {
            panic!("expected query");
        };
        assert_eq!(args.hash.as_deref(), Some("c195"));

        let cli = Cli::parse_from(["notary-query", "status", "--cert", "a.pem"]);
        let Commands::Status(args) = cli.command else {
            panic!("expected status");
        };
        assert!(args.hash.is_none());
        assert_eq!(args.cert, Some(PathBuf::from("a.pem")));

        assert!(Cli::try_parse_from(["notary-query", "query"]).is_err());
        assert!(Cli::try_parse_from(["notary-query", "query", "c195", "--cert", "a.pem"]).is_err());
    }

    #[test]
    fn global_flags() {
        let cli = Cli::parse_from([
            "notary-query",
            "status",
            "00",
            "-n",
            "192.0.2.53",
            "--nameserver",
            "::1",
            "-o",
            "json",
            "--domain",
            "notary.test",
            "--port",
            "5353",
        ]);
        assert_eq!(cli.nameservers.len(), 2);
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.domain.as_deref(), Some("notary.test"));
        assert_eq!(cli.port, 5353);

        let cli = Cli::parse_from(["notary-query", "status", "00"]);
        assert_eq!(cli.port, 53);
    }
}
