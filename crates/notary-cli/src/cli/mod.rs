//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use notary::NOTARY_DOMAIN;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Load configuration
    let config = Config::load()?;

    // Flags (and their env vars) win over the config file
    let output_format = cli.output.or(config.output_format).unwrap_or_default();
    let domain = cli
        .domain
        .or_else(|| config.domain.clone())
        .unwrap_or_else(|| NOTARY_DOMAIN.to_string());
    let nameservers = if cli.nameservers.is_empty() {
        config.nameservers.clone()
    } else {
        cli.nameservers
    };

    // Create context for commands
    let ctx = commands::Context {
        domain,
        nameservers,
        port: cli.port,
        output_format,
        explain: cli.explain || config.explain_by_default,
    };

    // Dispatch to appropriate command
    match cli.command {
        Commands::Query(args) => commands::query::execute(ctx, args).await,
        Commands::Status(args) => commands::status::execute(ctx, args).await,
        Commands::Fingerprint(args) => commands::fingerprint::execute(&ctx, &args),
        Commands::Config(args) => commands::config::execute(&ctx, args),
    }
}

/// Log to stderr: warnings by default, debug with `--verbose`, `RUST_LOG` overrides both.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
