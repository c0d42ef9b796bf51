//! `notary-query status` - Check whether a certificate was seen or validated.

use anyhow::{Context as _, Result};
use colored::Colorize;
use notary::Status;

use super::Context;
use crate::cli::args::LookupArgs;
use crate::education::Explain;
use crate::output::{write_csv, OutputFormat};

pub async fn execute(ctx: Context, args: LookupArgs) -> Result<()> {
    let fingerprint = args.fingerprint()?;

    if ctx.explain {
        Explain::status(&ctx.query_name(&fingerprint)).print();
    }

    let client = ctx.client()?;
    let status = client
        .query_status(&fingerprint)
        .await
        .context("query error")?;

    match ctx.output_format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({ "fingerprint": fingerprint.to_hex(), "status": status })
            );
        }
        OutputFormat::Yaml => {
            println!("fingerprint: '{fingerprint}'");
            println!("status: {status}");
        }
        OutputFormat::Csv => {
            write_csv(
                std::io::stdout(),
                &["fingerprint", "status"],
                &[fingerprint.to_hex(), status.to_string()],
            )?;
        }
        OutputFormat::Pretty => {
            let label = match status {
                Status::Validated => status.label().green(),
                Status::Seen => status.label().yellow(),
                Status::Unknown => status.label().normal(),
            };
            println!("{} {}", "status:".bold(), label);
        }
    }

    Ok(())
}
