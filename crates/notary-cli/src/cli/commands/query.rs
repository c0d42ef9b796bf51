//! `notary-query query` - Fetch the notary's record for a certificate.

use anyhow::{Context as _, Result};
use colored::Colorize;

use super::Context;
use crate::cli::args::LookupArgs;
use crate::education::Explain;
use crate::output::{response_fields, write_csv, OutputFormat};

pub async fn execute(ctx: Context, args: LookupArgs) -> Result<()> {
    let fingerprint = args.fingerprint()?;

    if ctx.explain {
        Explain::query_record(&ctx.query_name(&fingerprint)).print();
    }

    let client = ctx.client()?;

    // No record means the notary has never seen this certificate
    let Some(response) = client.query(&fingerprint).await.context("query error")? else {
        return Ok(());
    };

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yaml::to_string(&response)?);
        }
        OutputFormat::Csv => {
            let (header, values): (Vec<&str>, Vec<String>) =
                response_fields(&response).into_iter().unzip();
            let header = [vec!["fingerprint"], header].concat();
            let row = [vec![fingerprint.to_hex()], values].concat();
            write_csv(std::io::stdout(), &header, &row)?;
        }
        OutputFormat::Pretty => {
            for (key, value) in response_fields(&response) {
                println!("{} {}", format!("{key}:").bold(), value);
            }
        }
    }

    Ok(())
}
