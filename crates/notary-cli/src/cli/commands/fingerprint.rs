//! `notary-query fingerprint` - SHA-1 fingerprint of a certificate file.

use anyhow::Result;

use super::{read_certificate, Context};
use crate::cli::args::FingerprintArgs;
use crate::education::Explain;
use crate::output::{write_csv, OutputFormat};

pub fn execute(ctx: &Context, args: &FingerprintArgs) -> Result<()> {
    if ctx.explain {
        Explain::fingerprint(&args.cert.display().to_string()).print();
    }

    let fingerprint = read_certificate(&args.cert)?;

    match ctx.output_format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "file": args.cert.display().to_string(),
                    "sha1": fingerprint.to_hex(),
                    "query_name": ctx.query_name(&fingerprint),
                })
            );
        }
        OutputFormat::Yaml => {
            println!("file: '{}'", args.cert.display());
            println!("sha1: '{fingerprint}'");
            println!("query_name: '{}'", ctx.query_name(&fingerprint));
        }
        OutputFormat::Csv => {
            write_csv(
                std::io::stdout(),
                &["file", "sha1"],
                &[args.cert.display().to_string(), fingerprint.to_hex()],
            )?;
        }
        OutputFormat::Pretty => {
            println!("{fingerprint}");
        }
    }

    Ok(())
}
