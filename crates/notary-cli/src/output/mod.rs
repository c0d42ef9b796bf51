//! Output formatting for different formats.

use clap::ValueEnum;
use notary::Response;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::io::Write;
use std::str::FromStr;

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain `key: value` lines
    #[default]
    Pretty,
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// YAML output
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => anyhow::bail!(
                "Unknown output format: {}\n\
                 Valid formats: pretty, json, csv, yaml",
                s
            ),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// Field names and rendered values of a notary response, in display order.
///
/// Dates render as `YYYY-MM-DD`; a date the record omitted renders empty.
pub fn response_fields(r: &Response) -> [(&'static str, String); 5] {
    [
        ("version", r.version.to_string()),
        ("first_seen", optional(r.first_seen)),
        ("last_seen", optional(r.last_seen)),
        ("times_seen", r.times_seen.to_string()),
        ("validated", r.validated.to_string()),
    ]
}

fn optional(value: Option<impl Display>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Write a header and one record as CSV.
pub fn write_csv<W: Write>(out: W, header: &[&str], row: &[String]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(header)?;
    writer.write_record(row)?;
    writer.flush()?;
    Ok(())
}
