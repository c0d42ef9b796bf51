//! TXT record decoding for notary detail answers.
//!
//! The record is a single line of space-separated `key=value` pairs:
//!
//! ```text
//! version=1 first_seen=15387 last_seen=15646 times_seen=260 validated=1
//! ```
//!
//! Dates are day counts since 1970-01-01 UTC. Unknown keys are skipped so the
//! notary can add fields without breaking older clients.

use std::str::FromStr;

use crate::error::{NotaryError, Result};
use crate::types::{date_from_days, Response, PROTOCOL_VERSION};

/// Decode one TXT record into a [`Response`].
///
/// Every token must contain exactly one `=`. A known key with a non-integer
/// value rejects the whole record, as does a version other than 1.
pub fn parse_response(txt: &str) -> Result<Response> {
    let mut r = Response::default();

    for token in txt.split(' ') {
        let (key, value) = split_pair(token)?;
        match key {
            "version" => r.version = parse_int(key, value)?,
            "first_seen" => r.first_seen = Some(parse_date(key, value)?),
            "last_seen" => r.last_seen = Some(parse_date(key, value)?),
            "times_seen" => r.times_seen = parse_count(key, value)?,
            "validated" => r.validated = parse_int::<i32>(key, value)? == 1,
            _ => {}
        }
    }

    if r.version != PROTOCOL_VERSION {
        return Err(NotaryError::UnknownVersion(r.version));
    }

    Ok(r)
}

fn split_pair(token: &str) -> Result<(&str, &str)> {
    match token.split_once('=') {
        Some((key, value)) if !value.contains('=') => Ok((key, value)),
        _ => Err(NotaryError::InvalidResponse(format!(
            "malformed token {token:?}"
        ))),
    }
}

fn parse_int<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| NotaryError::InvalidResponse(format!("{key}: not an integer: {value:?}")))
}

/// A 32-bit signed integer on the wire that must not be negative.
fn parse_count(key: &str, value: &str) -> Result<u32> {
    let count: i32 = parse_int(key, value)?;
    u32::try_from(count)
        .map_err(|_| NotaryError::InvalidResponse(format!("{key}: negative count {count}")))
}

fn parse_date(key: &str, value: &str) -> Result<chrono::NaiveDate> {
    let days = parse_int(key, value)?;
    date_from_days(days)
        .ok_or_else(|| NotaryError::InvalidResponse(format!("{key}: day {days} out of range")))
}
