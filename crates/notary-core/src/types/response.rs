use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{NotaryError, Result};

/// The only TXT protocol version this client understands.
pub const PROTOCOL_VERSION: i32 = 1;

/// Detail record published in the notary's TXT answer
///
/// Only produced by a successful parse, so `version` is always
/// [`PROTOCOL_VERSION`]. Keys missing from the record keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// Protocol version
    pub version: i32,

    /// Day the certificate was first observed
    #[serde(default)]
    pub first_seen: Option<NaiveDate>,

    /// Day the certificate was last observed
    #[serde(default)]
    pub last_seen: Option<NaiveDate>,

    /// Number of days the certificate was observed, at most `i32::MAX`
    #[serde(default)]
    pub times_seen: u32,

    /// Whether the certificate chained to a trusted root
    #[serde(default)]
    pub validated: bool,
}

impl FromStr for Response {
    type Err = NotaryError;

    fn from_str(s: &str) -> Result<Self> {
        crate::txt::parse_response(s)
    }
}

/// Convert a wire day count (days since 1970-01-01 UTC) into a date.
///
/// Returns `None` if the offset falls outside chrono's date range.
#[must_use]
pub fn date_from_days(days: i32) -> Option<NaiveDate> {
    DateTime::<Utc>::UNIX_EPOCH
        .date_naive()
        .checked_add_signed(TimeDelta::days(i64::from(days)))
}
