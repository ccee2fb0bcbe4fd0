//! Timestamp token handling.
//!
//! Marker timestamps are a wall-clock time of day with no date. Two textual
//! encodings occur, colon-separated ("13:58:12") and period-separated
//! ("13.58.12"). A source sticks to one encoding, so the format is detected
//! from the first marker line and locked for the rest of that source; mixed
//! encodings within one source are unsupported and surface as parse errors
//! against the locked format.

use crate::Result;
use anyhow::{Context, bail};
use chrono::NaiveTime;
use std::fmt;

/// Separator style of a source's timestamp tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFormat {
    Colon,
    Period,
}

impl TimeFormat {
    fn chrono_format(self) -> &'static str {
        match self {
            TimeFormat::Colon => "%H:%M:%S",
            TimeFormat::Period => "%H.%M.%S",
        }
    }
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeFormat::Colon => f.write_str("colon-separated"),
            TimeFormat::Period => f.write_str("period-separated"),
        }
    }
}

/// Classify a timestamp token by its separator; the first ':' or '.' wins.
///
/// A token containing neither separator cannot be classified.
pub fn detect_format(token: &str) -> Result<TimeFormat> {
    for c in token.chars() {
        match c {
            ':' => return Ok(TimeFormat::Colon),
            '.' => return Ok(TimeFormat::Period),
            _ => {}
        }
    }
    bail!("timestamp token {:?} has no ':' or '.' separator", token);
}

/// Parse a timestamp token under the source's locked format.
pub fn parse_time(token: &str, format: TimeFormat) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(token, format.chrono_format())
        .with_context(|| format!("cannot parse {:?} as a {} timestamp", token, format))
}
