// LogTally - GPL-3.0-or-later
// This file is part of LogTally.
//
// Copyright (C) 2026 Daniel Freiermuth
//
// LogTally is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// LogTally is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with LogTally.  If not, see <https://www.gnu.org/licenses/>.

//! Line parsing for the fixed `YYYY-MM-DD HH:MM:SS LEVEL message...` format.
//!
//! Parsing never fails loudly: a line that does not fit the format comes back
//! as a [`ParseError`] value and the caller decides what to do with it.

pub mod record;

pub use record::LogRecord;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

/// Format of the date token
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format of the time token
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Format used when printing timestamps back out
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Minimum number of space separated tokens: date, time, level, message
const MIN_TOKENS: usize = 4;

/// Why a line was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected at least 4 tokens, found {0}")]
    TooFewTokens(usize),

    #[error("expected 'YYYY-MM-DD HH:MM:SS', found '{0}'")]
    MalformedInstant(String),

    #[error("invalid timestamp '{date} {time}'")]
    BadTimestamp { date: String, time: String },
}

/// Parse one log line into a [`LogRecord`].
///
/// The line is trimmed before it is split on single spaces, so `\r\n` endings
/// and trailing blanks do not produce empty tokens. The untrimmed line is kept
/// as the record's raw line.
pub fn parse_line(line: &str) -> Result<LogRecord, ParseError> {
    let tokens: Vec<&str> = line.trim().split(' ').collect();
    if tokens.len() < MIN_TOKENS {
        return Err(ParseError::TooFewTokens(tokens.len()));
    }

    let timestamp = parse_date_time(tokens[0], tokens[1])?;
    let level = tokens[2].to_string();
    let message = tokens[3..].join(" ");

    Ok(LogRecord::new(timestamp, level, message, line.to_string()))
}

/// Parse a `YYYY-MM-DD HH:MM:SS` instant, as used for `--since`/`--until`.
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime, ParseError> {
    let mut parts = s.trim().split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(date), Some(time), None) => parse_date_time(date, time),
        _ => Err(ParseError::MalformedInstant(s.to_string())),
    }
}

fn parse_date_time(date: &str, time: &str) -> Result<NaiveDateTime, ParseError> {
    let bad = || ParseError::BadTimestamp {
        date: date.to_string(),
        time: time.to_string(),
    };

    // chrono accepts single-digit fields and signed years; the format is fixed width
    if !has_shape(date, "dddd-dd-dd") || !has_shape(time, "dd:dd:dd") {
        return Err(bad());
    }

    let date = NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| bad())?;
    let time = NaiveTime::parse_from_str(time, TIME_FORMAT).map_err(|_| bad())?;
    Ok(date.and_time(time))
}

/// Check `s` against a pattern where `d` is an ASCII digit and anything else is literal
fn has_shape(s: &str, pattern: &str) -> bool {
    s.len() == pattern.len()
        && s.bytes().zip(pattern.bytes()).all(|(c, p)| match p {
            b'd' => c.is_ascii_digit(),
            _ => c == p,
        })
}
