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

use crate::parser::ParseError;
use chrono::NaiveDateTime;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop a run before anything is reported.
///
/// Malformed log lines are not errors at this level; they only show up in
/// the invalid line count.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("log file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid --{bound} time: {source}")]
    InvalidTimestamp {
        bound: &'static str,
        #[source]
        source: ParseError,
    },

    #[error("start time {since} is later than end time {until}")]
    InvertedTimeRange {
        since: NaiveDateTime,
        until: NaiveDateTime,
    },

    #[error("top-N must be a positive integer, got {0}")]
    InvalidTopN(usize),

    #[error("at least one level is required")]
    EmptyLevels,

    #[error("configuration error in {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, AnalyzeError>;
