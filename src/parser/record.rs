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

use chrono::NaiveDateTime;

/// A single validated log line: `YYYY-MM-DD HH:MM:SS LEVEL message...`
///
/// Built once by [`crate::parser::parse_line`] and never re-derived from
/// `raw_line` afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Parsed timestamp (second precision, no timezone)
    timestamp: NaiveDateTime,
    /// Level token, verbatim
    level: String,
    /// Everything after the level, joined with single spaces
    message: String,
    /// Original line as read, without its line terminator
    raw_line: String,
    /// 1-based line number in the source (0 when parsed outside a file)
    line_number: usize,
}

impl LogRecord {
    pub const fn new(
        timestamp: NaiveDateTime,
        level: String,
        message: String,
        raw_line: String,
    ) -> Self {
        Self {
            timestamp,
            level,
            message,
            raw_line,
            line_number: 0,
        }
    }

    /// Attach the source line number
    #[must_use]
    pub const fn with_line_number(mut self, line_number: usize) -> Self {
        self.line_number = line_number;
        self
    }

    #[must_use]
    pub const fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    #[must_use]
    pub fn level(&self) -> &str {
        &self.level
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn raw_line(&self) -> &str {
        &self.raw_line
    }

    #[must_use]
    pub const fn line_number(&self) -> usize {
        self.line_number
    }
}
