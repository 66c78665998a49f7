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

use serde::Serialize;

/// Line counters for one run.
///
/// Only the `record_*` methods change the counters, which keeps
/// `valid + invalid == total` and `matched <= valid` true at every step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStatistics {
    total: u64,
    valid: u64,
    invalid: u64,
    matched: u64,
}

impl RunStatistics {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total: 0,
            valid: 0,
            invalid: 0,
            matched: 0,
        }
    }

    /// A line that failed to parse
    pub const fn record_invalid(&mut self) {
        self.total += 1;
        self.invalid += 1;
    }

    /// A line that parsed
    pub const fn record_valid(&mut self) {
        self.total += 1;
        self.valid += 1;
    }

    /// A valid line that also passed the level and time filters.
    /// Must follow the matching `record_valid`.
    pub fn record_matched(&mut self) {
        debug_assert!(self.matched < self.valid, "matched line was never valid");
        self.matched += 1;
    }

    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    #[must_use]
    pub const fn valid(&self) -> u64 {
        self.valid
    }

    #[must_use]
    pub const fn invalid(&self) -> u64 {
        self.invalid
    }

    #[must_use]
    pub const fn matched(&self) -> u64 {
        self.matched
    }
}
