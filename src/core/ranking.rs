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

//! Top-N selection over a [`FrequencyTable`].
//!
//! Entries are ordered by count, highest first. Equal counts are ordered by
//! message text ascending (byte order), so the same table always ranks the
//! same way regardless of the order messages were first seen in.

use crate::core::frequency::FrequencyTable;
use serde::Serialize;
use std::cmp::Reverse;
use std::num::NonZeroUsize;

/// One ranked message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub message: String,
    pub count: u64,
}

/// Non-empty ranked list of at most `requested` entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedResult {
    entries: Vec<RankedEntry>,
    requested: NonZeroUsize,
}

impl RankedResult {
    #[must_use]
    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    #[must_use]
    pub const fn requested(&self) -> NonZeroUsize {
        self.requested
    }

    /// Fewer distinct messages existed than were asked for
    #[must_use]
    pub fn is_short(&self) -> bool {
        self.entries.len() < self.requested.get()
    }
}

/// Outcome of ranking a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ranking {
    /// Nothing matched the requested levels
    NoResults,
    Ranked(RankedResult),
}

impl Ranking {
    /// Ranked entries, empty for [`Ranking::NoResults`]
    #[must_use]
    pub fn entries(&self) -> &[RankedEntry] {
        match self {
            Self::NoResults => &[],
            Self::Ranked(result) => result.entries(),
        }
    }
}

/// Rank `table` and keep the `top_n` most frequent messages.
#[must_use]
pub fn rank(table: &FrequencyTable, top_n: NonZeroUsize) -> Ranking {
    profiling::scope!("rank");

    if table.is_empty() {
        return Ranking::NoResults;
    }

    let mut sorted: Vec<(&str, u64)> = table.iter().collect();
    sorted.sort_unstable_by_key(|&(message, count)| (Reverse(count), message));

    let entries = sorted
        .into_iter()
        .take(top_n.get())
        .map(|(message, count)| RankedEntry {
            message: message.to_string(),
            count,
        })
        .collect();

    Ranking::Ranked(RankedResult {
        entries,
        requested: top_n,
    })
}
