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

//! JSON rendering. Field order is fixed by declaration order.

use crate::core::{RankedEntry, RunStatistics};
use crate::Analysis;
use serde::Serialize;
use std::io::{self, Write};

/// The machine-readable ranking document
#[derive(Debug, Serialize)]
pub struct StructuredReport<'a> {
    /// Requested levels, sorted
    pub levels: Vec<&'a str>,
    pub top_n: usize,
    /// Empty when nothing matched
    pub entries: &'a [RankedEntry],
}

impl<'a> StructuredReport<'a> {
    #[must_use]
    pub fn new(analysis: &'a Analysis) -> Self {
        Self {
            levels: analysis.filter.levels().iter().map(String::as_str).collect(),
            top_n: analysis.top_n.get(),
            entries: analysis.ranking.entries(),
        }
    }
}

/// Pretty-printed JSON followed by a newline
pub fn write_ranking<W: Write>(out: &mut W, analysis: &Analysis) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &StructuredReport::new(analysis))?;
    writeln!(out)
}

pub fn write_statistics<W: Write>(out: &mut W, stats: &RunStatistics) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, stats)?;
    writeln!(out)
}
