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

use super::notice;
use crate::core::RunStatistics;
use crate::Analysis;
use std::io::{self, Write};

/// `<message> <count>` per entry, followed by the no-results or
/// fewer-than-requested line when one applies
pub fn write_ranking<W: Write>(out: &mut W, analysis: &Analysis) -> io::Result<()> {
    for entry in analysis.ranking.entries() {
        writeln!(out, "{} {}", entry.message, entry.count)?;
    }
    if let Some(line) = notice(analysis) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

pub fn write_statistics<W: Write>(out: &mut W, stats: &RunStatistics) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "total lines:   {}", stats.total())?;
    writeln!(out, "valid lines:   {}", stats.valid())?;
    writeln!(out, "invalid lines: {}", stats.invalid())?;
    writeln!(out, "matched lines: {}", stats.matched())
}
