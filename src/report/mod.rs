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

//! Rendering of an [`Analysis`].
//!
//! Both renderings read the same [`crate::core::Ranking`]; neither re-sorts
//! or re-counts anything. In structured mode stdout carries only the JSON
//! document, and everything else (matched records, notices, statistics) goes
//! to the secondary stream.

pub mod plain;
pub mod structured;

use crate::config::OutputOptions;
use crate::core::Ranking;
use crate::parser::{LogRecord, TIMESTAMP_FORMAT};
use crate::Analysis;
use std::io::{self, Write};

const RECORD_SEPARATOR: &str = "________________________";

/// Write the full report for `analysis`.
///
/// `out` receives the result; `err` receives side output in structured mode.
pub fn write_report<W: Write, E: Write>(
    out: &mut W,
    err: &mut E,
    analysis: &Analysis,
    options: OutputOptions,
) -> io::Result<()> {
    if options.structured {
        if options.show_records() {
            write_records(err, &analysis.tally.records)?;
        }
        structured::write_ranking(out, analysis)?;
        if let Some(notice) = notice(analysis) {
            writeln!(err, "{notice}")?;
        }
        if options.show_stats {
            structured::write_statistics(err, &analysis.tally.stats)?;
        }
    } else {
        if options.show_records() {
            write_records(out, &analysis.tally.records)?;
        }
        plain::write_ranking(out, analysis)?;
        if options.show_stats {
            plain::write_statistics(out, &analysis.tally.stats)?;
        }
    }
    out.flush()
}

/// Informational line for the no-results and fewer-than-requested outcomes
#[must_use]
pub fn notice(analysis: &Analysis) -> Option<String> {
    match &analysis.ranking {
        Ranking::NoResults => Some(no_results_message(analysis)),
        Ranking::Ranked(result) if result.is_short() => Some(format!(
            "only {} distinct message(s) found, fewer than the requested {}",
            result.entries().len(),
            result.requested()
        )),
        Ranking::Ranked(_) => None,
    }
}

fn no_results_message(analysis: &Analysis) -> String {
    let levels: Vec<&str> = analysis.filter.levels().iter().map(String::as_str).collect();
    format!("no results for requested levels: {}", levels.join(", "))
}

/// Matched records in file order, one block each
pub fn write_records<W: Write>(out: &mut W, records: &[LogRecord]) -> io::Result<()> {
    for record in records {
        writeln!(out, "line: {}", record.line_number())?;
        writeln!(out, "raw line: {:?}", record.raw_line())?;
        writeln!(out, "time: {}", record.timestamp().format(TIMESTAMP_FORMAT))?;
        writeln!(out, "level: {}", record.level())?;
        writeln!(out, "message: {}", record.message())?;
        writeln!(out, "{RECORD_SEPARATOR}")?;
    }
    Ok(())
}
