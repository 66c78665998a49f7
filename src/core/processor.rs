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

//! Single pass over a log source: parse, filter, count.
//!
//! Lines are read one at a time so memory stays flat on large files. The only
//! thing that grows with the input is the matched record list, and only when
//! capture is turned on: with [`Capture::All`] and a file where every line
//! matches, every record is kept. [`Capture::First`] bounds that.

use crate::core::filter::RecordFilter;
use crate::core::frequency::FrequencyTable;
use crate::core::stats::RunStatistics;
use crate::error::{AnalyzeError, Result};
use crate::parser::{parse_line, LogRecord};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::num::NonZeroUsize;
use std::path::Path;

/// Which matched records to keep for display
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Capture {
    /// Keep none (counts only)
    #[default]
    Off,
    /// Keep every matched record, in file order
    All,
    /// Keep the first n matched records
    First(NonZeroUsize),
}

impl Capture {
    const fn wants_more(self, kept: usize) -> bool {
        match self {
            Self::Off => false,
            Self::All => true,
            Self::First(limit) => kept < limit.get(),
        }
    }
}

/// Everything a finished pass produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    pub frequencies: FrequencyTable,
    pub stats: RunStatistics,
    /// Matched records in file order, subject to [`Capture`]
    pub records: Vec<LogRecord>,
}

/// Feeds lines one by one into a [`Tally`]
pub struct LineProcessor<'a> {
    filter: &'a RecordFilter,
    capture: Capture,
    tally: Tally,
}

impl<'a> LineProcessor<'a> {
    #[must_use]
    pub fn new(filter: &'a RecordFilter, capture: Capture) -> Self {
        Self {
            filter,
            capture,
            tally: Tally::default(),
        }
    }

    /// Account for one line. Malformed lines only bump the invalid count.
    pub fn feed_line(&mut self, line: &str) {
        let record = match parse_line(line) {
            Ok(record) => record,
            Err(e) => {
                self.tally.stats.record_invalid();
                tracing::trace!("Skipping line {}: {e}", self.tally.stats.total());
                return;
            }
        };
        self.tally.stats.record_valid();

        if !self.filter.matches(&record) {
            return;
        }

        self.tally.stats.record_matched();
        self.tally.frequencies.increment(record.message());

        if self.capture.wants_more(self.tally.records.len()) {
            let line_number = usize::try_from(self.tally.stats.total()).unwrap_or(usize::MAX);
            self.tally.records.push(record.with_line_number(line_number));
        }
    }

    #[must_use]
    pub fn finish(self) -> Tally {
        self.tally
    }
}

/// Run a full pass over `reader`.
///
/// Invalid UTF-8 is replaced rather than rejected. Only I/O errors end the
/// pass early.
pub fn process_reader<R: BufRead>(
    mut reader: R,
    filter: &RecordFilter,
    capture: Capture,
) -> io::Result<Tally> {
    profiling::scope!("process_reader");

    let mut processor = LineProcessor::new(filter, capture);
    let mut buffer = Vec::new();

    loop {
        buffer.clear();
        if reader.read_until(b'\n', &mut buffer)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(strip_line_ending(&buffer));
        processor.feed_line(&line);
    }

    Ok(processor.finish())
}

/// Open `path` and run a full pass over it.
///
/// The file handle lives only inside this call, so it is closed on success,
/// on a read error, and on early return alike.
pub fn process_file(path: &Path, filter: &RecordFilter, capture: Capture) -> Result<Tally> {
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => AnalyzeError::FileNotFound(path.to_path_buf()),
        _ => AnalyzeError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    tracing::debug!("Processing {}", path.display());
    process_reader(BufReader::new(file), filter, capture).map_err(|source| AnalyzeError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
