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

//! `LogTally` - count and rank log messages by level and time range.
//!
//! Reads `YYYY-MM-DD HH:MM:SS LEVEL message...` lines, keeps the ones whose
//! level and timestamp match, and reports the most frequent messages.

pub mod config;
pub mod core;
pub mod error;
pub mod parser;
pub mod report;

use crate::config::AnalysisConfig;
use crate::core::{process_file, rank, RecordFilter, Ranking, Tally};
use std::num::NonZeroUsize;
use std::time::Instant;

pub use crate::error::{AnalyzeError, Result};

/// Result of one complete run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub filter: RecordFilter,
    pub top_n: NonZeroUsize,
    pub tally: Tally,
    pub ranking: Ranking,
}

/// Process the configured file and rank what matched.
///
/// Any error here happens before a report could be produced, so callers
/// never see partial results.
pub fn analyze(config: &AnalysisConfig) -> Result<Analysis> {
    let start_time = Instant::now();

    let tally = process_file(&config.path, &config.filter, config.capture)?;
    let ranking = rank(&tally.frequencies, config.top_n);

    tracing::info!(
        "Processed {} lines ({} valid, {} invalid, {} matched, {} distinct) in {:?}",
        tally.stats.total(),
        tally.stats.valid(),
        tally.stats.invalid(),
        tally.stats.matched(),
        tally.frequencies.len(),
        start_time.elapsed()
    );

    Ok(Analysis {
        filter: config.filter.clone(),
        top_n: config.top_n,
        tally,
        ranking,
    })
}
