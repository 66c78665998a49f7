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

pub mod filter;
pub mod frequency;
pub mod processor;
pub mod ranking;
pub mod stats;

pub use filter::{RecordFilter, TimeRange};
pub use frequency::FrequencyTable;
pub use processor::{process_file, process_reader, Capture, LineProcessor, Tally};
pub use ranking::{rank, RankedEntry, RankedResult, Ranking};
pub use stats::RunStatistics;
