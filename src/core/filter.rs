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

//! Level and time range filters applied to parsed records.

use crate::error::{AnalyzeError, Result};
use crate::parser::LogRecord;
use chrono::NaiveDateTime;
use std::collections::BTreeSet;

/// Inclusive time window. Either side may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeRange {
    since: Option<NaiveDateTime>,
    until: Option<NaiveDateTime>,
}

impl TimeRange {
    /// Build a range, rejecting `since > until`
    pub fn new(since: Option<NaiveDateTime>, until: Option<NaiveDateTime>) -> Result<Self> {
        if let (Some(since), Some(until)) = (since, until) {
            if since > until {
                return Err(AnalyzeError::InvertedTimeRange { since, until });
            }
        }
        Ok(Self { since, until })
    }

    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            since: None,
            until: None,
        }
    }

    #[must_use]
    pub const fn since(&self) -> Option<NaiveDateTime> {
        self.since
    }

    #[must_use]
    pub const fn until(&self) -> Option<NaiveDateTime> {
        self.until
    }

    /// Boundary instants themselves are inside the range
    #[must_use]
    pub fn contains(&self, ts: NaiveDateTime) -> bool {
        self.since.is_none_or(|since| ts >= since) && self.until.is_none_or(|until| ts <= until)
    }
}

/// What a record has to satisfy to count as matched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFilter {
    levels: BTreeSet<String>,
    range: TimeRange,
}

impl RecordFilter {
    /// Empty level strings are dropped; at least one level must remain.
    pub fn new<I, S>(levels: I, range: TimeRange) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let levels: BTreeSet<String> = levels
            .into_iter()
            .map(Into::into)
            .filter(|level| !level.is_empty())
            .collect();

        if levels.is_empty() {
            return Err(AnalyzeError::EmptyLevels);
        }

        Ok(Self { levels, range })
    }

    /// Requested levels in sorted order
    #[must_use]
    pub const fn levels(&self) -> &BTreeSet<String> {
        &self.levels
    }

    #[must_use]
    pub const fn range(&self) -> TimeRange {
        self.range
    }

    /// Levels compare verbatim, so `error` does not match `ERROR`
    #[must_use]
    pub fn matches(&self, record: &LogRecord) -> bool {
        self.range.contains(record.timestamp()) && self.levels.contains(record.level())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{parse_line, parse_timestamp};

    fn ts(s: &str) -> NaiveDateTime {
        parse_timestamp(s).expect("valid timestamp")
    }

    fn record(line: &str) -> LogRecord {
        parse_line(line).expect("valid line")
    }

    #[test]
    fn test_range_is_inclusive() {
        let range = TimeRange::new(
            Some(ts("2024-01-01 10:00:00")),
            Some(ts("2024-01-01 10:00:10")),
        )
        .expect("ordered range");

        assert!(range.contains(ts("2024-01-01 10:00:00")));
        assert!(range.contains(ts("2024-01-01 10:00:10")));
        assert!(!range.contains(ts("2024-01-01 09:59:59")));
        assert!(!range.contains(ts("2024-01-01 10:00:11")));
    }

    #[test]
    fn test_open_ended_ranges() {
        let since_only = TimeRange::new(Some(ts("2024-01-01 10:00:00")), None).expect("range");
        assert!(since_only.contains(ts("2099-12-31 23:59:59")));
        assert!(!since_only.contains(ts("2024-01-01 09:59:59")));

        let until_only = TimeRange::new(None, Some(ts("2024-01-01 10:00:00"))).expect("range");
        assert!(until_only.contains(ts("1970-01-01 00:00:00")));
        assert!(!until_only.contains(ts("2024-01-01 10:00:01")));

        assert!(TimeRange::unbounded().contains(ts("2024-06-15 12:00:00")));
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let result = TimeRange::new(
            Some(ts("2024-01-02 00:00:00")),
            Some(ts("2024-01-01 00:00:00")),
        );
        assert!(matches!(result, Err(AnalyzeError::InvertedTimeRange { .. })));

        let instant = ts("2024-01-01 00:00:00");
        assert!(TimeRange::new(Some(instant), Some(instant)).is_ok());
    }

    #[test]
    fn test_filter_requires_a_level() {
        let result = RecordFilter::new(Vec::<String>::new(), TimeRange::unbounded());
        assert!(matches!(result, Err(AnalyzeError::EmptyLevels)));

        let result = RecordFilter::new([""], TimeRange::unbounded());
        assert!(matches!(result, Err(AnalyzeError::EmptyLevels)));
    }

    #[test]
    fn test_filter_matches_level_and_range() {
        let range = TimeRange::new(Some(ts("2024-01-01 10:00:00")), None).expect("range");
        let filter = RecordFilter::new(["ERROR", "WARN"], range).expect("filter");

        assert!(filter.matches(&record("2024-01-01 10:00:00 ERROR disk full")));
        assert!(filter.matches(&record("2024-01-01 11:00:00 WARN low memory")));
        assert!(!filter.matches(&record("2024-01-01 11:00:00 INFO started")));
        assert!(!filter.matches(&record("2024-01-01 11:00:00 error lower case")));
        assert!(!filter.matches(&record("2024-01-01 09:59:59 ERROR too early")));
    }
}
