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

use crate::core::{Capture, RecordFilter, TimeRange};
use crate::error::{AnalyzeError, Result};
use crate::parser::parse_timestamp;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// Number of messages reported when nothing else asks for a different count
pub const DEFAULT_TOP_N: usize = 3;

/// Level matched when neither the command line nor the user config names one
pub const DEFAULT_LEVEL: &str = "ERROR";

/// Optional defaults stored in the user's config directory
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct UserConfig {
    /// Levels used when none are given on the command line
    #[serde(default)]
    pub levels: Vec<String>,

    /// Top-N used when none is given on the command line
    #[serde(default)]
    pub top: Option<usize>,
}

impl UserConfig {
    /// Get the path to the default config file
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("logtally").join("config.json"))
    }

    /// Load the default config file, falling back to built-in defaults.
    ///
    /// A broken file is reported and ignored; it never stops a run.
    #[must_use]
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!("No user config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring user config: {e}");
                Self::default()
            }
        }
    }

    /// Load a config file the user pointed at explicitly
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| AnalyzeError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config = Self::from_json(path, &contents)?;
        tracing::debug!(
            "Loaded user config from {} ({} levels, top {:?})",
            path.display(),
            config.levels.len(),
            config.top
        );
        Ok(config)
    }

    fn from_json(path: &Path, contents: &str) -> Result<Self> {
        serde_json::from_str(contents).map_err(|e| AnalyzeError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

/// How results are presented
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct OutputOptions {
    /// Suppress matched record display
    pub quiet: bool,
    /// Show every matched record before the ranking
    pub verbose: bool,
    /// Emit the ranking as JSON
    pub structured: bool,
    /// Append line statistics
    pub show_stats: bool,
}

impl OutputOptions {
    #[must_use]
    pub const fn show_records(&self) -> bool {
        self.verbose && !self.quiet
    }
}

/// Run parameters as supplied by the caller, before validation
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub path: PathBuf,
    pub levels: Vec<String>,
    pub top: Option<usize>,
    pub since: Option<String>,
    pub until: Option<String>,
    pub max_records: Option<NonZeroUsize>,
}

/// Validated run parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub path: PathBuf,
    pub filter: RecordFilter,
    pub top_n: NonZeroUsize,
    pub capture: Capture,
}

impl AnalysisConfig {
    /// Validate `settings`, filling gaps from `user` and then the built-in defaults.
    ///
    /// Everything that can be rejected without reading the log is rejected here.
    pub fn resolve(settings: Settings, user: &UserConfig, output: OutputOptions) -> Result<Self> {
        let levels = match (settings.levels.is_empty(), user.levels.is_empty()) {
            (false, _) => settings.levels,
            (true, false) => user.levels.clone(),
            (true, true) => vec![DEFAULT_LEVEL.to_string()],
        };

        let top = settings.top.or(user.top).unwrap_or(DEFAULT_TOP_N);
        let top_n = NonZeroUsize::new(top).ok_or(AnalyzeError::InvalidTopN(top))?;

        let since = parse_bound("since", settings.since.as_deref())?;
        let until = parse_bound("until", settings.until.as_deref())?;
        let filter = RecordFilter::new(levels, TimeRange::new(since, until)?)?;

        let capture = match (output.show_records(), settings.max_records) {
            (false, _) => Capture::Off,
            (true, None) => Capture::All,
            (true, Some(limit)) => Capture::First(limit),
        };

        Ok(Self {
            path: settings.path,
            filter,
            top_n,
            capture,
        })
    }
}

fn parse_bound(
    bound: &'static str,
    value: Option<&str>,
) -> Result<Option<chrono::NaiveDateTime>> {
    value
        .map(|s| {
            parse_timestamp(s).map_err(|source| AnalyzeError::InvalidTimestamp { bound, source })
        })
        .transpose()
}
