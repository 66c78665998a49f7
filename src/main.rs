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

use anyhow::Context;
use clap::Parser;
use logtally::config::{AnalysisConfig, OutputOptions, Settings, UserConfig};
use logtally::report::write_report;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[cfg(feature = "ram-profiling")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

#[derive(Parser, Debug)]
#[command(name = "logtally")]
#[command(version = VERSION)]
#[command(about = "Report the most frequent log messages for the given levels", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
struct Args {
    /// Log file with lines like `2024-01-01 10:00:00 ERROR message`
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Levels to match, case-sensitive (repeatable or comma separated) [default: ERROR]
    #[arg(short, long = "level", value_name = "LEVEL", value_delimiter = ',')]
    levels: Vec<String>,

    /// Number of messages to report [default: 3]
    #[arg(short = 'n', long = "top", value_name = "N")]
    top: Option<usize>,

    /// Ignore lines before this instant (inclusive), `YYYY-MM-DD HH:MM:SS`
    #[arg(long, value_name = "TIME")]
    since: Option<String>,

    /// Ignore lines after this instant (inclusive), `YYYY-MM-DD HH:MM:SS`
    #[arg(long, value_name = "TIME")]
    until: Option<String>,

    /// Suppress the per-line display of matched records
    #[arg(short, long)]
    quiet: bool,

    /// Print every matched line before the ranking
    #[arg(short, long)]
    verbose: bool,

    /// Keep at most this many matched lines for --verbose
    #[arg(long, value_name = "N", requires = "verbose")]
    max_records: Option<NonZeroUsize>,

    /// Print the ranking as JSON
    #[arg(long)]
    json: bool,

    /// Print line statistics
    #[arg(short, long)]
    stats: bool,

    /// Read defaults from this file instead of the user config directory
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path for the DHAT heap profiling output (only used when built with --features ram-profiling)
    #[cfg(feature = "ram-profiling")]
    #[arg(
        long = "profile-output",
        value_name = "PROFILE_FILE",
        default_value = "dhat-heap.json"
    )]
    profile_output: PathBuf,
}

impl Args {
    const fn output_options(&self) -> OutputOptions {
        OutputOptions {
            quiet: self.quiet,
            verbose: self.verbose,
            structured: self.json,
            show_stats: self.stats,
        }
    }

    fn into_settings(self) -> Settings {
        Settings {
            path: self.file,
            levels: self.levels,
            top: self.top,
            since: self.since,
            until: self.until,
            max_records: self.max_records,
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout only carries the report.
    // Set RUST_LOG environment variable to override (e.g., RUST_LOG=debug)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    #[cfg(feature = "ram-profiling")]
    let _profiler = {
        tracing::info!("RAM profiling enabled, output: {:?}", args.profile_output);
        dhat::Profiler::builder()
            .file_name(args.profile_output.clone())
            .build()
    };

    #[cfg(feature = "cpu-profiling")]
    {
        tracing::info!("CPU profiling enabled with Tracy - run Tracy profiler to connect");
    }

    tracing::debug!("LogTally {VERSION} starting up");

    let user = match &args.config {
        Some(path) => UserConfig::load_from(path)?,
        None => UserConfig::load(),
    };

    let options = args.output_options();
    let config = AnalysisConfig::resolve(args.into_settings(), &user, options)?;
    let analysis = logtally::analyze(&config)?;

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    write_report(&mut stdout.lock(), &mut stderr.lock(), &analysis, options)
        .context("failed to write report")
}
