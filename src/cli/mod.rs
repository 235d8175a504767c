/*
 * SPDX-FileCopyrightText: 2025 The pajek-hig developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Command-line interface structs, functions, and methods.

use crate::convert::{convert, hig_path, ConversionStats};
use crate::options::GraphOptions;
use anyhow::{bail, Context, Result};
use clap::{Args, Parser};
use dsi_progress_logger::prelude::*;
use jiff::fmt::friendly::{Designator, Spacing, SpanPrinter};
use jiff::SpanRound;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use std::time::SystemTime;

pub mod build_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));

    pub fn version_string() -> String {
        format!(
            "{}
git info: {} {} {}
build info: built on {} for {} with {}",
            PKG_VERSION,
            GIT_VERSION.unwrap_or(""),
            GIT_COMMIT_HASH.unwrap_or(""),
            match GIT_DIRTY {
                None => "",
                Some(true) => "(dirty)",
                Some(false) => "(clean)",
            },
            BUILT_TIME_UTC,
            TARGET,
            RUSTC_VERSION
        )
    }
}

#[derive(Args, Debug)]
pub struct GlobalArgs {
    #[arg(long, value_parser = parse_duration, display_order = 1000)]
    /// How often to log conversion progress, as in "30s", "1m30s" or "500"
    /// (milliseconds). Units are d, h, m and s.
    pub log_interval: Option<Duration>,
}

#[derive(Parser, Debug)]
#[command(
    name = "pajek-hig",
    version = build_info::version_string(),
    arg_required_else_help = true,
    after_help = "Environment (noteworthy environment variables used):
RUST_LOG: configuration for env_logger, pass `debug` to see section
  transitions and `trace` to see all the details."
)]
/// Converts a graph from the Pajek network format (.net/.pjk) to the HiG
/// format, line by line. The output is written next to the input with
/// extension .hig unless --output is given. Short options can be bundled,
/// as in -sr.
pub struct Cli {
    /// The Pajek file to convert.
    pub src: PathBuf,

    #[arg(short, long)]
    /// The HiG file to write.
    pub output: Option<PathBuf>,

    #[arg(short = 's', long)]
    /// Write links without weights (simple, unweighted graph).
    pub simple: bool,

    #[arg(short = 'n', long)]
    /// Mark the links for normalization in the /Graph header.
    pub normalize: bool,

    #[arg(short = 'r', long)]
    /// Resolve duplicated links, keeping the last weight of each.
    pub resolve_duplicates: bool,

    #[clap(flatten)]
    pub args: GlobalArgs,
}

impl From<&Cli> for GraphOptions {
    fn from(value: &Cli) -> Self {
        GraphOptions {
            weighted: !value.simple,
            normalize: value.normalize,
            resolve_duplicates: value.resolve_duplicates,
        }
    }
}

/// Creates the directory that will hold `file_path`, if missing.
fn create_parent_dir(file_path: &Path) -> Result<()> {
    match file_path.parent() {
        Some(dir) => std::fs::create_dir_all(dir)
            .with_context(|| format!("Could not create the directory {}", dir.display())),
        None => Ok(()),
    }
}

/// Parses the `--log-interval` value: a sequence of numbers, each followed
/// by one of the units `d`, `h`, `m` or `s`, or by nothing for milliseconds.
fn parse_duration(value: &str) -> Result<Duration> {
    if value.trim().is_empty() {
        bail!("Empty duration; use 0 to log at every update");
    }
    let mut millis = 0u64;
    let mut digits = String::new();
    for c in value.chars().filter(|c| !c.is_whitespace()) {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }
        let unit: u64 = match c {
            'd' => 24 * 60 * 60 * 1000,
            'h' => 60 * 60 * 1000,
            'm' => 60 * 1000,
            's' => 1000,
            _ => bail!("Invalid duration unit {:?} in {:?}", c, value),
        };
        let amount = digits
            .parse::<u64>()
            .with_context(|| format!("Missing amount before {:?} in {:?}", c, value))?;
        millis += amount * unit;
        digits.clear();
    }
    if !digits.is_empty() {
        millis += digits.parse::<u64>()?;
    }
    Ok(Duration::from_millis(millis))
}

/// Turns an elapsed time into a span of days at most, down to milliseconds.
fn elapsed_span(elapsed: Duration) -> Result<jiff::Span, jiff::Error> {
    jiff::Span::new()
        .seconds(elapsed.as_secs() as i64)
        .milliseconds(elapsed.subsec_millis() as i64)
        .round(
            SpanRound::new()
                .largest(jiff::Unit::Day)
                .smallest(jiff::Unit::Millisecond)
                .days_are_24_hours(),
        )
}

fn span_printer() -> SpanPrinter {
    SpanPrinter::new()
        .spacing(Spacing::None)
        .designator(Designator::Compact)
}

pub fn init_envlogger() -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    let start = std::time::Instant::now();
    let printer = span_printer();

    builder.format(move |buf, record| {
        let Ok(ts) = jiff::Timestamp::try_from(SystemTime::now()) else {
            return Err(std::io::Error::other("Failed to get timestamp"));
        };
        let style = buf.default_level_style(record.level());
        let span = elapsed_span(start.elapsed()).map_err(std::io::Error::other)?;
        writeln!(
            buf,
            "{} {} {style}{}{style:#} [{:?}] {} - {}",
            ts.strftime("%F %T%.3f"),
            printer.span_to_string(&span),
            record.level(),
            std::thread::current().id(),
            record.target(),
            record.args()
        )
    });
    builder.init();
    Ok(())
}

/// Converts the Pajek file named on the command line.
pub fn main(cli: Cli) -> Result<ConversionStats> {
    let options = GraphOptions::from(&cli);
    let input = File::open(&cli.src)
        .with_context(|| format!("Could not open the Pajek file {}", cli.src.display()))?;
    log::info!("File {} is opened, converting...", cli.src.display());

    let dst = cli.output.clone().unwrap_or_else(|| hig_path(&cli.src));
    create_parent_dir(&dst)?;
    let output = File::create(&dst)
        .with_context(|| format!("Could not create the HiG file {}", dst.display()))?;
    log::info!("File {} is created, filling...", dst.display());

    let mut pl = ProgressLogger::default();
    pl.display_memory(true);
    if let Some(duration) = cli.args.log_interval {
        pl.log_interval(duration);
    }

    let stats = convert(
        BufReader::new(input),
        BufWriter::new(output),
        cli.src.display(),
        options,
        &mut pl,
    )
    .with_context(|| format!("Could not convert {}", cli.src.display()))?;

    log::info!(
        "Data is converted: {} lines, {} nodes, {} links ({} self-loops moved to arcs)",
        stats.lines,
        stats.num_nodes,
        stats.links,
        stats.deferred_loops
    );
    Ok(stats)
}

/// The entry point of the command-line interface.
pub fn cli_main<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let start = std::time::Instant::now();
    main(Cli::parse_from(args))?;

    let span = elapsed_span(start.elapsed())?;
    log::info!("The command took {}", span_printer().span_to_string(&span));

    Ok(())
}
