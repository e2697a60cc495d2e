use std::ffi::OsString;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use pathnorm::{Flavor, Normalizer};

use crate::config::AppConfig;
use crate::output::{OutputError, OutputFormat, OutputSink};

mod config;
mod metrics;
mod output;
mod telemetry;

#[derive(Debug, Parser)]
#[command(name = "pathnorm", version, about = "Lexically normalize POSIX and Windows paths")]
struct Args {
    /// Path to a YAML config (relative paths inside it are resolved based on this file's directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Prefix rules: posix or windows. Overrides the config file.
    #[arg(long)]
    flavor: Option<Flavor>,

    /// Output format. Overrides the config file.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Print Prometheus counters to stderr when done
    #[arg(long)]
    metrics: bool,

    /// Paths to normalize. Read from stdin, one per line, when none are given.
    paths: Vec<OsString>,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let mut cfg = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if args.flavor.is_some() {
        cfg.flavor = args.flavor;
    }
    if args.format.is_some() {
        cfg.format = args.format;
    }
    if args.metrics {
        cfg.metrics = Some(true);
    }

    telemetry::init_tracing("pathnorm", cfg.log_dir.as_deref())?;

    let normalizer = Normalizer::new(cfg.flavor());
    tracing::debug!(flavor = %normalizer.flavor(), format = ?cfg.format(), "starting");

    let stdout = io::stdout();
    let mut sink = OutputSink::new(cfg.format(), BufWriter::new(stdout.lock()));

    let stats = if args.paths.is_empty() {
        let stdin = io::stdin();
        let lines = stdin.lock().split(b'\n').map(|line| {
            line.map(|mut l| {
                if l.last() == Some(&b'\r') {
                    l.pop();
                }
                l
            })
        });
        process(&normalizer, lines, &mut sink)?
    } else {
        let args = args.paths.into_iter().map(|p| Ok(p.into_encoded_bytes()));
        process(&normalizer, args, &mut sink)?
    };
    sink.flush().context("flush stdout")?;

    tracing::info!(total = stats.total, rejected = stats.rejected, "done");

    if cfg.metrics_enabled() {
        metrics::registry::write_text(&mut io::stderr().lock())?;
    }

    Ok(if stats.rejected == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

#[derive(Debug, Default, PartialEq, Eq)]
struct BatchStats {
    total: usize,
    rejected: usize,
}

/// Normalize every input and write it to `sink`. A result the output format
/// cannot carry is logged and counted; I/O errors end the batch.
fn process<I, W>(normalizer: &Normalizer, inputs: I, sink: &mut OutputSink<W>) -> Result<BatchStats>
where
    I: IntoIterator<Item = io::Result<Vec<u8>>>,
    W: Write,
{
    let flavor = normalizer.flavor().as_str();
    let mut stats = BatchStats::default();

    for raw in inputs {
        let raw = raw.context("read input")?;
        let normalized = normalizer.normalize(&raw);
        stats.total += 1;

        metrics::counters::on_normalized(flavor, normalized.is_absolute(), normalized.parent_refs());
        tracing::trace!(input = %String::from_utf8_lossy(&raw), output = %normalized, "normalized");

        match sink.write(&raw, &normalized) {
            Ok(()) => {}
            Err(OutputError::Path(e)) => {
                stats.rejected += 1;
                metrics::counters::inc_output_error("not_representable");
                tracing::warn!(input = %String::from_utf8_lossy(&raw), "skipping path: {}", e);
            }
            Err(OutputError::Io(e)) => return Err(e).context("write output"),
        }
    }

    Ok(stats)
}
