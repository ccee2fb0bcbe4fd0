use anyhow::bail;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod model;
mod ops;
mod render;
mod scan;

use ops::{Operation, Version};

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "opdiff")]
#[command(about = "Compare backup operation timings between two tool versions", long_about = None)]
struct Cli {
    /// Log extraction details to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare per-operation durations extracted from two versions' logs.
    Compare {
        /// Log source as VERSION=PATH; repeat for more sources. Exactly two
        /// distinct versions must appear.
        #[arg(long, value_name = "VERSION=PATH", required = true)]
        log: Vec<String>,

        /// Operation to compare (defaults to all four).
        #[arg(long, value_name = "OPERATION")]
        op: Vec<Operation>,
    },
}

/// One version's log sources, in the order they were given.
type LogSpec = (Version, Vec<PathBuf>);

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if cli.verbose { "debug" } else { "off" }),
    )
    .init();

    match cli.cmd {
        Commands::Compare { log, op } => {
            // 1) Group the log sources by version (exactly two expected).
            let (first, second) = parse_log_specs(&log)?;
            let tracked = tracked_operations(&op);

            // 2) Extract per-operation timings for each version.
            let first = scan_version(first, &tracked)?;
            let second = scan_version(second, &tracked)?;

            // 3) Compare and render.
            let reports = model::build_comparison(&tracked, first, second);
            print!("{}", render::render_report(&reports));
        }
    }

    Ok(())
}

/// Group `VERSION=PATH` arguments into exactly two log specs, keeping the
/// order versions first appeared on the command line.
fn parse_log_specs(raw: &[String]) -> Result<(LogSpec, LogSpec)> {
    let mut specs: Vec<LogSpec> = Vec::new();
    for arg in raw {
        let Some((version, path)) = arg.split_once('=') else {
            bail!("--log takes VERSION=PATH, got {:?}", arg);
        };
        if version.is_empty() || path.is_empty() {
            bail!("--log takes VERSION=PATH, got {:?}", arg);
        }
        match specs.iter_mut().find(|(v, _)| v.0 == version) {
            Some((_, paths)) => paths.push(PathBuf::from(path)),
            None => specs.push((Version::new(version), vec![PathBuf::from(path)])),
        }
    }
    match <[LogSpec; 2]>::try_from(specs) {
        Ok([first, second]) => Ok((first, second)),
        Err(specs) => bail!(
            "expected --log sources for exactly two versions, got {}",
            specs.len()
        ),
    }
}

/// The operations to compare: the requested ones without repeats, or all
/// four when none were requested.
fn tracked_operations(requested: &[Operation]) -> Vec<Operation> {
    if requested.is_empty() {
        return Operation::ALL.to_vec();
    }
    let mut tracked = Vec::new();
    for &op in requested {
        if !tracked.contains(&op) {
            tracked.push(op);
        }
    }
    tracked
}

/// Scan every source of one version and merge the results.
fn scan_version((version, paths): LogSpec, tracked: &[Operation]) -> Result<model::VersionTimings> {
    let mut indexes = Vec::with_capacity(paths.len());
    for path in &paths {
        indexes.push(scan::scan_file(path, tracked)?);
    }
    Ok(model::VersionTimings {
        version,
        timings: scan::merge_indexes(indexes),
    })
}
