//! Per-source extraction: walk the lines of one log, collect marker
//! timestamps per operation, and finalize them into timing pairs.

use crate::Result;
use crate::ops::Operation;
use crate::scan::marker::{Phase, match_marker};
use crate::scan::timestamp::{TimeFormat, detect_format, parse_time};
use crate::scan::timing::OperationTiming;
use anyhow::{Context, anyhow};
use chrono::NaiveTime;
use log::{debug, warn};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Extraction outcome per tracked operation: a usable timing pair, or the
/// error that prevented one. Failures stay local to their operation so the
/// rest of the comparison can still be reported.
pub type TimingIndex = BTreeMap<Operation, Result<OperationTiming>>;

#[derive(Debug, Default, Clone, Copy)]
struct PartialTiming {
    begin: Option<NaiveTime>,
    end: Option<NaiveTime>,
}

/// Scan a log file and extract timings for every tracked operation.
///
/// An unreadable file is fatal; everything else is recorded per operation in
/// the returned index.
pub fn scan_file(path: &Path, tracked: &[Operation]) -> Result<TimingIndex> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read log file {}", path.display()))?;
    Ok(scan_lines(&path.display().to_string(), text.lines(), tracked))
}

/// Scan the lines of one source into a per-operation timing index.
///
/// Only marker lines are interpreted; any other line is skipped. Marker
/// lines look like:
///
/// 2024-10-28 13:58:12 +01 - [Information-...]: The operation Backup has started
///
/// The timestamp format (colon vs period separators) is locked from the
/// first marker line of the source. Markers for operations outside `tracked`
/// are ignored, and when a line repeats an (operation, phase) pair the later
/// line wins.
pub fn scan_lines<'a, I>(source: &str, lines: I, tracked: &[Operation]) -> TimingIndex
where
    I: IntoIterator<Item = &'a str>,
{
    let mut format: Option<TimeFormat> = None;
    let mut partials: BTreeMap<Operation, PartialTiming> = BTreeMap::new();
    let mut failures: BTreeMap<Operation, anyhow::Error> = BTreeMap::new();

    for (lineno, line) in lines.into_iter().enumerate() {
        let lno = lineno + 1;
        let Some(marker) = match_marker(line) else {
            continue;
        };
        if !tracked.contains(&marker.op) {
            continue;
        }
        // The first failure for an operation stands; later markers cannot
        // make its timing trustworthy again.
        if failures.contains_key(&marker.op) {
            continue;
        }

        let fmt = match format {
            Some(fmt) => fmt,
            None => match detect_format(marker.time_token) {
                Ok(fmt) => {
                    debug!("{}: locked {} timestamps at line {}", source, fmt, lno);
                    format = Some(fmt);
                    fmt
                }
                Err(err) => {
                    failures.insert(
                        marker.op,
                        err.context(format!("bad timestamp at {}:{}", source, lno)),
                    );
                    continue;
                }
            },
        };

        let time = match parse_time(marker.time_token, fmt) {
            Ok(time) => time,
            Err(err) => {
                failures.insert(
                    marker.op,
                    err.context(format!("bad timestamp at {}:{}", source, lno)),
                );
                continue;
            }
        };

        let partial = partials.entry(marker.op).or_default();
        let slot = match marker.phase {
            Phase::Started => &mut partial.begin,
            Phase::Completed => &mut partial.end,
        };
        if slot.is_some() {
            warn!(
                "{}:{}: duplicate \"{}\" marker for operation {}, keeping the later one",
                source,
                lno,
                marker.phase.word(),
                marker.op
            );
        }
        *slot = Some(time);
    }

    let index = finalize(source, tracked, partials, failures);
    let extracted = index.values().filter(|outcome| outcome.is_ok()).count();
    debug!(
        "{}: extracted {}/{} operation timings",
        source,
        extracted,
        index.len()
    );
    index
}

/// Turn accumulated partial timings into one outcome per tracked operation.
fn finalize(
    source: &str,
    tracked: &[Operation],
    partials: BTreeMap<Operation, PartialTiming>,
    mut failures: BTreeMap<Operation, anyhow::Error>,
) -> TimingIndex {
    let mut index = TimingIndex::new();
    for &op in tracked {
        if let Some(err) = failures.remove(&op) {
            index.insert(op, Err(err));
            continue;
        }
        let partial = partials.get(&op).copied().unwrap_or_default();
        let outcome = match (partial.begin, partial.end) {
            (Some(begin), Some(end)) => Ok(OperationTiming { begin, end }),
            (None, _) => Err(missing(source, op, Phase::Started)),
            (_, None) => Err(missing(source, op, Phase::Completed)),
        };
        index.insert(op, outcome);
    }
    index
}

fn missing(source: &str, op: Operation, phase: Phase) -> anyhow::Error {
    anyhow!(
        "no \"{}\" marker for operation {} in {}",
        phase.word(),
        op,
        source
    )
}

/// Merge the indexes scanned from one version's source files.
///
/// The first successful timing for an operation wins; when every source
/// failed, the first source's error is kept.
pub fn merge_indexes(indexes: Vec<TimingIndex>) -> TimingIndex {
    let mut merged = TimingIndex::new();
    for index in indexes {
        for (op, outcome) in index {
            match merged.get(&op) {
                None => {
                    merged.insert(op, outcome);
                }
                Some(Err(_)) if outcome.is_ok() => {
                    merged.insert(op, outcome);
                }
                _ => {}
            }
        }
    }
    merged
}
