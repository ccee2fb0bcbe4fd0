//! Comparison model: pair two versions' timing indexes into per-operation
//! reports.

use crate::ops::{Operation, Version};
use crate::scan::TimingIndex;
use anyhow::anyhow;

/// One version's extracted timings, tagged with the version label the
/// sources were scanned under.
#[derive(Debug)]
pub struct VersionTimings {
    pub version: Version,
    pub timings: TimingIndex,
}

/// Comparison outcome for one operation.
#[derive(Debug, Clone, PartialEq)]
pub enum OpReport {
    /// Both versions produced a timing pair.
    Compared {
        op: Operation,
        /// Durations in seconds, in the order the versions were given.
        durations: [i64; 2],
        /// First duration minus second; positive means the first-listed
        /// version was slower.
        diff: i64,
        /// First duration over second, absent when the second is zero.
        ratio: Option<f64>,
    },
    /// At least one version failed to produce a timing for this operation.
    Failed {
        op: Operation,
        failures: Vec<(Version, String)>,
    },
}

/// Build one report per tracked operation, in the given order.
///
/// An operation compares only when both versions extracted a timing for it;
/// otherwise the report carries every failing version's error so one bad
/// operation never hides the others.
pub fn build_comparison(
    tracked: &[Operation],
    mut first: VersionTimings,
    mut second: VersionTimings,
) -> Vec<OpReport> {
    let mut reports = Vec::with_capacity(tracked.len());
    for &op in tracked {
        let a = take_outcome(&mut first, op);
        let b = take_outcome(&mut second, op);
        let report = match (a, b) {
            (Ok(a), Ok(b)) => {
                let durations = [a.duration_seconds(), b.duration_seconds()];
                let diff = durations[0] - durations[1];
                let ratio = (durations[1] != 0)
                    .then(|| durations[0] as f64 / durations[1] as f64);
                OpReport::Compared {
                    op,
                    durations,
                    diff,
                    ratio,
                }
            }
            (a, b) => {
                let mut failures = Vec::new();
                if let Err(err) = a {
                    failures.push((first.version.clone(), format!("{:#}", err)));
                }
                if let Err(err) = b {
                    failures.push((second.version.clone(), format!("{:#}", err)));
                }
                OpReport::Failed { op, failures }
            }
        };
        reports.push(report);
    }
    reports
}

fn take_outcome(
    version: &mut VersionTimings,
    op: Operation,
) -> crate::Result<crate::scan::OperationTiming> {
    version.timings.remove(&op).unwrap_or_else(|| {
        Err(anyhow!(
            "no timing extracted for operation {} in version {}",
            op,
            version.version
        ))
    })
}
