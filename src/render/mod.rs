//! Plain-text rendering of the comparison report.

use crate::model::OpReport;

/// Render one line per compared operation, and one line per failing version
/// for operations that could not be compared.
pub fn render_report(reports: &[OpReport]) -> String {
    let mut out = String::new();
    for report in reports {
        match report {
            OpReport::Compared {
                op,
                durations,
                diff,
                ratio,
            } => {
                out.push_str(&format!(
                    "{} times: [{:.1}, {:.1}] seconds, diff: {:.1} seconds",
                    op, durations[0] as f64, durations[1] as f64, *diff as f64
                ));
                if let Some(ratio) = ratio {
                    out.push_str(&format!(" ({:.2}x)", ratio));
                }
                out.push('\n');
            }
            OpReport::Failed { op, failures } => {
                for (version, message) in failures {
                    out.push_str(&format!("{}: [{}] {}\n", op, version, message));
                }
            }
        }
    }
    out
}
