//! Log scanning: the marker grammar, timestamp formats, and per-source
//! timing extraction.

pub mod marker;
pub mod source;
pub mod timestamp;
pub mod timing;

pub use source::{TimingIndex, merge_indexes, scan_file, scan_lines};
pub use timing::OperationTiming;
