//! Marker-line recognition.
//!
//! A marker line signals the start or completion of an operation's run:
//!
//! 2024-10-28 13:58:12 +01 - [Information-...-StartingOperation]: The operation Backup has started
//!
//! The grammar is positional: split the line on whitespace, then the last
//! token must be `started` or `completed`, the second-to-last `has`, and the
//! third-to-last a known operation name; the timestamp is the second token.
//! Word checks are case-insensitive, so interleaved logs for several
//! operations and the plain `the operation <op> has started` phrasing are
//! both covered.

use crate::ops::Operation;

/// Whether a marker opens or closes an operation's timing window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Started,
    Completed,
}

impl Phase {
    pub fn word(self) -> &'static str {
        match self {
            Phase::Started => "started",
            Phase::Completed => "completed",
        }
    }
}

/// A recognized marker line, borrowing its timestamp token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker<'a> {
    pub op: Operation,
    pub phase: Phase,
    pub time_token: &'a str,
}

/// Recognize a marker line.
///
/// Free-form lines, markers for unknown operation names, and lines too short
/// to carry a timestamp in the second position all yield `None`.
pub fn match_marker(line: &str) -> Option<Marker<'_>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    // The timestamp sits at tokens[1], so the trailing "<op> has <phase>"
    // triple must start at tokens[2] or later.
    if tokens.len() < 5 {
        return None;
    }

    let phase = match tokens[tokens.len() - 1] {
        t if t.eq_ignore_ascii_case("started") => Phase::Started,
        t if t.eq_ignore_ascii_case("completed") => Phase::Completed,
        _ => return None,
    };
    if !tokens[tokens.len() - 2].eq_ignore_ascii_case("has") {
        return None;
    }
    let op = tokens[tokens.len() - 3].parse::<Operation>().ok()?;

    Some(Marker {
        op,
        phase,
        time_token: tokens[1],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn marker_recognizes_start_line() {
        let line = "2024-10-28 13:58:12 +01 - [Information-Duplicati.Library.Main.Controller-StartingOperation]: The operation Backup has started";
        assert_eq!(
            match_marker(line),
            Some(Marker {
                op: Operation::Backup,
                phase: Phase::Started,
                time_token: "13:58:12",
            })
        );
    }

    #[test]
    fn marker_recognizes_completion_line() {
        let line = "2024-10-28 14:12:03 +01 - [Information-Duplicati.Library.Main.Controller-CompletedOperation]: The operation Backup has completed";
        assert_eq!(
            match_marker(line),
            Some(Marker {
                op: Operation::Backup,
                phase: Phase::Completed,
                time_token: "14:12:03",
            })
        );
    }

    #[test]
    fn marker_is_case_insensitive_and_whitespace_tolerant() {
        let shouting = "  2024-10-28 13:58:12 +01 - The Operation Backup Has Started  ";
        let plain = "2024-10-28 13:58:12 +01 - the operation backup has started";
        assert_eq!(match_marker(shouting), match_marker(plain));
        assert_eq!(match_marker(plain).map(|m| m.op), Some(Operation::Backup));
    }

    #[test]
    fn marker_reads_operation_from_third_to_last_token() {
        let line = "host 22.15.01 - delete has completed";
        assert_eq!(
            match_marker(line),
            Some(Marker {
                op: Operation::Delete,
                phase: Phase::Completed,
                time_token: "22.15.01",
            })
        );
    }

    #[test]
    fn free_form_lines_are_not_markers() {
        assert_eq!(match_marker("Checkpoint reached, 42 volumes uploaded"), None);
        assert_eq!(match_marker(""), None);
    }

    #[test]
    fn unknown_operations_are_not_markers() {
        let line = "2024-10-28 13:58:12 +01 - The operation Compact has started";
        assert_eq!(match_marker(line), None);
    }

    #[test]
    fn lines_without_room_for_a_timestamp_are_not_markers() {
        assert_eq!(match_marker("backup has started"), None);
        assert_eq!(match_marker("x backup has started"), None);
    }
}
