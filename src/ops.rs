//! Operation and version labels.
//!
//! The backup tool logs the same four operations run after run; marker lines
//! name them in free-form text, so parsing is case-insensitive. Versions are
//! opaque labels ("120", "125") used only to key and order log sources,
//! never interpreted.

use anyhow::bail;
use std::fmt;
use std::str::FromStr;

/// One of the backup tool's tracked operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Operation {
    Backup,
    Repair,
    Restore,
    Delete,
}

impl Operation {
    /// Every tracked operation, in report order.
    pub const ALL: [Operation; 4] = [
        Operation::Backup,
        Operation::Repair,
        Operation::Restore,
        Operation::Delete,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::Backup => "backup",
            Operation::Repair => "repair",
            Operation::Restore => "restore",
            Operation::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for op in Operation::ALL {
            if s.eq_ignore_ascii_case(op.name()) {
                return Ok(op);
            }
        }
        bail!("unknown operation {:?} (expected backup, repair, restore or delete)", s);
    }
}

/// Opaque label for one tool version whose logs are being compared.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(pub String);

impl Version {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn operation_parses_case_insensitively() {
        assert_eq!("backup".parse::<Operation>().unwrap(), Operation::Backup);
        assert_eq!("Restore".parse::<Operation>().unwrap(), Operation::Restore);
        assert_eq!("DELETE".parse::<Operation>().unwrap(), Operation::Delete);
    }

    #[test]
    fn operation_rejects_unknown_names() {
        let err = "compact".parse::<Operation>().unwrap_err();
        assert!(err.to_string().contains("unknown operation"));
    }

    #[test]
    fn operation_displays_lowercase() {
        assert_eq!(Operation::Repair.to_string(), "repair");
        assert_eq!(Operation::ALL.map(|op| op.name()).join(", "),
            "backup, repair, restore, delete");
    }
}
