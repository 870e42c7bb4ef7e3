//! Data-only type for a failed ownership comparison.

use std::fmt;
use std::path::PathBuf;

use super::identity::Identity;

/// Immutable record of an ownership-verification failure: which file was
/// checked, who was expected to own it, and who actually owns it. Constructed
/// only at the moment a comparison fails and consumed immediately by the
/// strategy that reports it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OwnershipMismatch {
    pub path: PathBuf,
    pub expected: Identity,
    pub actual: Identity,
}

impl fmt::Display for OwnershipMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The owner of the file \"{}\" must be \"{}\" but it is currently \"{}\".",
            self.path.display(),
            self.expected,
            self.actual
        )
    }
}

/// Outcome of a single point-in-time ownership comparison.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Match,
    Mismatch(OwnershipMismatch),
}
