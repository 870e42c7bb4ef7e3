//! Ownership verification: a single point-in-time stat-and-compare.

use std::path::Path;

use crate::adapters::{IdentityResolver, OwnershipOracle};
use crate::types::errors::Result;
use crate::types::{Identity, OwnershipMismatch, Verdict};

/// Compare the owning identity of `path` against `expected`.
///
/// Reads the path's owning uid through the oracle, resolves it to an identity,
/// and compares by exact string equality. A differing owner yields
/// [`Verdict::Mismatch`]; this is a designed outcome, not an error. No retries:
/// ownership is not expected to change mid-invocation.
///
/// # Errors
/// Returns an error only when the owning uid cannot be read at all, which is a
/// fatal environment condition for the protected file.
pub fn verify_ownership(
    path: &Path,
    expected: &Identity,
    oracle: &dyn OwnershipOracle,
    ids: &dyn IdentityResolver,
) -> Result<Verdict> {
    let actual = ids.resolve(oracle.owner_uid(path)?);
    if actual == *expected {
        Ok(Verdict::Match)
    } else {
        Ok(Verdict::Mismatch(OwnershipMismatch {
            path: path.to_path_buf(),
            expected: expected.clone(),
            actual,
        }))
    }
}
