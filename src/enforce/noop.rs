use super::{Outcome, OwnerEnforcer};
use crate::types::errors::Result;

/// No-op enforcer used when policy resolution decided to skip the check.
/// Performs no IO of any kind.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopEnforcer;

impl OwnerEnforcer for NoopEnforcer {
    fn enforce(&self) -> Result<Outcome> {
        Ok(Outcome::Proceed)
    }
}
