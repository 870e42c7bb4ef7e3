//! Default IdentityResolver implementation using the OS identity database
//! (Unix-only).

use std::env;

use crate::constants::FORCE_IDENTITY_ENV;
use crate::types::errors::{Error, ErrorKind, Result};
use crate::types::Identity;

/// Resolves numeric uids to identities and reports the identity of the
/// running process.
pub trait IdentityResolver: Send + Sync {
    /// Effective uid of the current process.
    fn current_uid(&self) -> u32;

    /// Map a uid to an identity. Never fails: a uid with no record in the
    /// identity database resolves to its decimal string form.
    fn resolve(&self, uid: u32) -> Identity;

    /// Identity of the current process.
    fn current_identity(&self) -> Identity {
        self.resolve(self.current_uid())
    }
}

/// IdentityResolver backed by the system identity database (NSS/passwd).
#[derive(Copy, Clone, Debug, Default)]
pub struct NssIdentityResolver;

#[cfg(unix)]
impl IdentityResolver for NssIdentityResolver {
    fn current_uid(&self) -> u32 {
        nix::unistd::geteuid().as_raw()
    }

    fn resolve(&self, uid: u32) -> Identity {
        // Chrooted or containerized environments can run under uids that have
        // no passwd record; files can be owned by such uids too. Fall back to
        // the decimal form instead of failing.
        match nix::unistd::User::from_uid(nix::unistd::Uid::from_raw(uid)) {
            Ok(Some(user)) => Identity::named(user.name),
            Ok(None) | Err(_) => Identity::from_uid(uid),
        }
    }
}

// Unreachable in practice: `require_identity_capability` refuses before any
// enforcer runs on platforms without an identity database.
#[cfg(not(unix))]
impl IdentityResolver for NssIdentityResolver {
    fn current_uid(&self) -> u32 {
        0
    }

    fn resolve(&self, uid: u32) -> Identity {
        Identity::from_uid(uid)
    }
}

/// Probe for the OS identity-query capability.
///
/// The enforcement bootstrap calls this before building a strategy; a missing
/// capability is a deployment-environment failure and must refuse to proceed
/// rather than silently skip the check.
///
/// Test override knob: `OWNERGATE_FORCE_IDENTITY_OK=1|0` forces the result.
pub fn require_identity_capability() -> Result<()> {
    if let Ok(v) = env::var(FORCE_IDENTITY_ENV) {
        match v.trim() {
            "1" => return Ok(()),
            "0" => {
                return Err(Error {
                    kind: ErrorKind::Capability,
                    msg: "identity capability forced unavailable".into(),
                })
            }
            _ => {}
        }
    }
    #[cfg(unix)]
    {
        Ok(())
    }
    #[cfg(not(unix))]
    {
        Err(Error {
            kind: ErrorKind::Capability,
            msg: "OS identity queries are not supported on this platform".into(),
        })
    }
}
