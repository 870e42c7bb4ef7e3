#![forbid(unsafe_code)]
//! Ownergate: configuration-ownership enforcement for administrative CLIs.
//!
//! Safety model highlights:
//! - The ownership check runs exactly once, early in process startup, strictly
//!   before any privileged operation executes.
//! - Detection is pure: [`verify::verify_ownership`] returns a [`types::Verdict`]
//!   and never terminates the process. Only the bootstrap boundary maps a
//!   violation to an exit action.
//! - Policy resolution is fail-safe: with no CLI input and no persisted setting,
//!   enforcement is on.

pub mod constants;
pub mod adapters;
pub mod bootstrap;
pub mod enforce;
pub mod logging;
pub mod policy;
pub mod types;
pub mod verify;

pub use enforce::{Outcome, OwnerEnforcer};
pub use policy::decision::EnforcementDecision;
pub use types::{ConsoleContext, Identity, OwnershipMismatch, Verdict};
