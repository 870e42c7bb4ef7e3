//! Enforcement strategies for the configuration-ownership check.
//!
//! Strategies decide what to do about ownership of the protected file; they
//! never terminate the process themselves. Detection stays in
//! [`crate::verify`], the exit action stays in [`crate::bootstrap`].

mod noop;
mod strict;

pub use noop::NoopEnforcer;
pub use strict::StrictEnforcer;

use crate::types::errors::Result;

/// What the process should do after the enforcement step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Continue with the invocation.
    Proceed,
    /// Stop the invocation with the given exit status.
    Halt { code: i32 },
}

/// Behavior applied exactly once per invocation, before any privileged
/// operation runs.
pub trait OwnerEnforcer {
    /// Run the check (or skip it).
    /// # Errors
    /// Returns an error only for fatal environment conditions, such as the
    /// protected file's metadata being unreadable.
    fn enforce(&self) -> Result<Outcome>;
}
