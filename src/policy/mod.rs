//! Policy resolution for the configuration-ownership check.
//!
//! Combines a per-invocation CLI override with a persisted default to select
//! an enforcement strategy. Submodules:
//! - `decision`: the two-valued decision and its precedence rule
//! - `resolver`: option registration, decision persistence, enforcer construction

pub mod decision;
pub mod resolver;

pub use decision::EnforcementDecision;
pub use resolver::{build_enforcer, override_present, persist_decision, register_options};
