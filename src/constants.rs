//! Shared crate-wide constants for Ownergate.
//!
//! Centralizes option names, settings keys, and default labels used across
//! modules. Adjusting these here will propagate through the crate.

/// Long name of the CLI option that suppresses the configuration-file
/// ownership check for the current invocation. Presence-only; no short form.
pub const NO_OWNER_CHECK_OPT: &str = "no-config-owner-check";

/// Help text registered for the suppression option.
pub const NO_OWNER_CHECK_HELP: &str =
    "Ignore ownership of the configuration file during execution";

/// Persisted settings key consulted by invocations that do not go through CLI
/// parsing. Absent means `true` (enforce); exactly `false` skips the check.
pub const CHECK_OWNER_SETTING: &str = "cli.check_config_owner";

/// File name of the protected configuration file within the configuration
/// directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Exit status used when ownership verification fails under strict
/// enforcement, or when the OS identity-query capability is absent.
pub const EXIT_FAILURE: i32 = 1;

/// Schema version stamped on every emitted decision fact.
pub const FACTS_SCHEMA_VERSION: i64 = 1;

/// Test override knob for the identity-capability probe.
/// `OWNERGATE_FORCE_IDENTITY_OK=1|0` forces the probe result.
pub const FORCE_IDENTITY_ENV: &str = "OWNERGATE_FORCE_IDENTITY_OK";
