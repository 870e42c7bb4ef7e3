//! CLI option registration, decision persistence, and enforcer construction.

use std::sync::Arc;

use clap::{Arg, ArgAction, ArgMatches, Command};

use super::decision::{self, EnforcementDecision};
use crate::adapters::SettingsStore;
use crate::constants::{CHECK_OWNER_SETTING, NO_OWNER_CHECK_HELP, NO_OWNER_CHECK_OPT};
use crate::enforce::{NoopEnforcer, OwnerEnforcer, StrictEnforcer};
use crate::logging::ConsoleSink;
use crate::types::errors::Result;
use crate::types::ConsoleContext;

/// Declare the suppression flag into the surrounding CLI schema.
///
/// Presence-only boolean, no short form, fixed help text. Called once per
/// process at argument-definition time, before parsing.
#[must_use]
pub fn register_options(cmd: Command) -> Command {
    cmd.arg(
        Arg::new(NO_OWNER_CHECK_OPT)
            .long(NO_OWNER_CHECK_OPT)
            .action(ArgAction::SetTrue)
            .help(NO_OWNER_CHECK_HELP),
    )
}

/// Whether parsed input carries the suppression flag. Absent input is "no
/// opinion" and reads as `false`.
#[must_use]
pub fn override_present(input: Option<&ArgMatches>) -> bool {
    input.is_some_and(|m| m.get_flag(NO_OWNER_CHECK_OPT))
}

/// Record the CLI-observed override under the fixed settings key.
///
/// Written unconditionally on every invocation so that consumers running
/// without CLI context can see the last CLI-observed intent.
///
/// # Errors
/// Returns an error when the settings store cannot be written.
pub fn persist_decision(input: &ArgMatches, settings: &dyn SettingsStore) -> Result<()> {
    settings.set_bool(CHECK_OWNER_SETTING, override_present(Some(input)))
}

/// Select and construct the enforcement strategy for this invocation.
///
/// Either source may be absent; see [`decision::resolve`] for precedence.
/// The strict variant is built against `ctx`'s configuration file and writes
/// diagnostics to `sink`.
#[must_use]
pub fn build_enforcer(
    input: Option<&ArgMatches>,
    settings: Option<&dyn SettingsStore>,
    sink: Arc<dyn ConsoleSink>,
    ctx: &ConsoleContext,
) -> Box<dyn OwnerEnforcer> {
    let cli_override = input.map(|m| m.get_flag(NO_OWNER_CHECK_OPT));
    let persisted = settings.and_then(|s| s.get_bool(CHECK_OWNER_SETTING));
    match decision::resolve(cli_override, persisted) {
        EnforcementDecision::Skip => Box::new(NoopEnforcer),
        EnforcementDecision::Enforce => Box::new(StrictEnforcer::new(ctx.clone(), sink)),
    }
}
