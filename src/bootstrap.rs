//! Process-boundary adapter for the ownership check.
//!
//! [`Gate`] is the thin layer the surrounding CLI bootstrap invokes once,
//! early, before any privileged operation: it probes the identity capability,
//! records the CLI-observed override, runs the selected enforcement strategy,
//! and maps the outcome to an exit status. Everything below it is pure and
//! unit-testable; only [`Gate::enforce_or_exit`] actually terminates.

use std::sync::Arc;

use clap::ArgMatches;
use serde_json::json;

use crate::adapters::{identity, SettingsStore};
use crate::constants::EXIT_FAILURE;
use crate::enforce::Outcome;
use crate::logging::{AuditCtx, ConsoleSink, FactsEmitter, StderrSink};
use crate::policy;
use crate::types::ConsoleContext;

pub struct Gate<E: FactsEmitter> {
    facts: E,
    ctx: ConsoleContext,
    sink: Arc<dyn ConsoleSink>,
}

impl<E: FactsEmitter> Gate<E> {
    pub fn new(facts: E, ctx: ConsoleContext) -> Self {
        Self {
            facts,
            ctx,
            sink: Arc::new(StderrSink),
        }
    }

    #[must_use]
    pub fn with_console_sink(mut self, sink: Arc<dyn ConsoleSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Run the ownership check once and return the process exit status:
    /// 0 to proceed (check passed or was skipped), non-zero to stop.
    pub fn check(
        &self,
        input: Option<&ArgMatches>,
        settings: Option<&dyn SettingsStore>,
    ) -> i32 {
        let audit = AuditCtx::new(&self.facts);

        if let Err(e) = identity::require_identity_capability() {
            self.sink.error_line(&format!(
                "The configuration ownership check requires OS identity queries: {e}"
            ));
            audit.emit("capability", "failure", json!({ "error": e.to_string() }));
            return EXIT_FAILURE;
        }

        // Record the last CLI-observed intent for non-CLI consumers. Failure
        // to persist does not gate enforcement.
        if let (Some(m), Some(s)) = (input, settings) {
            if let Err(e) = policy::persist_decision(m, s) {
                log::warn!("could not persist ownership-check decision: {e}");
            }
        }

        let enforcer = policy::build_enforcer(input, settings, Arc::clone(&self.sink), &self.ctx);
        let path = self.ctx.config_file();
        match enforcer.enforce() {
            Ok(Outcome::Proceed) => {
                audit.emit(
                    "enforce",
                    "success",
                    json!({ "path": path.display().to_string() }),
                );
                0
            }
            Ok(Outcome::Halt { code }) => {
                audit.emit(
                    "enforce",
                    "failure",
                    json!({ "path": path.display().to_string(), "exit_code": code }),
                );
                code
            }
            Err(e) => {
                self.sink.error_line(&format!(
                    "Unable to verify ownership of '{}': {}",
                    path.display(),
                    e
                ));
                audit.emit(
                    "enforce",
                    "failure",
                    json!({
                        "path": path.display().to_string(),
                        "error": e.to_string(),
                        "exit_code": EXIT_FAILURE,
                    }),
                );
                EXIT_FAILURE
            }
        }
    }

    /// Terminate the process when the check says stop; otherwise return and
    /// let the invocation continue.
    pub fn enforce_or_exit(
        &self,
        input: Option<&ArgMatches>,
        settings: Option<&dyn SettingsStore>,
    ) {
        let code = self.check(input, settings);
        if code != 0 {
            std::process::exit(code);
        }
    }
}
