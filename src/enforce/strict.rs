use std::sync::Arc;

use super::{Outcome, OwnerEnforcer};
use crate::adapters::{FsOwnershipOracle, IdentityResolver, NssIdentityResolver, OwnershipOracle};
use crate::constants::{CHECK_OWNER_SETTING, EXIT_FAILURE, NO_OWNER_CHECK_OPT};
use crate::logging::ConsoleSink;
use crate::types::errors::Result;
use crate::types::{ConsoleContext, OwnershipMismatch, Verdict};
use crate::verify::verify_ownership;

/// Strict enforcer: verifies that the current process identity owns the
/// protected configuration file, and reports a mismatch on the error channel.
///
/// On mismatch, `enforce` returns `Outcome::Halt { code: 1 }`; the bootstrap
/// boundary performs the actual exit.
pub struct StrictEnforcer {
    ctx: ConsoleContext,
    sink: Arc<dyn ConsoleSink>,
    ids: Box<dyn IdentityResolver>,
    owner: Box<dyn OwnershipOracle>,
}

impl StrictEnforcer {
    pub fn new(ctx: ConsoleContext, sink: Arc<dyn ConsoleSink>) -> Self {
        Self {
            ctx,
            sink,
            ids: Box::new(NssIdentityResolver),
            owner: Box::new(FsOwnershipOracle),
        }
    }

    #[must_use]
    pub fn with_identity_resolver(mut self, ids: Box<dyn IdentityResolver>) -> Self {
        self.ids = ids;
        self
    }

    #[must_use]
    pub fn with_ownership_oracle(mut self, owner: Box<dyn OwnershipOracle>) -> Self {
        self.owner = owner;
        self
    }

    fn report(&self, m: &OwnershipMismatch) {
        let out = self.sink.as_ref();
        out.error_line(&format!(
            "This command has to be executed with the user account that owns '{}'.",
            m.path.display()
        ));
        out.error_line("");
        out.error_line(&format!(" Current user: {}", m.expected));
        out.error_line(&format!("Owner of file: {}", m.actual));
        out.error_line("");
        out.error_line(&format!(
            "Please verify that the file owner is correct, or try adding 'sudo -u {} ' \
             to the beginning of the command (without the single quotes)",
            m.actual
        ));
        out.error_line("");
        out.error_line(&format!(
            "Advanced users absolutely sure permissions are correct may override this \
             check by passing the '--{NO_OWNER_CHECK_OPT}' option or setting \
             '{CHECK_OWNER_SETTING}' to false in the settings file."
        ));
    }
}

impl OwnerEnforcer for StrictEnforcer {
    fn enforce(&self) -> Result<Outcome> {
        let path = self.ctx.config_file();
        let expected = self.ids.current_identity();
        match verify_ownership(&path, &expected, self.owner.as_ref(), self.ids.as_ref())? {
            Verdict::Match => Ok(Outcome::Proceed),
            Verdict::Mismatch(m) => {
                self.report(&m);
                Ok(Outcome::Halt { code: EXIT_FAILURE })
            }
        }
    }
}
