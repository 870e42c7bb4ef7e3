//! Two-source policy resolution for the ownership check.

/// Whether the ownership check runs for this invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnforcementDecision {
    Enforce,
    Skip,
}

/// Combine the per-invocation CLI override with the persisted setting.
///
/// Precedence:
/// 1. CLI override present and `true` wins: Skip.
/// 2. Otherwise a persisted value of exactly `false` yields Skip.
/// 3. Otherwise Enforce. An absent source contributes no opinion, so the
///    absence of both is Enforce (fail-safe default).
///
/// The decision is recomputed fresh on every invocation; it is never cached
/// across process lifetimes. Note the deliberate asymmetry: the CLI flag is
/// presence-only and can only veto the check, never force-enable it.
#[must_use]
pub fn resolve(cli_override: Option<bool>, persisted: Option<bool>) -> EnforcementDecision {
    if cli_override == Some(true) || persisted == Some(false) {
        EnforcementDecision::Skip
    } else {
        EnforcementDecision::Enforce
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_override_wins_over_every_persisted_value() {
        for persisted in [None, Some(true), Some(false)] {
            assert_eq!(resolve(Some(true), persisted), EnforcementDecision::Skip);
        }
    }

    #[test]
    fn persisted_false_skips_when_no_override() {
        assert_eq!(resolve(None, Some(false)), EnforcementDecision::Skip);
        assert_eq!(resolve(Some(false), Some(false)), EnforcementDecision::Skip);
    }

    #[test]
    fn persisted_true_or_absent_enforces() {
        assert_eq!(resolve(None, Some(true)), EnforcementDecision::Enforce);
        assert_eq!(resolve(Some(false), Some(true)), EnforcementDecision::Enforce);
        assert_eq!(resolve(Some(false), None), EnforcementDecision::Enforce);
    }

    #[test]
    fn absence_of_both_sources_is_fail_safe() {
        assert_eq!(resolve(None, None), EnforcementDecision::Enforce);
    }
}
