//! Data-only type for user identities.
//! Centralized under `crate::types` for cross-layer reuse.

use std::fmt;

/// An opaque, comparable identity token: either a system account name or, when
/// the uid has no record in the system identity database, the decimal string
/// form of the uid. Resolution always succeeds; there is no "unknown" state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity(String);

impl Identity {
    /// Identity from a resolved account name.
    pub fn named(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Fallback identity for a uid with no account record.
    #[must_use]
    pub fn from_uid(uid: u32) -> Self {
        Self(uid.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uid_fallback_is_decimal_string() {
        assert_eq!(Identity::from_uid(65534).as_str(), "65534");
    }

    #[test]
    fn named_identities_compare_by_value() {
        assert_eq!(Identity::named("alice"), Identity::named("alice"));
        assert_ne!(Identity::named("alice"), Identity::named("bob"));
    }
}
