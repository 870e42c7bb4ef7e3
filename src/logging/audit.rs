// Audit helpers that emit ownership-gate facts with a minimal envelope.
//
// Every fact carries: `schema_version`, `ts` (RFC 3339), `invocation_id`, and
// whatever event-specific fields the caller supplies.

use serde_json::{json, Value};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::constants::FACTS_SCHEMA_VERSION;
use crate::logging::FactsEmitter;

const SUBSYSTEM: &str = "ownergate";

/// Per-invocation audit context; one invocation id per process run.
pub struct AuditCtx<'a> {
    facts: &'a dyn FactsEmitter,
    invocation_id: String,
}

impl<'a> AuditCtx<'a> {
    pub fn new(facts: &'a dyn FactsEmitter) -> Self {
        Self {
            facts,
            invocation_id: Uuid::new_v4().to_string(),
        }
    }

    /// Emit one fact with the minimal envelope applied.
    pub fn emit(&self, event: &str, decision: &str, extra: Value) {
        let ts = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_else(|_| String::new());
        let mut fields = serde_json::Map::new();
        fields.insert("schema_version".into(), json!(FACTS_SCHEMA_VERSION));
        fields.insert("ts".into(), json!(ts));
        fields.insert("invocation_id".into(), json!(self.invocation_id));
        fields.insert("event".into(), json!(event));
        if let Value::Object(obj) = extra {
            for (k, v) in obj {
                fields.insert(k, v);
            }
        }
        self.facts
            .emit(SUBSYSTEM, event, decision, Value::Object(fields));
    }
}
