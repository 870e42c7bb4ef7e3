use log::Level;
use serde_json::Value;

/// Structured fact emission for enforcement decisions and outcomes.
pub trait FactsEmitter {
    fn emit(&self, subsystem: &str, event: &str, decision: &str, fields: Value);
}

/// FactsEmitter that renders each fact as a single JSON line through `log`.
#[derive(Default)]
pub struct LogFactsSink;

impl FactsEmitter for LogFactsSink {
    fn emit(&self, subsystem: &str, event: &str, decision: &str, fields: Value) {
        let level = if decision == "failure" {
            Level::Error
        } else {
            Level::Info
        };
        log::log!(level, "{} {} {} {}", subsystem, event, decision, fields);
    }
}
