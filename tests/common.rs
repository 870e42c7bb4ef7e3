//! Shared test helpers for the ownergate crate integration tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::Value;

use ownergate::adapters::{IdentityResolver, SettingsStore};
use ownergate::logging::{ConsoleSink, FactsEmitter};
use ownergate::types::errors::Result;
use ownergate::types::Identity;

/// A simple in-memory emitter to capture facts during tests.
#[derive(Clone, Default)]
pub struct TestEmitter {
    pub events: Arc<Mutex<Vec<(String, String, String, Value)>>>,
}

impl FactsEmitter for TestEmitter {
    fn emit(&self, subsystem: &str, event: &str, decision: &str, fields: Value) {
        self.events
            .lock()
            .unwrap()
            .push((subsystem.into(), event.into(), decision.into(), fields));
    }
}

/// ConsoleSink capturing error-channel lines in memory.
#[derive(Clone, Default)]
pub struct TestSink {
    pub lines: Arc<Mutex<Vec<String>>>,
}

impl ConsoleSink for TestSink {
    fn error_line(&self, msg: &str) {
        self.lines.lock().unwrap().push(msg.to_string());
    }
}

impl TestSink {
    pub fn joined(&self) -> String {
        self.lines.lock().unwrap().join("\n")
    }
}

/// Programmable identity resolver: a fixed current uid plus a uid-to-name map,
/// with the same decimal fallback as the OS-backed resolver.
pub struct MapResolver {
    pub current: u32,
    pub names: HashMap<u32, String>,
}

impl IdentityResolver for MapResolver {
    fn current_uid(&self) -> u32 {
        self.current
    }

    fn resolve(&self, uid: u32) -> Identity {
        match self.names.get(&uid) {
            Some(name) => Identity::named(name.clone()),
            None => Identity::from_uid(uid),
        }
    }
}

/// In-memory settings store that records every write.
#[derive(Default)]
pub struct MemorySettings {
    pub values: Mutex<HashMap<String, bool>>,
    pub writes: Mutex<Vec<(String, bool)>>,
}

impl MemorySettings {
    pub fn with_value(key: &str, value: bool) -> Self {
        let s = Self::default();
        s.values.lock().unwrap().insert(key.to_string(), value);
        s
    }
}

impl SettingsStore for MemorySettings {
    fn get_bool(&self, key: &str) -> Option<bool> {
        self.values.lock().unwrap().get(key).copied()
    }

    fn set_bool(&self, key: &str, value: bool) -> Result<()> {
        self.values.lock().unwrap().insert(key.to_string(), value);
        self.writes.lock().unwrap().push((key.to_string(), value));
        Ok(())
    }
}
