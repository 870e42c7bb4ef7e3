//! Persisted key-value settings adapters.
//!
//! The enforcement subsystem consumes settings through the narrow
//! [`SettingsStore`] trait; the default adapter is a JSON object file managed
//! read-modify-write.

use std::path::PathBuf;

use serde_json::{Map, Value};

use crate::types::errors::{Error, ErrorKind, Result};

/// Narrow read/write interface over persisted application settings.
pub trait SettingsStore: Send + Sync {
    /// Read a boolean setting. Absent keys, absent stores, and non-boolean
    /// values all read as `None` (no opinion).
    fn get_bool(&self, key: &str) -> Option<bool>;

    /// Write a boolean setting, creating the store if needed.
    /// # Errors
    /// Returns an error when the store cannot be read or written.
    fn set_bool(&self, key: &str, value: bool) -> Result<()>;
}

/// SettingsStore backed by a JSON object file.
#[derive(Clone, Debug)]
pub struct JsonFileSettings {
    path: PathBuf,
}

impl JsonFileSettings {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<Map<String, Value>> {
        let bytes = match std::fs::read(&self.path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => {
                return Err(Error {
                    kind: ErrorKind::Settings,
                    msg: format!("read {}: {}", self.path.display(), e),
                })
            }
        };
        match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(Error {
                kind: ErrorKind::Settings,
                msg: format!("{}: settings root must be an object", self.path.display()),
            }),
            Err(e) => Err(Error {
                kind: ErrorKind::Settings,
                msg: format!("parse {}: {}", self.path.display(), e),
            }),
        }
    }
}

impl SettingsStore for JsonFileSettings {
    fn get_bool(&self, key: &str) -> Option<bool> {
        self.load().ok()?.get(key)?.as_bool()
    }

    fn set_bool(&self, key: &str, value: bool) -> Result<()> {
        let mut map = self.load()?;
        map.insert(key.to_string(), Value::Bool(value));
        let rendered = serde_json::to_vec_pretty(&Value::Object(map)).map_err(|e| Error {
            kind: ErrorKind::Settings,
            msg: format!("serialize settings: {e}"),
        })?;
        std::fs::write(&self.path, rendered).map_err(|e| Error {
            kind: ErrorKind::Io,
            msg: format!("write {}: {}", self.path.display(), e),
        })
    }
}
