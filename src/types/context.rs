//! Immutable startup context identifying the protected resource.

use std::path::{Path, PathBuf};

use crate::constants::CONFIG_FILE_NAME;

/// Startup-resolved context threaded into enforcers and the bootstrap
/// boundary. Carries the configuration directory as an explicit value instead
/// of a process-wide mutable global; construct once, pass down.
#[derive(Clone, Debug)]
pub struct ConsoleContext {
    config_dir: PathBuf,
}

impl ConsoleContext {
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Path of the protected configuration file.
    #[must_use]
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }
}
