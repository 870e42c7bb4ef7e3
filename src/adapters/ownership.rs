//! Default OwnershipOracle implementation using OS metadata (Unix-only).

use std::path::Path;

use crate::types::errors::{Error, ErrorKind, Result};

/// Reports the owning uid of a filesystem path.
pub trait OwnershipOracle: Send + Sync {
    /// Get the owning uid for the specified path.
    /// # Errors
    /// Returns an error if ownership information cannot be determined.
    fn owner_uid(&self, path: &Path) -> Result<u32>;
}

#[derive(Copy, Clone, Debug, Default)]
pub struct FsOwnershipOracle;

impl OwnershipOracle for FsOwnershipOracle {
    fn owner_uid(&self, path: &Path) -> Result<u32> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::MetadataExt;
            // Follow symlinks: the protected file may be a link into a shared
            // configuration tree, and the real file's owner is what matters.
            let md = std::fs::metadata(path).map_err(|e| Error {
                kind: ErrorKind::Io,
                msg: format!("metadata {}: {}", path.display(), e),
            })?;
            Ok(md.uid())
        }
        #[cfg(not(unix))]
        {
            Err(Error {
                kind: ErrorKind::Capability,
                msg: "OwnershipOracle not supported on this platform".into(),
            })
        }
    }
}
