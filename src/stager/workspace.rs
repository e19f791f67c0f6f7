use crate::error::{Result, StageError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Manages the lifecycle of the staging directory.
///
/// The reset is deliberately two sequential, observable steps (delete, then
/// recreate) rather than an atomic swap. A crash between the steps leaves no
/// output directory; that is acceptable for disposable staging workspaces.
pub struct OutputWorkspace {
    root: PathBuf,
}

impl OutputWorkspace {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Delete the staging directory if it exists, then recreate it empty.
    ///
    /// Deletion is unconditional and irreversible; there is no prompt and no
    /// force flag to gate it. If the path exists but is not a directory
    /// (regular file, symlink, ...) nothing is deleted and the call fails
    /// with [`StageError::OutputCollision`].
    pub fn reset(&self) -> Result<()> {
        // symlink_metadata so a symlink to a directory counts as a collision
        // instead of being wiped through.
        match fs::symlink_metadata(&self.root) {
            Ok(metadata) if metadata.is_dir() => {
                fs::remove_dir_all(&self.root)?;
            }
            Ok(_) => {
                return Err(StageError::OutputCollision {
                    path: self.root.clone(),
                });
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(StageError::Io(e)),
        }

        fs::create_dir_all(&self.root)?;
        Ok(())
    }
}
