use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StageError {
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Archive not found or unreadable: {}", path.display())]
    ArchiveNotFound { path: PathBuf },

    #[error("Corrupt or unsupported archive: {}: {reason}", path.display())]
    CorruptArchive { path: PathBuf, reason: String },

    #[error("Output path exists but is not a directory: {}", path.display())]
    OutputCollision { path: PathBuf },

    #[error("Archive entry escapes the output directory: {entry}")]
    UnsafeEntryPath { entry: String },
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for StageError {
    fn user_message(&self) -> String {
        match self {
            StageError::Io(source) => {
                format!("Filesystem operation failed: {}", source)
            }
            StageError::ArchiveNotFound { path } => {
                format!("Cannot open archive: {}", path.display())
            }
            StageError::CorruptArchive { path, reason } => {
                format!("Not a valid ZIP archive: {} ({})", path.display(), reason)
            }
            StageError::OutputCollision { path } => {
                format!(
                    "Output path exists but is not a directory: {}",
                    path.display()
                )
            }
            StageError::UnsafeEntryPath { entry } => {
                format!("Refusing to extract unsafe entry path: {}", entry)
            }
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            StageError::Io(_) => Some(
                "Check that you have read access to the archive and write access to the output location.".to_string()
            ),
            StageError::ArchiveNotFound { .. } => Some(
                "Verify the input path points to an existing, readable file.".to_string()
            ),
            StageError::CorruptArchive { .. } => Some(
                "The file may be truncated or in a different format. Re-download or rebuild the archive.".to_string()
            ),
            StageError::OutputCollision { .. } => Some(
                "Remove the file at the output path or choose a different --output directory. The tool only resets directories, never files.".to_string()
            ),
            StageError::UnsafeEntryPath { .. } => Some(
                "The archive contains an entry that would resolve outside the output directory (e.g. via '..' or an absolute path). Rebuild it from a trusted source.".to_string()
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, StageError>;
