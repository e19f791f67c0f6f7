use crate::error::{Result, StageError};
use serde::Serialize;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Component, Path, PathBuf};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct StageProgress {
    pub entries_processed: usize,
    pub total_entries: usize,
    pub bytes_written: u64,
    pub current_entry: Option<String>,
    pub start_time: Instant,
}

impl StageProgress {
    pub fn new(total_entries: usize) -> Self {
        Self {
            entries_processed: 0,
            total_entries,
            bytes_written: 0,
            current_entry: None,
            start_time: Instant::now(),
        }
    }

    pub fn update_entry(&mut self, name: String, bytes: u64) {
        self.entries_processed += 1;
        self.bytes_written += bytes;
        self.current_entry = Some(name);
    }

    pub fn percentage(&self) -> f64 {
        if self.total_entries == 0 {
            0.0
        } else {
            (self.entries_processed as f64 / self.total_entries as f64) * 100.0
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Final result of a staging run, printed to stdout (never written to disk).
#[derive(Debug, Clone, Serialize)]
pub struct StageSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub entries_extracted: usize,
    pub bytes_written: u64,
    pub duration_ms: u128,
}

impl StageSummary {
    pub fn from_progress(input: &Path, output: &Path, progress: &StageProgress) -> Self {
        Self {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            entries_extracted: progress.entries_processed,
            bytes_written: progress.bytes_written,
            duration_ms: progress.elapsed().as_millis(),
        }
    }
}

pub struct ArchiveStager {
    preserve_unix_mode: bool,
}

impl Default for ArchiveStager {
    fn default() -> Self {
        Self::new()
    }
}

impl ArchiveStager {
    pub fn new() -> Self {
        Self {
            preserve_unix_mode: true,
        }
    }

    pub fn with_preserve_unix_mode(mut self, preserve: bool) -> Self {
        self.preserve_unix_mode = preserve;
        self
    }

    /// Extract every entry of the archive at `archive_path` into `dest`,
    /// preserving the archive's internal directory structure.
    ///
    /// The archive handle is scoped to this call and released on every exit
    /// path. There is no rollback: if extraction fails partway through,
    /// already-written entries remain on disk.
    pub fn extract(
        &self,
        archive_path: &Path,
        dest: &Path,
        progress_callback: Option<&dyn Fn(&StageProgress)>,
    ) -> Result<StageProgress> {
        let file = fs::File::open(archive_path).map_err(|e| match e.kind() {
            ErrorKind::NotFound | ErrorKind::PermissionDenied => StageError::ArchiveNotFound {
                path: archive_path.to_path_buf(),
            },
            _ => StageError::Io(e),
        })?;

        let mut archive =
            zip::ZipArchive::new(file).map_err(|e| self.corrupt(archive_path, e))?;

        let mut progress = StageProgress::new(archive.len());

        for i in 0..archive.len() {
            let mut entry = archive
                .by_index(i)
                .map_err(|e| self.corrupt(archive_path, e))?;

            let relative = sanitize_entry_path(entry.name())?;
            // Some archives carry a bare "." or empty root entry.
            if relative.as_os_str().is_empty() {
                continue;
            }
            let outpath = dest.join(&relative);

            let bytes = if entry.is_dir() {
                fs::create_dir_all(&outpath)?;
                0
            } else {
                if let Some(parent) = outpath.parent() {
                    fs::create_dir_all(parent)?;
                }
                let mut outfile = fs::File::create(&outpath)?;
                let bytes = io::copy(&mut entry, &mut outfile)?;

                #[cfg(unix)]
                if self.preserve_unix_mode {
                    use std::os::unix::fs::PermissionsExt;
                    if let Some(mode) = entry.unix_mode() {
                        fs::set_permissions(&outpath, fs::Permissions::from_mode(mode)).ok();
                    }
                }

                bytes
            };

            progress.update_entry(entry.name().to_string(), bytes);
            if let Some(callback) = progress_callback {
                callback(&progress);
            }
        }

        Ok(progress)
    }

    fn corrupt(&self, archive_path: &Path, error: zip::result::ZipError) -> StageError {
        match error {
            zip::result::ZipError::Io(source) => StageError::Io(source),
            other => StageError::CorruptArchive {
                path: archive_path.to_path_buf(),
                reason: other.to_string(),
            },
        }
    }
}

/// Validate and normalize an archive entry name into a relative path.
///
/// Rejects absolute paths and any `..` component so that no entry can
/// resolve outside the extraction root (zip-slip).
pub fn sanitize_entry_path(name: &str) -> Result<PathBuf> {
    let path = Path::new(name);

    if path.is_absolute() {
        return Err(StageError::UnsafeEntryPath {
            entry: name.to_string(),
        });
    }

    let mut relative = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(StageError::UnsafeEntryPath {
                    entry: name.to_string(),
                });
            }
        }
    }

    Ok(relative)
}
