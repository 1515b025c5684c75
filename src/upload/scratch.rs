//! Scratch-file staging for in-flight uploads.

use std::path::{Path, PathBuf};

/// A uniquely named staging file that must not outlive its request.
///
/// Callers are expected to consume the guard with [`ScratchFile::remove`] on
/// every exit path; `Drop` performs a blocking best-effort unlink so a
/// cancelled request does not orphan the file.
pub(crate) struct ScratchFile {
    path: PathBuf,
    removed: bool,
}

impl ScratchFile {
    /// Create the scratch directory if needed and write `bytes` to
    /// `dir/file_name`.
    pub(crate) async fn create(dir: &Path, file_name: &str, bytes: &[u8]) -> std::io::Result<Self> {
        tokio::fs::create_dir_all(dir).await?;
        let path = dir.join(file_name);
        tokio::fs::write(&path, bytes).await?;
        Ok(Self {
            path,
            removed: false,
        })
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the staged file. Failures are logged and swallowed; cleanup
    /// must never replace the request's primary response.
    pub(crate) async fn remove(mut self) {
        self.removed = true;
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => tracing::trace!(path = %self.path.display(), "Removed scratch file"),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "Failed to remove scratch file"
                );
            }
        }
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        if !self.removed {
            let _ = std::fs::remove_file(&self.path);
        }
    }
}
