//! ROM file loading.
//!
//! Reads the user's selected file fully into memory. An empty selection is a
//! silent no-op (guard clause, not an error): selecting nothing must produce
//! no request, no status update, and no failure.

use std::path::PathBuf;

/// A user file selection, possibly empty. The transport only ever looks at
/// the first entry.
#[derive(Debug, Clone, Default)]
pub struct FileSelection {
    pub files: Vec<PathBuf>,
}

impl FileSelection {
    /// Selection containing a single path.
    pub fn single(path: impl Into<PathBuf>) -> Self {
        Self {
            files: vec![path.into()],
        }
    }
}

/// Reads the first selected file fully into a byte buffer.
///
/// Returns `None` when the selection is empty. A failed read also yields
/// `None`: it is logged to the diagnostic channel and produces no downstream
/// action (no retry, no user-visible report).
pub async fn read_selected(selection: &FileSelection) -> Option<Vec<u8>> {
    let path = selection.files.first()?;
    match tokio::fs::read(path).await {
        Ok(buf) => Some(buf),
        Err(err) => {
            tracing::warn!("rom read failed: {}: {}", path.display(), err);
            None
        }
    }
}
