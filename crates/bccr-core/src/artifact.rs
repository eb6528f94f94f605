//! Artifact naming and saving.
//!
//! The service returns an opaque binary blob; we name it after the seed the
//! server reports and write it atomically (temp file + rename) so a crash
//! never leaves a half-written ROM under the final name.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const FILENAME_PREFIX: &str = "MegaMan_BattleChip_Challenge_";
const FILENAME_EXT: &str = ".gba";

/// Filename for a randomized ROM produced with `seed`.
pub fn filename_for_seed(seed: &str) -> String {
    format!("{FILENAME_PREFIX}{seed}{FILENAME_EXT}")
}

/// Writes `bytes` under `dir/filename` via a `.part` temp file. The temp file
/// is removed if the rename fails.
pub fn save(dir: &Path, filename: &str, bytes: &[u8]) -> Result<PathBuf> {
    let final_path = dir.join(filename);
    let temp_path = dir.join(format!("{filename}.part"));

    fs::write(&temp_path, bytes)
        .with_context(|| format!("failed to write {}", temp_path.display()))?;
    if let Err(err) = fs::rename(&temp_path, &final_path) {
        let _ = fs::remove_file(&temp_path);
        return Err(err).with_context(|| {
            format!(
                "failed to rename {} to {}",
                temp_path.display(),
                final_path.display()
            )
        });
    }
    Ok(final_path)
}
