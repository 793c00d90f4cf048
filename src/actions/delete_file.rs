use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Returns false when the path does not exist.
pub(crate) fn execute(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    fs::remove_file(path)
        .with_context(|| format!("Failed to delete file: {}", path.display()))?;
    Ok(true)
}
