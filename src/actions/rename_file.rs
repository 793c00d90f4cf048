use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::fs::copy_preserving;

/// Copy-then-delete; returns false when the source does not exist.
pub(crate) fn execute(source: &Path, destination: &Path) -> Result<bool> {
    if !source.exists() {
        return Ok(false);
    }
    copy_preserving(source, destination).with_context(|| {
        format!(
            "Failed to copy '{}' to '{}'",
            source.display(),
            destination.display()
        )
    })?;
    fs::remove_file(source)
        .with_context(|| format!("Failed to remove source file: {}", source.display()))?;
    Ok(true)
}
