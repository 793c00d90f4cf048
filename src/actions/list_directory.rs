use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub(crate) fn execute(path: &Path) -> Result<Vec<String>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(path)
        .with_context(|| format!("Failed to read directory: {}", path.display()))?
    {
        let entry = entry
            .with_context(|| format!("Failed to read directory entry in {}", path.display()))?;
        entries.push(entry.file_name().to_string_lossy().to_string());
    }
    Ok(entries)
}
