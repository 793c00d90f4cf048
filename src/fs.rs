use anyhow::Result;
use std::fs;
use std::path::Path;

/// Copy `source` to `destination`, carrying over the permission bits and
/// modification time of the original file. Returns the number of bytes copied.
pub(crate) fn copy_preserving(source: &Path, destination: &Path) -> Result<u64> {
    let bytes = fs::copy(source, destination)?;
    let metadata = fs::metadata(source)?;
    if metadata.permissions().readonly() {
        // The copied mode blocks reopening for the timestamp update.
        let mut writable = metadata.permissions();
        writable.set_readonly(false);
        fs::set_permissions(destination, writable)?;
    }
    let file = fs::OpenOptions::new().write(true).open(destination)?;
    file.set_modified(metadata.modified()?)?;
    drop(file);
    if metadata.permissions().readonly() {
        fs::set_permissions(destination, metadata.permissions())?;
    }
    Ok(bytes)
}

pub(crate) fn file_label(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().to_string(),
        None => path.display().to_string(),
    }
}
