//! Whole-file writes that never leave a half-written target behind.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Replace the contents of `path` with `contents`.
///
/// The data is written to a temporary file in the same directory and then
/// renamed over the target, so readers see either the old or the new file.
/// An existing target keeps its permissions, and a symlink is written
/// through to the file it points at. The parent directory must already
/// exist.
///
/// # Example
/// ```rust,no_run
/// use addon_installer::utils::atomic_file;
/// use std::path::Path;
///
/// atomic_file::write_atomic(Path::new("addons.json"), b"{}")?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let target = resolve_target(path)?;
    let parent = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp_file = NamedTempFile::new_in(parent).with_context(|| {
        format!(
            "Failed to create temporary file in {}",
            parent.display()
        )
    })?;

    temp_file
        .write_all(contents)
        .context("Failed to write to temporary file")?;

    if let Ok(metadata) = fs::metadata(&target) {
        fs::set_permissions(temp_file.path(), metadata.permissions())
            .context("Failed to copy file permissions")?;
    }

    temp_file
        .as_file()
        .sync_all()
        .context("Failed to flush temporary file")?;

    temp_file
        .persist(&target)
        .with_context(|| format!("Failed to persist file to {}", target.display()))?;

    Ok(())
}

/// Text convenience wrapper around [`write_atomic`].
pub fn write_text_atomic(path: &Path, contents: &str) -> Result<()> {
    write_atomic(path, contents.as_bytes())
}

/// The file a write to `path` should land in: the symlink target when
/// `path` is a link, otherwise `path` itself.
fn resolve_target(path: &Path) -> Result<PathBuf> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.file_type().is_symlink() => match fs::canonicalize(path) {
            Ok(target) => Ok(target),
            // Dangling link: create the file it points at.
            Err(_) => {
                let link = fs::read_link(path)
                    .with_context(|| format!("Failed to read link {}", path.display()))?;
                Ok(match path.parent() {
                    Some(parent) if link.is_relative() => parent.join(link),
                    _ => link,
                })
            }
        },
        _ => Ok(path.to_path_buf()),
    }
}
