use crate::shared::{AuditError, Result};
use std::fs;
use std::path::Path;

/// Largest input file the tool will read (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Checks that `path` is a regular, non-symlinked file of acceptable size
///
/// Uses `symlink_metadata()` so the link itself is inspected rather than
/// its target.
///
/// # Arguments
/// * `path` - File to check
/// * `label` - Human-readable name used in error messages (e.g. "package.json")
///
/// # Errors
/// Returns an error if the file cannot be inspected, is a symbolic link,
/// is not a regular file or is larger than [`MAX_FILE_SIZE`].
pub fn ensure_readable_file(path: &Path, label: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", label, e))?;

    if metadata.is_symlink() {
        return Err(AuditError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} is a symbolic link", label),
            hint: "Symbolic links are not followed; point the tool at the real file".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    ensure_size_within(metadata.len(), path, MAX_FILE_SIZE)
}

/// Refuses to overwrite a symbolic link; a missing path is fine
pub fn ensure_not_symlink(path: &Path) -> Result<()> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_symlink() => Err(AuditError::SecurityError {
            path: path.to_path_buf(),
            reason: "Refusing to write through a symbolic link".to_string(),
            hint: "Choose an output path that is not a symbolic link".to_string(),
        }
        .into()),
        _ => Ok(()),
    }
}

pub fn ensure_size_within(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}
