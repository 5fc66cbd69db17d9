//! Filesystem utilities.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Ensure the parent directory of `path` exists, creating it and all
/// missing ancestors if necessary. The output path itself is
/// symlink-resolved first, so a symlinked output lands its parent where
/// the link points. Idempotent: a directory that already exists is
/// success, any other creation failure propagates.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    let resolved = resolve_output_path(path);
    let Some(parent) = resolved.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() {
        return Ok(());
    }

    fs::create_dir_all(parent)
        .with_context(|| format!("failed to create directory: {}", parent.display()))
}

/// Resolve `path` the way `realpath` does, without requiring it to exist:
/// follow a symlink final component, otherwise canonicalize when possible
/// and fall back to the path as given.
fn resolve_output_path(path: &Path) -> PathBuf {
    if let Ok(target) = path.read_link() {
        if target.is_absolute() {
            return target;
        }
        if let Some(dir) = path.parent() {
            return normalize_path(dir).join(target);
        }
        return target;
    }
    normalize_path(path)
}

/// Read a file to string, with nice error messages.
pub fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("failed to read file: {}", path.display()))
}

/// Copy `src` to `dst` byte-for-byte.
pub fn copy_file(src: &Path, dst: &Path) -> Result<()> {
    fs::copy(src, dst)
        .map(|_| ())
        .with_context(|| format!("failed to copy {} to {}", src.display(), dst.display()))
}

/// Force the file mode of a build artifact to owner/group read-write.
/// Temp files are created 0o600; the published bundle must be group-readable.
#[cfg(unix)]
pub fn set_artifact_mode(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o664))
        .with_context(|| format!("failed to set permissions on {}", path.display()))
}

#[cfg(not(unix))]
pub fn set_artifact_mode(_path: &Path) -> Result<()> {
    Ok(())
}

/// Canonicalize a path, but don't fail if it doesn't exist yet.
/// Returns the path as-is if canonicalization fails.
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}
