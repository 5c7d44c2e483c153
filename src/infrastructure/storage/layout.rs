use std::fs;
use std::path::{Path, PathBuf};

use crate::shared::constants::STORAGE_SUBDIRS;
use crate::shared::errors::Result;

/// Directories created under a storage root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLayout {
    pub root: PathBuf,
    pub subdirs: Vec<PathBuf>,
}

/// Mode applied to the storage tree so the container user can write to it.
#[cfg(unix)]
const STORAGE_MODE: u32 = 0o775;

/// Create the storage root and its subdirectories.
///
/// With `fix_permissions`, every directory is chmod'ed to group-writable on
/// Unix. Existing directories are left in place.
pub fn ensure_layout(root: &Path, fix_permissions: bool) -> Result<StorageLayout> {
    fs::create_dir_all(root)?;

    let mut subdirs = Vec::with_capacity(STORAGE_SUBDIRS.len());
    for name in STORAGE_SUBDIRS {
        let dir = root.join(name);
        fs::create_dir_all(&dir)?;
        subdirs.push(dir);
    }

    if fix_permissions {
        set_mode(root)?;
        for dir in &subdirs {
            set_mode(dir)?;
        }
    }

    tracing::debug!(root = %root.display(), "Storage layout ready");

    Ok(StorageLayout { root: root.to_path_buf(), subdirs })
}

#[cfg(unix)]
fn set_mode(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(STORAGE_MODE))?;
    Ok(())
}

#[cfg(not(unix))]
fn set_mode(_path: &Path) -> Result<()> {
    Ok(())
}
