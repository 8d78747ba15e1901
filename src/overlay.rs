//! # Overlay Copy
//!
//! Copies the shared `.github` folder into a cloned repository. The target
//! folder is removed first so the result mirrors the source exactly.
//! Symlinks inside the source are recreated as symlinks on unix and
//! dereferenced elsewhere.
//!
//! Filesystem access goes through [`FileOperations`] so the runner can be
//! tested without touching the disk; [`DefaultFileOperations`] is the real
//! implementation, built on `walkdir`.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Trait for filesystem operations - allows mocking in tests
pub trait FileOperations {
    /// Replace `dst` with a recursive copy of the `src` directory.
    fn copy_overlay(&self, src: &Path, dst: &Path) -> Result<()>;
}

/// The default implementation of `FileOperations`, working on the host
/// filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultFileOperations;

impl FileOperations for DefaultFileOperations {
    fn copy_overlay(&self, src: &Path, dst: &Path) -> Result<()> {
        copy_overlay(src, dst)
    }
}

/// Replace `dst` with a recursive copy of `src`.
pub fn copy_overlay(src: &Path, dst: &Path) -> Result<()> {
    let overlay_error = |message: String| Error::Overlay {
        src: src.display().to_string(),
        dst: dst.display().to_string(),
        message,
    };

    if !src.is_dir() {
        return Err(overlay_error(
            "source folder does not exist or is not a directory".to_string(),
        ));
    }

    if let Ok(metadata) = fs::symlink_metadata(dst) {
        let removed = if metadata.is_dir() {
            fs::remove_dir_all(dst)
        } else {
            fs::remove_file(dst)
        };
        removed.map_err(|e| overlay_error(format!("cannot remove existing target: {}", e)))?;
    }
    fs::create_dir_all(dst).map_err(|e| overlay_error(e.to_string()))?;

    for entry in WalkDir::new(src).min_depth(1) {
        let entry = entry.map_err(|e| overlay_error(e.to_string()))?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| overlay_error(e.to_string()))?;
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| overlay_error(e.to_string()))?;
        } else if entry.file_type().is_symlink() {
            copy_link(entry.path(), &target).map_err(|e| {
                overlay_error(format!("cannot copy link {}: {}", relative.display(), e))
            })?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|e| overlay_error(e.to_string()))?;
            }
            fs::copy(entry.path(), &target).map_err(|e| {
                overlay_error(format!("cannot copy {}: {}", relative.display(), e))
            })?;
        }
    }

    Ok(())
}

/// Recreate a symlink at `target` pointing where `link` points.
#[cfg(unix)]
fn copy_link(link: &Path, target: &Path) -> Result<()> {
    let points_to = fs::read_link(link)?;
    std::os::unix::fs::symlink(points_to, target)?;
    Ok(())
}

/// Copy what `link` resolves to.
#[cfg(not(unix))]
fn copy_link(link: &Path, target: &Path) -> Result<()> {
    if link.is_dir() {
        copy_overlay(link, target)
    } else {
        fs::copy(link, target)?;
        Ok(())
    }
}
