//! Byte accounting for the measured artifact.
//!
//! `measure` resolves the target path once, then recursively sums the
//! sizes of every regular file beneath it. Directories named for
//! version control or dependency management are skipped wholesale;
//! symlinks and special files never count.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::CoreError;

/// Directory names excluded from measurement at any depth.
const EXCLUDED_DIRS: &[&str] = &[".git", "node_modules"];

/// Total size in bytes of the artifact at `path`.
///
/// A regular file yields its exact length; a directory yields the
/// recursive sum of contained regular files (0 for an empty tree).
/// A missing path is the one fatal condition of the whole run.
pub fn measure(path: &Path) -> Result<u64, CoreError> {
    // Follows a symlinked root so "resolves to a directory" behaves
    // the way callers expect; inside the walk symlinks are skipped.
    let meta = fs::metadata(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            CoreError::PathNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CoreError::Walk {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    if meta.is_file() {
        return Ok(meta.len());
    }
    if meta.is_dir() {
        return sum_dir(path);
    }
    Ok(0)
}

fn sum_dir(dir: &Path) -> Result<u64, CoreError> {
    let entries = fs::read_dir(dir).map_err(|source| CoreError::Walk {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut total: u64 = 0;
    for entry in entries {
        let entry = entry.map_err(|source| CoreError::Walk {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        let meta = fs::symlink_metadata(&path).map_err(|source| CoreError::Walk {
            path: path.clone(),
            source,
        })?;

        if meta.is_dir() {
            if is_excluded(&path) {
                continue;
            }
            total += sum_dir(&path)?;
        } else if meta.is_file() {
            total += meta.len();
        }
        // Symlinks and other non-regular entries don't count.
    }

    Ok(total)
}

fn is_excluded(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| EXCLUDED_DIRS.contains(&name))
}
