//! Working directory management
//!
//! The working directory (`_ci` by default) holds the raw downloaded
//! archives and the normalized tool directories. Before a run, everything
//! except the expected archive files is removed; after extraction, the
//! vendor directory layouts are flattened so downstream steps always find
//! `cmake/` and `ninja/` at fixed paths.

use std::path::{Path, PathBuf};

use crate::config::defaults;
use crate::error::WorkspaceError;

/// Create the working directory and remove stale entries.
///
/// Extracted directories from earlier runs are always removed; files are
/// kept only if named in `expected` (the archive cache).
pub fn prepare(work_dir: &Path, expected: &[&str]) -> Result<(), WorkspaceError> {
    std::fs::create_dir_all(work_dir).map_err(|e| WorkspaceError::CreateDir {
        path: work_dir.to_path_buf(),
        error: e.to_string(),
    })?;

    for path in list_dir(work_dir)? {
        let keep = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| expected.contains(&name));

        if path.is_dir() {
            tracing::info!("Removing directory: {}", path.display());
            std::fs::remove_dir_all(&path).map_err(|e| WorkspaceError::Remove {
                path: path.clone(),
                error: e.to_string(),
            })?;
        } else if !keep {
            tracing::info!("Removing file: {}", path.display());
            std::fs::remove_file(&path).map_err(|e| WorkspaceError::Remove {
                path: path.clone(),
                error: e.to_string(),
            })?;
        }
    }
    Ok(())
}

/// Normalize extracted tool layouts to fixed paths.
///
/// Versioned CMake directories (`cmake-3.5.2-Linux-x86_64/`, ...) become
/// `cmake/`; on macOS the nested `CMake.app/Contents` bundle directory is
/// what gets flattened. A bare `ninja.exe` is moved into `ninja/`.
pub fn normalize(work_dir: &Path) -> Result<(), WorkspaceError> {
    let cmake_dir = work_dir.join(defaults::CMAKE_DIR);
    let ninja_dir = work_dir.join(defaults::NINJA_DIR);

    for path in list_dir(work_dir)? {
        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };

        if name.starts_with("cmake") && path.is_dir() {
            let macos_contents = path.join("CMake.app").join("Contents");
            if macos_contents.is_dir() {
                rename(&macos_contents, &cmake_dir)?;
            } else {
                rename(&path, &cmake_dir)?;
            }
        }

        if name == "ninja.exe" {
            std::fs::create_dir(&ninja_dir).map_err(|e| WorkspaceError::CreateDir {
                path: ninja_dir.clone(),
                error: e.to_string(),
            })?;
            rename(&path, &ninja_dir.join(name))?;
        }
    }
    Ok(())
}

fn list_dir(dir: &Path) -> Result<Vec<PathBuf>, WorkspaceError> {
    let read_err = |e: std::io::Error| WorkspaceError::ReadDir {
        path: dir.to_path_buf(),
        error: e.to_string(),
    };
    let mut entries = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_err)? {
        entries.push(entry.map_err(read_err)?.path());
    }
    Ok(entries)
}

fn rename(from: &Path, to: &Path) -> Result<(), WorkspaceError> {
    tracing::info!("Moving {} -> {}", from.display(), to.display());
    std::fs::rename(from, to).map_err(|e| WorkspaceError::Rename {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        error: e.to_string(),
    })
}
