//! Archive extraction
//!
//! Expands a downloaded artifact into its extraction target. The method is
//! chosen by the suffix of the source URL, not the local file name: the
//! Android installer is always stored as `android.bin` locally even when
//! the vendor ships a zip.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use flate2::read::GzDecoder;

use crate::error::ExtractError;
use crate::infra::download::FetchRequest;

/// Extract the downloaded artifact into its target directory.
///
/// - `.tar.gz` archives are gunzipped and untarred
/// - `.zip` archives are unzipped
/// - `.bin` files are self-extracting installers: the file is marked
///   executable and run with the extraction target as its working
///   directory (the process-wide working directory is never changed)
///
/// Any other suffix is a configuration error.
pub fn extract(request: &FetchRequest) -> Result<(), ExtractError> {
    tracing::info!("Unpacking {}", request.local_path.display());

    if request.source_location.ends_with(".tar.gz") {
        extract_tar_gz(&request.local_path, &request.extraction_target)
    } else if request.source_location.ends_with(".zip") {
        extract_zip(&request.local_path, &request.extraction_target)
    } else if request.source_location.ends_with(".bin") {
        run_installer(&request.local_path, &request.extraction_target)
    } else {
        Err(ExtractError::UnknownFormat {
            location: request.source_location.clone(),
        })
    }
}

fn extract_tar_gz(archive: &Path, target: &Path) -> Result<(), ExtractError> {
    let file = File::open(archive).map_err(|e| ExtractError::IoError {
        path: archive.to_path_buf(),
        error: e.to_string(),
    })?;
    let mut tarball = tar::Archive::new(GzDecoder::new(file));
    tarball
        .unpack(target)
        .map_err(|e| ExtractError::Unpack {
            archive: archive.to_path_buf(),
            error: e.to_string(),
        })
}

fn extract_zip(archive: &Path, target: &Path) -> Result<(), ExtractError> {
    let file = File::open(archive).map_err(|e| ExtractError::IoError {
        path: archive.to_path_buf(),
        error: e.to_string(),
    })?;
    let mut zipball = zip::ZipArchive::new(file).map_err(|e| ExtractError::Unpack {
        archive: archive.to_path_buf(),
        error: e.to_string(),
    })?;
    zipball.extract(target).map_err(|e| ExtractError::Unpack {
        archive: archive.to_path_buf(),
        error: e.to_string(),
    })
}

/// Run a self-extracting installer inside the target directory.
///
/// Stdout is discarded: the NDK installer prints every extracted file name
/// and would flood the CI log.
fn run_installer(installer: &Path, target: &Path) -> Result<(), ExtractError> {
    std::fs::create_dir_all(target).map_err(|e| ExtractError::IoError {
        path: target.to_path_buf(),
        error: e.to_string(),
    })?;

    mark_executable(installer)?;

    // The installer runs with `current_dir` set to the target, so its own
    // path must stay valid from there
    let installer_abs = absolute(installer)?;

    let status = Command::new(&installer_abs)
        .current_dir(target)
        .stdout(Stdio::null())
        .status()
        .map_err(|e| ExtractError::InstallerSpawn {
            installer: installer_abs.clone(),
            error: e.to_string(),
        })?;

    if !status.success() {
        return Err(ExtractError::InstallerFailed {
            installer: installer_abs,
            status: status.to_string(),
        });
    }
    Ok(())
}

#[cfg(unix)]
fn mark_executable(path: &Path) -> Result<(), ExtractError> {
    use std::os::unix::fs::PermissionsExt;

    let io_err = |e: std::io::Error| ExtractError::IoError {
        path: path.to_path_buf(),
        error: e.to_string(),
    };
    let metadata = std::fs::metadata(path).map_err(io_err)?;
    let mut permissions = metadata.permissions();
    permissions.set_mode(permissions.mode() | 0o111);
    std::fs::set_permissions(path, permissions).map_err(io_err)
}

#[cfg(not(unix))]
fn mark_executable(_path: &Path) -> Result<(), ExtractError> {
    Ok(())
}

fn absolute(path: &Path) -> Result<PathBuf, ExtractError> {
    path.canonicalize().map_err(|e| ExtractError::IoError {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}
