//! Error types for ci-bootstrap
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Download errors
#[derive(Error, Debug)]
pub enum DownloadError {
    /// Network error
    #[error("Network error downloading '{url}': {error}")]
    NetworkError { url: String, error: String },

    /// Checksum verification failed after a completed download.
    ///
    /// Never retried: a mismatch on bytes the transport delivered intact
    /// points at a wrong pinned digest or a corrupted mirror, not at a
    /// transient condition.
    #[error("Checksum mismatch for '{file}': expected {expected}, got {actual}")]
    ChecksumMismatch {
        file: String,
        expected: String,
        actual: String,
    },

    /// IO error
    #[error("IO error for '{path}': {error}")]
    IoError { path: PathBuf, error: String },

    /// Max retries exceeded
    #[error("Download failed after {retries} attempts: {url}")]
    MaxRetriesExceeded { url: String, retries: u32 },
}

/// Archive extraction errors
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Failed to unpack a tar.gz or zip archive
    #[error("Failed to unpack '{archive}': {error}")]
    Unpack { archive: PathBuf, error: String },

    /// Self-extracting installer could not be started
    #[error("Failed to run installer '{installer}': {error}")]
    InstallerSpawn { installer: PathBuf, error: String },

    /// Self-extracting installer exited with a non-zero status
    #[error("Installer '{installer}' failed: {status}")]
    InstallerFailed { installer: PathBuf, status: String },

    /// Unrecognized archive suffix
    #[error("Unknown archive format: '{location}'")]
    UnknownFormat { location: String },

    /// IO error
    #[error("IO error for '{path}': {error}")]
    IoError { path: PathBuf, error: String },
}

/// Artifact planning errors
#[derive(Error, Debug)]
pub enum PlanError {
    /// Host operating system is not in the pinned artifact tables
    #[error("Unknown host system: {os}")]
    UnknownHost { os: String },

    /// Android NDK is pinned only for specific toolchain/host combinations
    #[error("Android NDK toolchain '{toolchain}' is not supported on {host} (supported hosts: Linux, macOS)")]
    AndroidUnsupported { toolchain: String, host: String },
}

/// Working directory errors
#[derive(Error, Debug)]
pub enum WorkspaceError {
    /// Failed to create the working directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Failed to remove a stale entry
    #[error("Failed to remove '{path}': {error}")]
    Remove { path: PathBuf, error: String },

    /// Failed to move an extracted tree into place
    #[error("Failed to rename '{from}' to '{to}': {error}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        error: String,
    },

    /// Failed to list the working directory
    #[error("Failed to read directory '{path}': {error}")]
    ReadDir { path: PathBuf, error: String },
}

/// Top-level bootstrap error type
#[derive(Error, Debug)]
pub enum BootstrapError {
    /// Plan error
    #[error("Configuration error: {0}")]
    Plan(#[from] PlanError),

    /// Download error
    #[error("Download error: {0}")]
    Download(#[from] DownloadError),

    /// Extraction error
    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractError),

    /// Workspace error
    #[error("Workspace error: {0}")]
    Workspace(#[from] WorkspaceError),
}
