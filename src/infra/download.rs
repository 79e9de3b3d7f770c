//! Verified HTTP downloads
//!
//! Downloads a pinned artifact to a local path, streaming in chunks, with
//! SHA-1 verification and a fixed-delay retry loop around transport
//! failures. A file that already exists locally with the right digest is
//! reused without touching the network.

use futures::StreamExt;
use sha1::{Digest, Sha1};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::config::defaults;
use crate::error::DownloadError;

/// Progress callback type (`bytes_downloaded`, `total_bytes`)
pub type ProgressCallback = Box<dyn Fn(u64, u64) + Send + Sync>;

/// One artifact to obtain: where from, what it must hash to, and where the
/// raw archive and its extracted contents go.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    /// Download URL; its suffix also selects the extraction method
    pub source_location: String,
    /// Pinned SHA-1 digest, lowercase hex
    pub expected_checksum: String,
    /// Where the raw downloaded archive is stored
    pub local_path: PathBuf,
    /// Directory the archive contents are expanded into
    pub extraction_target: PathBuf,
}

/// How `ensure` satisfied a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnsureOutcome {
    /// A valid local copy already existed; no network access happened
    Reused,
    /// The artifact was downloaded and verified
    Downloaded,
}

/// Fetcher with retry logic for pinned artifacts
#[derive(Debug, Clone)]
pub struct Fetcher {
    /// HTTP client
    client: reqwest::Client,
    /// Maximum download attempts per artifact
    max_retries: u32,
    /// Fixed delay between failed attempts
    retry_delay: Duration,
}

impl Fetcher {
    /// Create a fetcher with the default retry budget
    pub fn new() -> Self {
        Self::with_config(defaults::MAX_DOWNLOAD_RETRIES, defaults::RETRY_DELAY)
    }

    /// Create a fetcher with custom retry settings
    pub fn with_config(max_retries: u32, retry_delay: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .connect_timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
            max_retries,
            retry_delay,
        }
    }

    /// Get max retries
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Ensure a valid local copy of the requested artifact exists.
    ///
    /// Reuses `local_path` if its digest already matches. Otherwise
    /// downloads with up to `max_retries` attempts, sleeping `retry_delay`
    /// between transport failures. A checksum mismatch on a completed
    /// download is not a transport failure and is never retried; it
    /// surfaces immediately as [`DownloadError::ChecksumMismatch`].
    pub async fn ensure(
        &self,
        request: &FetchRequest,
        progress: Option<ProgressCallback>,
    ) -> Result<EnsureOutcome, DownloadError> {
        let expected = request.expected_checksum.to_lowercase();

        if request.local_path.exists() {
            let actual = file_sha1(&request.local_path)?;
            if actual == expected {
                tracing::info!(
                    "File already downloaded: {}",
                    request.local_path.display()
                );
                return Ok(EnsureOutcome::Reused);
            }
            tracing::warn!(
                "Stale archive {} (digest {actual}, want {expected}), re-downloading",
                request.local_path.display()
            );
        }

        let actual = self
            .download(
                &request.source_location,
                &request.local_path,
                progress.as_ref(),
            )
            .await?;

        if actual != expected {
            // The transport delivered these bytes intact, so a mismatch
            // means the pin itself is wrong. Fail hard, no retry.
            let _ = tokio::fs::remove_file(&request.local_path).await;
            return Err(DownloadError::ChecksumMismatch {
                file: request.local_path.display().to_string(),
                expected,
                actual,
            });
        }

        Ok(EnsureOutcome::Downloaded)
    }

    /// Download with the fixed-delay retry loop, returning the SHA-1 digest
    /// of the received bytes
    async fn download(
        &self,
        url: &str,
        dest: &Path,
        progress: Option<&ProgressCallback>,
    ) -> Result<String, DownloadError> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            tracing::info!("Downloading {url} -> {}", dest.display());

            match self.download_once(url, dest, progress).await {
                Ok(digest) => return Ok(digest),
                Err(e) => {
                    if attempt >= self.max_retries {
                        let _ = tokio::fs::remove_file(dest).await;
                        tracing::error!("Download failed ({e})");
                        return Err(DownloadError::MaxRetriesExceeded {
                            url: url.to_string(),
                            retries: self.max_retries,
                        });
                    }
                    tracing::warn!(
                        "Download failed ({e}), retry in {}s ({attempt} of {})",
                        self.retry_delay.as_secs(),
                        self.max_retries
                    );
                    tokio::time::sleep(self.retry_delay).await;
                }
            }
        }
    }

    /// Single download attempt without retry
    async fn download_once(
        &self,
        url: &str,
        dest: &Path,
        progress: Option<&ProgressCallback>,
    ) -> Result<String, DownloadError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DownloadError::NetworkError {
                url: url.to_string(),
                error: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(DownloadError::NetworkError {
                url: url.to_string(),
                error: format!("HTTP {}", response.status()),
            });
        }

        let total_size = response.content_length().unwrap_or(0);

        if let Some(parent) = dest.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| DownloadError::IoError {
                    path: parent.to_path_buf(),
                    error: e.to_string(),
                })?;
        }

        // Truncates any previous partial content
        let mut file = File::create(dest)
            .await
            .map_err(|e| DownloadError::IoError {
                path: dest.to_path_buf(),
                error: e.to_string(),
            })?;

        let mut hasher = Sha1::new();
        let mut downloaded: u64 = 0;
        let mut stream = response.bytes_stream();

        while let Some(chunk_result) = stream.next().await {
            let chunk = chunk_result.map_err(|e| DownloadError::NetworkError {
                url: url.to_string(),
                error: e.to_string(),
            })?;

            file.write_all(&chunk)
                .await
                .map_err(|e| DownloadError::IoError {
                    path: dest.to_path_buf(),
                    error: e.to_string(),
                })?;

            hasher.update(&chunk);
            downloaded += chunk.len() as u64;

            if let Some(cb) = progress {
                cb(downloaded, total_size);
            }
        }

        file.flush().await.map_err(|e| DownloadError::IoError {
            path: dest.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(hex::encode(hasher.finalize()))
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute the SHA-1 digest of a file
pub fn file_sha1(path: &Path) -> Result<String, DownloadError> {
    let content = std::fs::read(path).map_err(|e| DownloadError::IoError {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;
    Ok(compute_sha1(&content))
}

/// Compute the SHA-1 digest of data
pub fn compute_sha1(data: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}
