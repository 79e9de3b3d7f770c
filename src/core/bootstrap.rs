//! Bootstrap orchestration
//!
//! The full run sequence: clean the working directory, then for each
//! planned artifact ensure a verified local copy and extract it, then
//! normalize the extracted layout. Fully sequential; one artifact is
//! finished before the next begins.

use std::path::PathBuf;

use crate::core::plan::{self, PlannedArtifact};
use crate::core::platform::HostPlatform;
use crate::core::toolchain::Toolchain;
use crate::core::workspace;
use crate::error::BootstrapError;
use crate::infra::download::{EnsureOutcome, Fetcher, ProgressCallback};
use crate::infra::extract;

/// Per-artifact progress callback factory, keyed by artifact name
pub type ProgressFactory = Box<dyn Fn(&str) -> ProgressCallback>;

/// Run configuration, collected once at startup.
///
/// All environment inspection happens before this is built; nothing below
/// reads process-wide state.
#[derive(Debug, Clone)]
pub struct BootstrapConfig {
    /// Toolchain identifier (from `TOOLCHAIN`)
    pub toolchain: Toolchain,
    /// Detected host platform
    pub host: HostPlatform,
    /// Prefer the prebuilt NDK mirror (from the CI-provider flag)
    pub prebuilt_android: bool,
    /// Working directory for archives and extracted tools
    pub work_dir: PathBuf,
}

/// Result of a bootstrap run
#[derive(Debug, Default)]
pub struct BootstrapReport {
    /// Artifacts that were downloaded and verified
    pub downloaded: Vec<&'static str>,
    /// Artifacts reused from the archive cache
    pub reused: Vec<&'static str>,
}

/// Execute a full bootstrap run
pub async fn run(
    config: &BootstrapConfig,
    fetcher: &Fetcher,
    progress: Option<&ProgressFactory>,
) -> Result<BootstrapReport, BootstrapError> {
    if config.toolchain.is_empty() {
        tracing::warn!("TOOLCHAIN is empty; only CMake will be installed");
    }

    let artifacts = plan::build_plan(config)?;
    workspace::prepare(
        &config.work_dir,
        &plan::expected_archives(config.prebuilt_android),
    )?;

    let mut report = BootstrapReport::default();
    for artifact in &artifacts {
        install(fetcher, artifact, progress, &mut report).await?;
    }

    workspace::normalize(&config.work_dir)?;
    Ok(report)
}

/// Ensure and extract one artifact.
///
/// Extraction always runs, even for a cache hit: the cleanup pass removed
/// any previously extracted tree, only the raw archive survives runs.
async fn install(
    fetcher: &Fetcher,
    artifact: &PlannedArtifact,
    progress: Option<&ProgressFactory>,
    report: &mut BootstrapReport,
) -> Result<(), BootstrapError> {
    let callback = progress.map(|factory| factory(artifact.name));
    let outcome = fetcher.ensure(&artifact.request, callback).await?;
    match outcome {
        EnsureOutcome::Downloaded => report.downloaded.push(artifact.name),
        EnsureOutcome::Reused => report.reused.push(artifact.name),
    }
    extract::extract(&artifact.request)?;
    Ok(())
}
