//! Fetch planning
//!
//! Turns the run configuration (toolchain name, host platform, CI-provider
//! flag) into the list of artifacts this run must ensure: CMake always, the
//! Android NDK for `android-*` toolchains, Ninja for `ninja-*` toolchains.
//! Pure selection logic over the pinned tables in
//! [`crate::config::artifacts`]; no I/O happens here.

use std::path::Path;

use crate::config::artifacts::{
    PinnedArtifact, ANDROID_R10E_DARWIN, ANDROID_R10E_DARWIN_PREBUILT, ANDROID_R10E_LINUX,
    ANDROID_R10E_LINUX_PREBUILT, ANDROID_R11C_DARWIN, ANDROID_R11C_DARWIN_PREBUILT,
    ANDROID_R11C_LINUX, ANDROID_R11C_LINUX_PREBUILT, CMAKE_DARWIN, CMAKE_LINUX, CMAKE_WINDOWS,
    NDK_R10E_TOOLCHAIN, NDK_R11C_TOOLCHAIN, NINJA_WIN,
};
use crate::config::defaults;
use crate::core::bootstrap::BootstrapConfig;
use crate::core::platform::HostPlatform;
use crate::core::toolchain::Toolchain;
use crate::error::PlanError;
use crate::infra::download::FetchRequest;

/// One artifact the current run must ensure and extract
#[derive(Debug, Clone)]
pub struct PlannedArtifact {
    /// Short display name for logs and summaries
    pub name: &'static str,
    /// The fetch request to execute
    pub request: FetchRequest,
}

/// Select the pinned CMake archive for the host platform
pub fn select_cmake(host: &HostPlatform) -> Result<PinnedArtifact, PlanError> {
    match host {
        HostPlatform::Darwin => Ok(CMAKE_DARWIN),
        HostPlatform::Linux => Ok(CMAKE_LINUX),
        HostPlatform::Windows => Ok(CMAKE_WINDOWS),
        HostPlatform::Unknown(os) => Err(PlanError::UnknownHost { os: os.clone() }),
    }
}

/// Select the pinned Android NDK archive for a toolchain/host combination.
///
/// With `prebuilt` set (CI-provider flag), a stripped-down mirror archive is
/// preferred; combinations without a mirror fall back to the vendor archive.
/// Combinations absent from both tables are a configuration error.
pub fn select_android_ndk(
    toolchain: &Toolchain,
    host: &HostPlatform,
    prebuilt: bool,
) -> Result<PinnedArtifact, PlanError> {
    if prebuilt {
        match (toolchain.name(), host) {
            (NDK_R10E_TOOLCHAIN, HostPlatform::Linux) => return Ok(ANDROID_R10E_LINUX_PREBUILT),
            (NDK_R10E_TOOLCHAIN, HostPlatform::Darwin) => return Ok(ANDROID_R10E_DARWIN_PREBUILT),
            (NDK_R11C_TOOLCHAIN, HostPlatform::Linux) => return Ok(ANDROID_R11C_LINUX_PREBUILT),
            (NDK_R11C_TOOLCHAIN, HostPlatform::Darwin) => return Ok(ANDROID_R11C_DARWIN_PREBUILT),
            _ => {}
        }
    }
    match (toolchain.name(), host) {
        (NDK_R10E_TOOLCHAIN, HostPlatform::Darwin) => Ok(ANDROID_R10E_DARWIN),
        (NDK_R10E_TOOLCHAIN, HostPlatform::Linux) => Ok(ANDROID_R10E_LINUX),
        (NDK_R11C_TOOLCHAIN, HostPlatform::Darwin) => Ok(ANDROID_R11C_DARWIN),
        (NDK_R11C_TOOLCHAIN, HostPlatform::Linux) => Ok(ANDROID_R11C_LINUX),
        _ => Err(PlanError::AndroidUnsupported {
            toolchain: toolchain.name().to_string(),
            host: host.to_string(),
        }),
    }
}

/// Select the pinned Ninja archive
pub fn select_ninja() -> PinnedArtifact {
    NINJA_WIN
}

/// Local file name for the Android archive, depending on the source flavor
pub fn android_archive_name(prebuilt: bool) -> &'static str {
    if prebuilt {
        defaults::ANDROID_PREBUILT_ARCHIVE
    } else {
        defaults::ANDROID_INSTALLER_ARCHIVE
    }
}

/// Archive file names retained in the working directory across runs.
///
/// Everything else found there is stale and gets removed before
/// downloading.
pub fn expected_archives(prebuilt: bool) -> [&'static str; 3] {
    [
        defaults::CMAKE_ARCHIVE,
        android_archive_name(prebuilt),
        defaults::NINJA_ARCHIVE,
    ]
}

fn request_for(artifact: PinnedArtifact, work_dir: &Path, local_name: &str) -> FetchRequest {
    FetchRequest {
        source_location: artifact.url.to_string(),
        expected_checksum: artifact.sha1.to_string(),
        local_path: work_dir.join(local_name),
        extraction_target: work_dir.to_path_buf(),
    }
}

/// Build the full fetch plan for a run
pub fn build_plan(config: &BootstrapConfig) -> Result<Vec<PlannedArtifact>, PlanError> {
    let mut plan = vec![PlannedArtifact {
        name: "cmake",
        request: request_for(
            select_cmake(&config.host)?,
            &config.work_dir,
            defaults::CMAKE_ARCHIVE,
        ),
    }];

    if config.toolchain.is_android() {
        let artifact =
            select_android_ndk(&config.toolchain, &config.host, config.prebuilt_android)?;
        plan.push(PlannedArtifact {
            name: "android-ndk",
            request: request_for(
                artifact,
                &config.work_dir,
                android_archive_name(config.prebuilt_android),
            ),
        });
    }

    if config.toolchain.is_ninja() {
        plan.push(PlannedArtifact {
            name: "ninja",
            request: request_for(select_ninja(), &config.work_dir, defaults::NINJA_ARCHIVE),
        });
    }

    Ok(plan)
}
