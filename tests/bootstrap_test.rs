//! End-to-end bootstrap scenarios
//!
//! Drives the ensure/extract/normalize sequence against a mock HTTP server
//! and checks the fatal configuration paths of the orchestrator.

mod common;

use std::path::PathBuf;
use std::time::Duration;

use common::{make_tar_gz, TestWorkspace};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ci_bootstrap::core::bootstrap::{self, BootstrapConfig};
use ci_bootstrap::core::platform::HostPlatform;
use ci_bootstrap::core::toolchain::Toolchain;
use ci_bootstrap::core::workspace;
use ci_bootstrap::error::BootstrapError;
use ci_bootstrap::infra::download::{compute_sha1, EnsureOutcome, FetchRequest, Fetcher};
use ci_bootstrap::infra::extract::extract;

/// The common first-run path: fresh workspace, one verified download, extraction
/// populates the target, layout gets normalized.
#[tokio::test]
async fn test_fresh_download_extract_normalize() {
    let mock_server = MockServer::start().await;
    let archive = make_tar_gz(&[
        ("cmake-3.5.2-Linux-x86_64/bin/cmake", b"elf" as &[u8]),
        ("cmake-3.5.2-Linux-x86_64/share/Modules/readme", b"m"),
    ]);

    Mock::given(method("GET"))
        .and(path("/cmake-3.5.2-Linux-x86_64.tar.gz"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(archive.clone()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let workspace_dir = TestWorkspace::new();
    let work_dir = workspace_dir.path().join("_ci");

    workspace::prepare(&work_dir, &["cmake-version.archive"]).unwrap();

    let request = FetchRequest {
        source_location: format!("{}/cmake-3.5.2-Linux-x86_64.tar.gz", mock_server.uri()),
        expected_checksum: compute_sha1(&archive),
        local_path: work_dir.join("cmake-version.archive"),
        extraction_target: work_dir.clone(),
    };

    let fetcher = Fetcher::with_config(3, Duration::from_millis(10));
    let outcome = fetcher.ensure(&request, None).await.unwrap();
    assert_eq!(outcome, EnsureOutcome::Downloaded);

    extract(&request).unwrap();
    workspace::normalize(&work_dir).unwrap();

    // Raw archive cached, versioned dir flattened to a fixed path
    assert!(work_dir.join("cmake-version.archive").exists());
    assert!(work_dir.join("cmake/bin/cmake").exists());
    assert!(!work_dir.join("cmake-3.5.2-Linux-x86_64").exists());
}

/// Second run with a warm cache: no network traffic, extraction still
/// repopulates the cleaned workspace.
#[tokio::test]
async fn test_warm_cache_run_performs_no_network_calls() {
    let mock_server = MockServer::start().await;
    let archive = make_tar_gz(&[("tool-1.0/bin/tool", b"elf" as &[u8])]);

    Mock::given(method("GET"))
        .and(path("/tool-1.0.tar.gz"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(archive.clone()))
        .expect(0)
        .mount(&mock_server)
        .await;

    let workspace_dir = TestWorkspace::new();
    let work_dir = workspace_dir.path().join("_ci");
    std::fs::create_dir_all(&work_dir).unwrap();
    std::fs::write(work_dir.join("tool.archive"), &archive).unwrap();
    // Leftover extracted tree from the previous run
    std::fs::create_dir_all(work_dir.join("tool-1.0/bin")).unwrap();

    workspace::prepare(&work_dir, &["tool.archive"]).unwrap();
    assert!(!work_dir.join("tool-1.0").exists());

    let request = FetchRequest {
        source_location: format!("{}/tool-1.0.tar.gz", mock_server.uri()),
        expected_checksum: compute_sha1(&archive),
        local_path: work_dir.join("tool.archive"),
        extraction_target: work_dir.clone(),
    };

    let fetcher = Fetcher::with_config(3, Duration::from_millis(10));
    let outcome = fetcher.ensure(&request, None).await.unwrap();
    assert_eq!(outcome, EnsureOutcome::Reused);

    extract(&request).unwrap();
    assert!(work_dir.join("tool-1.0/bin/tool").exists());
}

#[tokio::test]
async fn test_run_fails_on_unknown_host_before_any_io() {
    let workspace_dir = TestWorkspace::new();
    let work_dir = workspace_dir.path().join("_ci");

    let config = BootstrapConfig {
        toolchain: Toolchain::new(""),
        host: HostPlatform::Unknown("haiku".to_string()),
        prebuilt_android: false,
        work_dir: work_dir.clone(),
    };

    let fetcher = Fetcher::with_config(3, Duration::from_millis(10));
    let err = bootstrap::run(&config, &fetcher, None).await.unwrap_err();

    assert!(matches!(err, BootstrapError::Plan(_)));
    // Planning fails before the workspace is touched
    assert!(!work_dir.exists());
}

#[tokio::test]
async fn test_run_fails_on_unsupported_android_combination() {
    let workspace_dir = TestWorkspace::new();

    let config = BootstrapConfig {
        toolchain: Toolchain::new("android-ndk-r10e-api-19-armeabi-v7a-neon"),
        host: HostPlatform::Windows,
        prebuilt_android: false,
        work_dir: workspace_dir.path().join("_ci"),
    };

    let fetcher = Fetcher::with_config(3, Duration::from_millis(10));
    let err = bootstrap::run(&config, &fetcher, None).await.unwrap_err();

    let message = err.to_string();
    assert!(message.contains("android-ndk-r10e"), "got: {message}");
    assert!(message.contains("Windows"), "got: {message}");
}

#[test]
fn test_plan_error_paths_need_no_workspace() {
    // Selection tables are pure; they must be checkable without a
    // filesystem at all
    let config = BootstrapConfig {
        toolchain: Toolchain::new("android-something-unknown"),
        host: HostPlatform::Linux,
        prebuilt_android: true,
        work_dir: PathBuf::from("/nonexistent"),
    };
    assert!(ci_bootstrap::core::plan::build_plan(&config).is_err());
}
