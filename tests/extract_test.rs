//! Integration tests for archive extraction
//!
//! Covers the three supported archive flavors and the fatal unknown-suffix
//! path, using archives built in-memory.

mod common;

use common::{make_tar_gz, make_zip, TestWorkspace};

use ci_bootstrap::error::ExtractError;
use ci_bootstrap::infra::download::FetchRequest;
use ci_bootstrap::infra::extract::extract;

fn request(workspace: &TestWorkspace, url: &str, local_name: &str) -> FetchRequest {
    FetchRequest {
        source_location: url.to_string(),
        expected_checksum: String::new(),
        local_path: workspace.path().join(local_name),
        extraction_target: workspace.path().join("unpacked"),
    }
}

#[test]
fn test_tar_gz_populates_target_with_top_level_entries() {
    let workspace = TestWorkspace::new();
    let archive = make_tar_gz(&[
        ("tool-1.0/bin/tool", b"#!/bin/sh\n" as &[u8]),
        ("tool-1.0/share/doc.txt", b"docs"),
    ]);
    workspace.create_file("tool-1.0.tar.gz", &archive);

    let req = request(&workspace, "https://example.com/tool-1.0.tar.gz", "tool-1.0.tar.gz");
    extract(&req).unwrap();

    assert!(workspace.file_exists("unpacked/tool-1.0/bin/tool"));
    assert_eq!(workspace.read_file("unpacked/tool-1.0/share/doc.txt"), b"docs");
}

#[test]
fn test_zip_populates_target_with_top_level_entries() {
    let workspace = TestWorkspace::new();
    let archive = make_zip(&[("ninja.exe", b"MZ fake binary" as &[u8])]);
    workspace.create_file("ninja.zip", &archive);

    let req = request(&workspace, "https://example.com/ninja-win.zip", "ninja.zip");
    extract(&req).unwrap();

    assert!(workspace.file_exists("unpacked/ninja.exe"));
    assert_eq!(workspace.read_file("unpacked/ninja.exe"), b"MZ fake binary");
}

#[test]
fn test_unknown_suffix_fails_without_touching_target() {
    let workspace = TestWorkspace::new();
    workspace.create_file("tool.rar", b"rar bytes");

    let req = request(&workspace, "https://example.com/tool.rar", "tool.rar");
    let err = extract(&req).unwrap_err();

    assert!(matches!(err, ExtractError::UnknownFormat { .. }));
    assert!(!workspace.file_exists("unpacked"));
}

#[cfg(unix)]
#[test]
fn test_bin_installer_extracts_into_target() {
    let workspace = TestWorkspace::new();
    // Simulates the NDK self-extractor: writes its payload into the cwd
    workspace.create_file(
        "android.bin",
        b"#!/bin/sh\nmkdir -p android-ndk-r10e\ntouch android-ndk-r10e/RELEASE.TXT\n",
    );

    let req = request(
        &workspace,
        "http://dl.google.com/android/ndk/android-ndk-r10e-linux-x86_64.bin",
        "android.bin",
    );
    extract(&req).unwrap();

    assert!(workspace.file_exists("unpacked/android-ndk-r10e/RELEASE.TXT"));
}
