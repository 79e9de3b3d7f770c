//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no business logic - that belongs in the [`crate::core`]
//! module.

pub mod output;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::config::defaults;
use crate::core::bootstrap::{self, BootstrapConfig, ProgressFactory};
use crate::core::platform::detect_host_platform;
use crate::core::toolchain::Toolchain;
use crate::infra::download::Fetcher;

/// ci-bootstrap - install pinned build tools on a CI worker
///
/// Downloads CMake (always), the Android NDK (for `android-*` toolchains)
/// and Ninja (for `ninja-*` toolchains), verifies the pinned checksums,
/// and unpacks everything under the working directory.
#[derive(Parser, Debug)]
#[command(name = "ci-bootstrap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Toolchain identifier, e.g. android-ndk-r10e-api-19-armeabi-v7a-neon
    #[arg(long, env = "TOOLCHAIN", default_value = "")]
    pub toolchain: String,

    /// Prefer the prebuilt Android NDK mirror over the vendor installer
    #[arg(long, env = "TRAVIS")]
    pub prebuilt_android: bool,

    /// Working directory for downloaded tools
    #[arg(long, default_value = defaults::WORK_DIR)]
    pub dir: PathBuf,

    /// Suppress progress bars
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Execute the bootstrap run
    pub async fn run(self) -> Result<()> {
        let config = BootstrapConfig {
            toolchain: Toolchain::new(self.toolchain),
            host: detect_host_platform(),
            prebuilt_android: self.prebuilt_android,
            work_dir: self.dir,
        };

        let fetcher = Fetcher::new();
        let progress: Option<ProgressFactory> =
            (!self.quiet).then(output::download_progress_factory);

        let report = bootstrap::run(&config, &fetcher, progress.as_ref())
            .await
            .with_context(|| "Failed to bootstrap CI dependencies")?;

        // Print summary
        if !report.downloaded.is_empty() {
            println!(
                "{} Downloaded {} tool(s):",
                output::status::SUCCESS,
                report.downloaded.len()
            );
            for name in &report.downloaded {
                println!("    {name}");
            }
        }
        if !report.reused.is_empty() {
            println!(
                "  Reused {} archive(s) (already downloaded)",
                report.reused.len()
            );
        }
        println!(
            "{} Tools installed under {}",
            output::status::SUCCESS,
            config.work_dir.display()
        );

        Ok(())
    }
}
