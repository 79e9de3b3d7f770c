//! Output formatting and progress indicators
//!
//! This module provides utilities for displaying progress bars and
//! formatted messages to the user.

use indicatif::{ProgressBar, ProgressStyle};

use crate::core::bootstrap::ProgressFactory;
use crate::infra::download::ProgressCallback;

/// Create a progress bar for downloads
pub fn create_download_bar(name: &str) -> ProgressBar {
    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {msg} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
            .expect("Invalid progress bar template")
            .progress_chars("█▓▒░"),
    );
    pb.set_message(name.to_string());
    pb
}

/// Build a per-artifact progress callback factory backed by indicatif
pub fn download_progress_factory() -> ProgressFactory {
    Box::new(|name: &str| {
        let bar = create_download_bar(name);
        let callback: ProgressCallback = Box::new(move |downloaded, total| {
            if total > 0 && bar.length() != Some(total) {
                bar.set_length(total);
            }
            bar.set_position(downloaded);
            if total > 0 && downloaded >= total {
                bar.finish_and_clear();
            }
        });
        callback
    })
}

/// Print an error and its cause chain to stderr
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{} {error}", status::ERROR);
    for cause in error.chain().skip(1) {
        eprintln!("    caused by: {cause}");
    }
}

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";
}
