//! Default configuration values

use std::time::Duration;

/// Maximum number of download attempts per artifact
pub const MAX_DOWNLOAD_RETRIES: u32 = 3;

/// Fixed delay between failed download attempts
pub const RETRY_DELAY: Duration = Duration::from_secs(60);

/// Default working directory for downloaded tools
pub const WORK_DIR: &str = "_ci";

/// Local file name for the CMake archive
pub const CMAKE_ARCHIVE: &str = "cmake-version.archive";

/// Local file name for the prebuilt Android NDK mirror archive
pub const ANDROID_PREBUILT_ARCHIVE: &str = "android.tar.gz";

/// Local file name for the vendor Android NDK installer
pub const ANDROID_INSTALLER_ARCHIVE: &str = "android.bin";

/// Local file name for the Ninja archive
pub const NINJA_ARCHIVE: &str = "ninja.zip";

/// Normalized CMake directory name
pub const CMAKE_DIR: &str = "cmake";

/// Normalized Ninja directory name
pub const NINJA_DIR: &str = "ninja";
