//! Host platform detection

use std::fmt;

/// Host platform identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HostPlatform {
    /// Linux
    Linux,
    /// macOS
    Darwin,
    /// Windows
    Windows,
    /// Unknown/unsupported platform
    Unknown(String),
}

impl fmt::Display for HostPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostPlatform::Linux => write!(f, "Linux"),
            HostPlatform::Darwin => write!(f, "Darwin"),
            HostPlatform::Windows => write!(f, "Windows"),
            HostPlatform::Unknown(s) => write!(f, "{s}"),
        }
    }
}

/// Detect the current host platform
pub fn detect_host_platform() -> HostPlatform {
    match std::env::consts::OS {
        "linux" => HostPlatform::Linux,
        "macos" => HostPlatform::Darwin,
        "windows" => HostPlatform::Windows,
        other => HostPlatform::Unknown(other.to_string()),
    }
}
