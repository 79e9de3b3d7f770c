//! Toolchain name parsing
//!
//! The `TOOLCHAIN` environment variable carries a string encoding the
//! target platform/architecture/compiler choice for a build, e.g.
//! `android-ndk-r10e-api-19-armeabi-v7a-neon` or `ninja-clang-cxx17`.
//! Only the prefix matters here: it decides which optional tools the
//! worker needs on top of CMake.

/// Parsed toolchain identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    name: String,
}

impl Toolchain {
    /// Wrap a raw toolchain name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The raw toolchain name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this toolchain targets Android and needs the NDK
    pub fn is_android(&self) -> bool {
        self.name.starts_with("android-")
    }

    /// Whether this toolchain builds with Ninja
    pub fn is_ninja(&self) -> bool {
        self.name.starts_with("ninja-")
    }

    /// Whether the toolchain name is empty (unset in the environment)
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}
