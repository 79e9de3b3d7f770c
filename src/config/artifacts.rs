//! Pinned artifact URLs and checksums
//!
//! Every tool installed by ci-bootstrap is pinned to an exact version and a
//! SHA-1 digest of its archive. Bumping a tool version means updating the
//! URL and digest pair here.

/// A pinned downloadable artifact: where to get it and what it must hash to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinnedArtifact {
    /// Download URL
    pub url: &'static str,
    /// SHA-1 digest of the archive, lowercase hex
    pub sha1: &'static str,
}

// CMake 3.5.2, https://cmake.org/download/

pub const CMAKE_DARWIN: PinnedArtifact = PinnedArtifact {
    url: "https://cmake.org/files/v3.5/cmake-3.5.2-Darwin-x86_64.tar.gz",
    sha1: "3013b2f00d43da6dc38cbcbd21190874a55b3455",
};

pub const CMAKE_LINUX: PinnedArtifact = PinnedArtifact {
    url: "https://cmake.org/files/v3.5/cmake-3.5.2-Linux-x86_64.tar.gz",
    sha1: "f85232bd67929c1789bdd2e842a3f3e55c502e4a",
};

pub const CMAKE_WINDOWS: PinnedArtifact = PinnedArtifact {
    url: "https://cmake.org/files/v3.5/cmake-3.5.2-win32-x86.zip",
    sha1: "743bab5d9c82f0b88b418384026804ed986a50c5",
};

// Ninja 1.6.0

pub const NINJA_WIN: PinnedArtifact = PinnedArtifact {
    url: "https://github.com/ninja-build/ninja/releases/download/v1.6.0/ninja-win.zip",
    sha1: "e01093f6533818425f8efb0843ced7dcaabea3b2",
};

// Android NDK toolchain names

pub const NDK_R10E_TOOLCHAIN: &str = "android-ndk-r10e-api-19-armeabi-v7a-neon";
pub const NDK_R11C_TOOLCHAIN: &str = "android-ndk-r11c-api-19-armeabi-v7a-neon";

// Vendor Android NDK archives. r10e ships as a self-extracting .bin
// installer, r11c as a plain zip.

pub const ANDROID_R10E_DARWIN: PinnedArtifact = PinnedArtifact {
    url: "http://dl.google.com/android/ndk/android-ndk-r10e-darwin-x86_64.bin",
    sha1: "b57c2b9213251180dcab794352bfc9a241bf2557",
};

pub const ANDROID_R10E_LINUX: PinnedArtifact = PinnedArtifact {
    url: "http://dl.google.com/android/ndk/android-ndk-r10e-linux-x86_64.bin",
    sha1: "c685e5f106f8daa9b5449d0a4f21ee8c0afcb2f6",
};

pub const ANDROID_R11C_DARWIN: PinnedArtifact = PinnedArtifact {
    url: "http://dl.google.com/android/repository/android-ndk-r11c-darwin-x86_64.zip",
    sha1: "4ce8e7ed8dfe08c5fe58aedf7f46be2a97564696",
};

pub const ANDROID_R11C_LINUX: PinnedArtifact = PinnedArtifact {
    url: "http://dl.google.com/android/repository/android-ndk-r11c-linux-x86_64.zip",
    sha1: "de5ce9bddeee16fb6af2b9117e9566352aa7e279",
};

// Prebuilt NDK mirror archives (hunter-packages). Much smaller than the
// vendor installers; used on CI providers where the full download would eat
// most of the job time budget.

pub const ANDROID_R10E_LINUX_PREBUILT: PinnedArtifact = PinnedArtifact {
    url: "https://github.com/hunter-packages/android-ndk/releases/download/v1.0.0/android-ndk-r10e-arm-linux-androideabi-4.9-gnu-libstdc.-4.9-armeabi-v7a-android-19-arch-arm-Linux.tar.gz",
    sha1: "847177799b0fe4f7480f910bbf1815c3e3fed0da",
};

pub const ANDROID_R10E_DARWIN_PREBUILT: PinnedArtifact = PinnedArtifact {
    url: "https://github.com/hunter-packages/android-ndk/releases/download/v1.0.0/android-ndk-r10e-arm-linux-androideabi-4.9-gnu-libstdc.-4.9-armeabi-v7a-android-19-arch-arm-Darwin.tar.gz",
    sha1: "e568e9a8f562e7d1bc06f93e6f7cc7f44df3ded2",
};

pub const ANDROID_R11C_LINUX_PREBUILT: PinnedArtifact = PinnedArtifact {
    url: "https://github.com/hunter-packages/android-ndk/releases/download/v1.0.0/android-ndk-r11c-arm-linux-androideabi-4.9-gnu-libstdc.-4.9-armeabi-v7a-android-19-arch-arm-Linux.tar.gz",
    sha1: "b90d03d11cc1c5770e7851924a60e9819b578960",
};

pub const ANDROID_R11C_DARWIN_PREBUILT: PinnedArtifact = PinnedArtifact {
    url: "https://github.com/hunter-packages/android-ndk/releases/download/v1.0.0/android-ndk-r11c-arm-linux-androideabi-4.9-gnu-libstdc.-4.9-armeabi-v7a-android-19-arch-arm-Darwin.tar.gz",
    sha1: "07f2425fa99377a678949314330ec7e5ebc597f8",
};
