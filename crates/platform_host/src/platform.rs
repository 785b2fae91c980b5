//! Host platform detection contracts and adapters.

/// Host capability answering which operating system the client runs on.
pub trait PlatformDetection {
    /// Returns whether the host is Windows.
    fn is_windows(&self) -> bool;
    /// Returns whether the host is macOS.
    fn is_macos(&self) -> bool;
    /// Returns whether the host is Linux.
    fn is_linux(&self) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
/// Platform detection backed by the compile target of the running binary.
pub struct NativePlatform;

impl PlatformDetection for NativePlatform {
    fn is_windows(&self) -> bool {
        cfg!(target_os = "windows")
    }

    fn is_macos(&self) -> bool {
        cfg!(target_os = "macos")
    }

    fn is_linux(&self) -> bool {
        cfg!(target_os = "linux")
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Platform detection with fixed answers, for stub hosts and deterministic boots.
///
/// Flags are reported verbatim; nothing stops more than one from being set.
pub struct StaticPlatform {
    /// Answer for [`PlatformDetection::is_windows`].
    pub windows: bool,
    /// Answer for [`PlatformDetection::is_macos`].
    pub macos: bool,
    /// Answer for [`PlatformDetection::is_linux`].
    pub linux: bool,
}

impl StaticPlatform {
    /// A host reporting Windows only.
    pub const fn windows() -> Self {
        Self {
            windows: true,
            macos: false,
            linux: false,
        }
    }

    /// A host reporting macOS only.
    pub const fn macos() -> Self {
        Self {
            windows: false,
            macos: true,
            linux: false,
        }
    }

    /// A host reporting Linux only.
    pub const fn linux() -> Self {
        Self {
            windows: false,
            macos: false,
            linux: true,
        }
    }

    /// A host that matches none of the known platforms.
    pub const fn unrecognized() -> Self {
        Self {
            windows: false,
            macos: false,
            linux: false,
        }
    }
}

impl PlatformDetection for StaticPlatform {
    fn is_windows(&self) -> bool {
        self.windows
    }

    fn is_macos(&self) -> bool {
        self.macos
    }

    fn is_linux(&self) -> bool {
        self.linux
    }
}
