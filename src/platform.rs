//! Host platform detection
//!
//! The only platform-sensitive decision in the crate is which shell wraps a command line, so
//! detection sits behind a small trait that tests can replace with a fixed answer.

/// Answers questions about the host operating system
pub trait HostPlatform {
    /// True on Windows-family hosts
    fn is_windows_family(&self) -> bool;

    /// Shell program and its "run this string" flag
    fn shell(&self) -> (&'static str, &'static str) {
        if self.is_windows_family() {
            ("cmd", "/c")
        } else {
            ("sh", "-c")
        }
    }
}

/// The platform this binary was compiled for
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemPlatform;

impl HostPlatform for SystemPlatform {
    fn is_windows_family(&self) -> bool {
        cfg!(windows)
    }
}

/// A platform with a fixed answer, regardless of the real host
#[derive(Debug, Clone, Copy)]
pub struct FixedPlatform {
    pub windows: bool,
}

impl FixedPlatform {
    #[must_use]
    pub fn windows() -> Self {
        Self { windows: true }
    }

    #[must_use]
    pub fn unix() -> Self {
        Self { windows: false }
    }
}

impl HostPlatform for FixedPlatform {
    fn is_windows_family(&self) -> bool {
        self.windows
    }
}

impl<P: HostPlatform + ?Sized> HostPlatform for &P {
    fn is_windows_family(&self) -> bool {
        (**self).is_windows_family()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_per_platform() {
        assert_eq!(FixedPlatform::windows().shell(), ("cmd", "/c"));
        assert_eq!(FixedPlatform::unix().shell(), ("sh", "-c"));
    }

    #[test]
    fn test_system_platform_matches_target() {
        assert_eq!(SystemPlatform.is_windows_family(), cfg!(windows));
    }
}
