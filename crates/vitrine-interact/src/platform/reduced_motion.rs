//! Reduced motion preference detection.
//!
//! This module detects the "minimize animation" accessibility setting on
//! different platforms. Callers sample it at startup and use it to disable
//! the tilt interaction and neutralize compositor hints.
//!
//! # Example
//!
//! ```ignore
//! use vitrine_interact::platform::ReducedMotion;
//!
//! if ReducedMotion::is_enabled() {
//!     // Construct interactions disabled, skip transitions
//! }
//! ```

/// Reduced motion preference detection.
///
/// Provides methods to check if the user has asked the system to minimize
/// non-essential animation.
pub struct ReducedMotion;

impl ReducedMotion {
    /// Check if reduced motion is currently requested.
    ///
    /// # Platform Behavior
    ///
    /// - **Windows**: Checks the `SPI_GETCLIENTAREAANIMATION` system parameter
    /// - **macOS**: Checks the `accessibilityDisplayShouldReduceMotion` setting
    /// - **Linux**: Currently always returns `false` (not yet implemented)
    pub fn is_enabled() -> bool {
        Self::is_enabled_platform()
    }

    #[cfg(target_os = "windows")]
    fn is_enabled_platform() -> bool {
        use windows::Win32::Foundation::BOOL;
        use windows::Win32::UI::WindowsAndMessaging::{
            SPI_GETCLIENTAREAANIMATION, SystemParametersInfoW,
        };

        // SAFETY: SystemParametersInfoW with SPI_GETCLIENTAREAANIMATION
        // writes a BOOL through pvParam. animation_enabled is a
        // stack-allocated BOOL and we pass a valid pointer to it; the API
        // only writes within its bounds.
        unsafe {
            let mut animation_enabled = BOOL(1);
            let result = SystemParametersInfoW(
                SPI_GETCLIENTAREAANIMATION,
                0,
                Some(&mut animation_enabled as *mut _ as *mut std::ffi::c_void),
                Default::default(),
            );

            if result.is_ok() {
                // The parameter reports whether client-area animation is
                // enabled; reduced motion is its inverse.
                !animation_enabled.as_bool()
            } else {
                false
            }
        }
    }

    #[cfg(target_os = "macos")]
    fn is_enabled_platform() -> bool {
        use objc2_app_kit::NSWorkspace;

        let workspace = NSWorkspace::sharedWorkspace();
        workspace.accessibilityDisplayShouldReduceMotion()
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    fn is_enabled_platform() -> bool {
        // TODO: Implement for Linux via the XDG portal's
        // org.gnome.desktop.interface enable-animations setting
        // For now, return false as a safe default
        false
    }
}
