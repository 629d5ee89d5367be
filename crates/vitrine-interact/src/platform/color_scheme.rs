//! System color scheme detection.
//!
//! This module answers one question: does the system currently prefer a
//! light or a dark appearance? The answer feeds the theme store's
//! source-precedence rule as the fallback behind an explicit persisted
//! choice.
//!
//! # Example
//!
//! ```ignore
//! use vitrine_interact::platform::{ColorScheme, SystemAppearance};
//!
//! match SystemAppearance::color_scheme() {
//!     ColorScheme::Dark => println!("Dark mode enabled"),
//!     ColorScheme::Light => println!("Light mode enabled"),
//!     ColorScheme::Unknown => println!("Could not determine theme"),
//! }
//! ```

/// The system color scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorScheme {
    /// Light color scheme (dark text on light background).
    Light,
    /// Dark color scheme (light text on dark background).
    Dark,
    /// Color scheme could not be determined or user has no preference.
    #[default]
    Unknown,
}

impl ColorScheme {
    /// Returns true if this is the dark color scheme.
    pub fn is_dark(&self) -> bool {
        matches!(self, ColorScheme::Dark)
    }

    /// Returns true if this is the light color scheme.
    pub fn is_light(&self) -> bool {
        matches!(self, ColorScheme::Light)
    }
}

/// One-shot query for the system appearance.
///
/// The scheme is read once at startup per the theme lifecycle; there is no
/// watcher.
pub struct SystemAppearance;

impl SystemAppearance {
    /// Get the current system color scheme (light/dark mode).
    ///
    /// # Platform Behavior
    ///
    /// - **Windows**: Reads the `AppsUseLightTheme` registry value
    /// - **macOS**: Reads the `AppleInterfaceStyle` user default
    /// - **Linux**: Queries the XDG Desktop Portal `color-scheme` setting
    ///
    /// All via the dark-light crate. Without the `system-theme` feature, or
    /// in environments with no media-query capability, returns
    /// [`ColorScheme::Unknown`] — never an error.
    #[cfg(feature = "system-theme")]
    pub fn color_scheme() -> ColorScheme {
        match dark_light::detect() {
            dark_light::Mode::Dark => ColorScheme::Dark,
            dark_light::Mode::Light => ColorScheme::Light,
            dark_light::Mode::Default => ColorScheme::Unknown,
        }
    }

    #[cfg(not(feature = "system-theme"))]
    pub fn color_scheme() -> ColorScheme {
        ColorScheme::Unknown
    }
}
