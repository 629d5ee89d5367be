//! The binary display-theme preference.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The user's display-theme preference.
///
/// Exactly two values exist; everything else in the theme system is derived
/// from this. The persisted spelling is lowercase (`"light"` / `"dark"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Light appearance (dark text on light background).
    #[default]
    Light,
    /// Dark appearance (light text on dark background).
    Dark,
}

impl ThemePreference {
    /// Returns true for the dark preference.
    #[inline]
    pub fn is_dark(&self) -> bool {
        matches!(self, ThemePreference::Dark)
    }

    /// The opposite preference.
    ///
    /// Toggling is an involution: `p.toggled().toggled() == p`.
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// The persisted spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(()),
        }
    }
}
