//! The theme store.
//!
//! [`ThemeStore`] owns the process's display-theme state: it resolves the
//! initial preference, keeps the persisted slot and the root marker class in
//! step with every change, and notifies subscribers.
//!
//! The store is an explicitly owned context object — one instance is created
//! at application start and threaded to consumers by reference. Nothing in
//! this module is global.

use vitrine_core::Signal;

use crate::platform::ColorScheme;

use super::persist::{FilePersistence, NullPersistence, ThemePersistence};
use super::root::{DARK_CLASS, RootClasses, TRANSITION_CLASS};
use super::ThemePreference;

/// Resolves, persists, and applies the display-theme preference.
///
/// # Source Precedence
///
/// Evaluated once, at initialization: explicit persisted value → else the
/// system preference → else [`ThemePreference::Light`]. After that the
/// preference changes only through [`toggle`](Self::toggle).
///
/// # Side Effects
///
/// Every resulting value — the initial one included — is written back to the
/// persisted slot and reflected as the `"dark"` marker on the owned
/// [`RootClasses`]. The marker is the store's only externally observable
/// side effect.
///
/// # Example
///
/// ```
/// use vitrine_interact::platform::ColorScheme;
/// use vitrine_interact::theme::{MemoryPersistence, ThemePreference, ThemeStore};
///
/// let persistence = MemoryPersistence::new();
/// let mut store = ThemeStore::initialize(Box::new(persistence), ColorScheme::Dark);
///
/// // No persisted value, system prefers dark
/// assert_eq!(store.preference(), ThemePreference::Dark);
/// assert!(store.root().contains("dark"));
///
/// store.toggle();
/// assert_eq!(store.preference(), ThemePreference::Light);
/// ```
pub struct ThemeStore {
    preference: ThemePreference,
    persistence: Box<dyn ThemePersistence>,
    root: RootClasses,
    transitions_enabled: bool,

    /// Signal emitted with the new preference on every toggle.
    pub changed: Signal<ThemePreference>,
}

impl ThemeStore {
    /// Resolve the initial preference and apply it.
    ///
    /// `system` is the color scheme probed at startup
    /// ([`crate::platform::SystemAppearance::color_scheme`]); an environment
    /// with no media-query capability passes [`ColorScheme::Unknown`] and
    /// resolves to light.
    pub fn initialize(persistence: Box<dyn ThemePersistence>, system: ColorScheme) -> Self {
        let preference = persistence.load().unwrap_or(match system {
            ColorScheme::Dark => ThemePreference::Dark,
            ColorScheme::Light | ColorScheme::Unknown => ThemePreference::Light,
        });

        let mut store = Self {
            preference,
            persistence,
            root: RootClasses::new(),
            transitions_enabled: false,
            changed: Signal::new(),
        };
        store.apply_current();
        store
    }

    /// Initialize from the host environment.
    ///
    /// Wires the standard config-directory slot (falling back to
    /// [`NullPersistence`] when no config location exists) and the system
    /// appearance probe. Never fails.
    pub fn from_environment() -> Self {
        let persistence: Box<dyn ThemePersistence> = match FilePersistence::standard() {
            Some(file) => Box::new(file),
            None => Box::new(NullPersistence),
        };
        Self::initialize(
            persistence,
            crate::platform::SystemAppearance::color_scheme(),
        )
    }

    /// The current preference.
    #[inline]
    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    /// Whether the dark theme is active.
    #[inline]
    pub fn is_dark(&self) -> bool {
        self.preference.is_dark()
    }

    /// The root class surface stylesheets react to.
    pub fn root(&self) -> &RootClasses {
        &self.root
    }

    /// Flip the preference.
    ///
    /// Persists the new value, updates the root marker, and emits
    /// [`changed`](Self::changed). Returns the new preference.
    pub fn toggle(&mut self) -> ThemePreference {
        self.preference = self.preference.toggled();
        self.apply_current();
        self.changed.emit(self.preference);
        self.preference
    }

    /// Enable animated theme transitions.
    ///
    /// Call once the initial theme is on screen (first mount), so the
    /// initial application does not animate but every later switch does.
    /// Idempotent: the transition class is added exactly once per store —
    /// and the store lifecycle is one instance per process.
    pub fn enable_transitions(&mut self) {
        if self.transitions_enabled {
            return;
        }
        self.transitions_enabled = true;
        self.root.add(TRANSITION_CLASS);
    }

    /// Write the slot and the root marker for the current preference.
    fn apply_current(&mut self) {
        self.persistence.store(self.preference);
        self.root.set(DARK_CLASS, self.preference.is_dark());
        tracing::debug!(
            target: "vitrine_interact::theme",
            preference = %self.preference,
            "theme applied"
        );
    }
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("preference", &self.preference)
            .field("transitions_enabled", &self.transitions_enabled)
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}
