//! Marker classes on the document root.
//!
//! Stylesheets react to the theme through marker classes on the root
//! element. [`RootClasses`] is that surface: an insertion-ordered set of
//! class names with a change signal carrying the joined class string.

use vitrine_core::Signal;

/// Marker applied while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

/// Marker that enables animated theme transitions.
///
/// Added once per process, after the initial theme has been applied, so the
/// first paint does not animate.
pub const TRANSITION_CLASS: &str = "theme-transition";

/// The root element's class list.
///
/// Mutators report whether the set actually changed and emit
/// [`changed`](Self::changed) (with the space-joined class string) only when
/// it did.
#[derive(Debug)]
pub struct RootClasses {
    /// Insertion-ordered class names; no duplicates.
    classes: Vec<String>,

    /// Signal emitted with the new class string whenever the set changes.
    pub changed: Signal<String>,
}

impl RootClasses {
    /// Create an empty class list.
    pub fn new() -> Self {
        Self {
            classes: Vec::new(),
            changed: Signal::new(),
        }
    }

    /// Whether `name` is present.
    pub fn contains(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c == name)
    }

    /// Add `name` if absent.
    ///
    /// Returns `true` if the set changed.
    pub fn add(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.classes.push(name.to_string());
        self.changed.emit(self.as_class_string());
        true
    }

    /// Remove `name` if present.
    ///
    /// Returns `true` if the set changed.
    pub fn remove(&mut self, name: &str) -> bool {
        let Some(index) = self.classes.iter().position(|c| c == name) else {
            return false;
        };
        self.classes.remove(index);
        self.changed.emit(self.as_class_string());
        true
    }

    /// Add or remove `name` per `present`.
    ///
    /// Returns `true` if the set changed.
    pub fn set(&mut self, name: &str, present: bool) -> bool {
        if present { self.add(name) } else { self.remove(name) }
    }

    /// The space-joined class string, in insertion order.
    pub fn as_class_string(&self) -> String {
        self.classes.join(" ")
    }
}

impl Default for RootClasses {
    fn default() -> Self {
        Self::new()
    }
}
