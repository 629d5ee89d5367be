//! The persisted theme slot.
//!
//! The theme store survives process restarts through a single key/value
//! entry: key `theme`, value `"light"` or `"dark"`. This module provides the
//! seam over that slot plus the three implementations the store ships with —
//! a JSON file under the platform config directory, an in-memory slot, and a
//! null slot for capability-free environments.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use super::ThemePreference;

/// Error raised by the file-backed slot.
///
/// Never propagates out of the theme store: persistence failures are logged
/// and the in-memory preference stays authoritative for the session.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// File I/O error.
    #[error("failed to access theme slot '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The slot contents could not be serialized.
    #[error("failed to encode theme slot: {0}")]
    Encode(#[from] serde_json::Error),
}

impl PersistError {
    /// Create an I/O error for the given path.
    fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Storage seam for the theme preference.
///
/// `load` is consulted once at initialization; `store` is called on every
/// resulting value, including the initial one. Implementations must not
/// fail loudly — a missing or unreadable slot is `None`, and a failed write
/// is logged and dropped.
pub trait ThemePersistence: Send {
    /// Read the persisted preference, if one exists and parses.
    fn load(&self) -> Option<ThemePreference>;

    /// Write the preference so it survives a process restart.
    fn store(&mut self, preference: ThemePreference);
}

// ============================================================================
// File-backed slot
// ============================================================================

/// On-disk shape of the slot: one key, `theme`.
#[derive(Debug, Serialize, Deserialize)]
struct ThemeSlot {
    theme: ThemePreference,
}

/// JSON file persistence under the platform config directory.
///
/// Writes are atomic (temp file + rename) so a crash mid-write can never
/// leave a truncated slot behind.
#[derive(Debug, Clone)]
pub struct FilePersistence {
    path: PathBuf,
}

impl FilePersistence {
    /// The slot in the platform's standard config location
    /// (e.g. `~/.config/vitrine/theme.json` on Linux).
    ///
    /// Returns `None` when no home/config directory can be determined; pair
    /// with [`NullPersistence`] as the fallback.
    pub fn standard() -> Option<Self> {
        let dirs = directories::ProjectDirs::from("io", "vitrine-ui", "vitrine")?;
        Some(Self {
            path: dirs.config_dir().join("theme.json"),
        })
    }

    /// A slot at an explicit path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path of the slot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, preference: ThemePreference) -> Result<(), PersistError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| PersistError::io(parent, e))?;
        }

        let json = serde_json::to_string_pretty(&ThemeSlot { theme: preference })?;

        // Atomic replace: write a sibling temp file, then rename over the slot.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| PersistError::io(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| PersistError::io(&self.path, e))?;
        Ok(())
    }
}

impl ThemePersistence for FilePersistence {
    fn load(&self) -> Option<ThemePreference> {
        let contents = fs::read_to_string(&self.path).ok()?;
        let slot: ThemeSlot = serde_json::from_str(&contents).ok()?;
        Some(slot.theme)
    }

    fn store(&mut self, preference: ThemePreference) {
        if let Err(err) = self.write(preference) {
            tracing::warn!(
                target: "vitrine_interact::theme",
                error = %err,
                "failed to persist theme preference"
            );
        }
    }
}

// ============================================================================
// In-memory slot
// ============================================================================

/// In-memory persistence.
///
/// Sticky for the process lifetime only. Clones share the same slot, which
/// lets a caller keep a handle for inspection after handing one to the store.
#[derive(Debug, Clone, Default)]
pub struct MemoryPersistence {
    slot: Arc<Mutex<Option<ThemePreference>>>,
}

impl MemoryPersistence {
    /// An empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot pre-seeded with a value.
    pub fn with_value(preference: ThemePreference) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(preference))),
        }
    }

    /// The current slot contents.
    pub fn value(&self) -> Option<ThemePreference> {
        *self.slot.lock()
    }
}

impl ThemePersistence for MemoryPersistence {
    fn load(&self) -> Option<ThemePreference> {
        *self.slot.lock()
    }

    fn store(&mut self, preference: ThemePreference) {
        *self.slot.lock() = Some(preference);
    }
}

// ============================================================================
// Null slot
// ============================================================================

/// Persistence for environments with no durable storage.
///
/// Loads nothing and stores nowhere; the theme store falls back to the
/// system preference, then light.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPersistence;

impl ThemePersistence for NullPersistence {
    fn load(&self) -> Option<ThemePreference> {
        None
    }

    fn store(&mut self, _preference: ThemePreference) {}
}
