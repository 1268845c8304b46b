//! Theme persistence.
//!
//! The only durable value is the theme, stored under a single `theme` key in
//! `~/.config/kounti/preferences.toml` (or the platform equivalent via
//! `dirs::config_dir()`). Unknown keys in that file are kept on write.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use fs2::FileExt;
use parking_lot::Mutex;
use serde::Deserialize;
use thiserror::Error;

use crate::ui::theme::Theme;

/// Key under which the theme is persisted.
pub const THEME_KEY: &str = "theme";

const FILE_NAME: &str = "preferences.toml";

#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("Failed to read preferences file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse preferences file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize preferences: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Failed to lock preferences file '{path}': {source}")]
    LockError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write preferences file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Durable key-value slot for the theme.
pub trait ThemeStorage: Send {
    /// Previously persisted theme. Missing or invalid values read as `None`.
    fn load(&self) -> Option<Theme>;

    fn save(&mut self, theme: Theme) -> Result<(), PreferencesError>;
}

#[derive(Debug, Deserialize)]
struct StoredPreferences {
    #[serde(default)]
    theme: Option<String>,
}

/// TOML-file backed preferences.
#[derive(Debug, Clone)]
pub struct PreferencesFile {
    path: PathBuf,
}

impl PreferencesFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Preferences file inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(FILE_NAME))
    }

    /// `~/.config/kounti/preferences.toml`, falling back to the current
    /// directory when no config dir is known.
    pub fn default_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("kounti").join(FILE_NAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored theme.
    ///
    /// A missing file or a value other than `light`/`dark` is `Ok(None)`.
    pub fn read_theme(&self) -> Result<Option<Theme>, PreferencesError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(PreferencesError::ReadError {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let stored: StoredPreferences =
            toml::from_str(&content).map_err(|source| PreferencesError::ParseError {
                path: self.path.clone(),
                source,
            })?;

        Ok(stored.theme.as_deref().and_then(Theme::parse))
    }

    /// Persist `theme`, keeping every other key in the file.
    ///
    /// Holds an exclusive lock on a sidecar `.lock` file for the whole
    /// read-modify-write and replaces the file via rename.
    pub fn write_theme(&self, theme: Theme) -> Result<(), PreferencesError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| PreferencesError::WriteError {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let lock_path = self.path.with_extension("toml.lock");
        let lock = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .map_err(|source| PreferencesError::LockError {
                path: lock_path.clone(),
                source,
            })?;
        lock.lock_exclusive()
            .map_err(|source| PreferencesError::LockError {
                path: lock_path.clone(),
                source,
            })?;

        let result = self.replace_theme(theme);
        if let Err(err) = FileExt::unlock(&lock) {
            tracing::debug!(
                path = %lock_path.display(),
                error = %err,
                "failed to release preferences lock"
            );
        }
        result
    }

    fn replace_theme(&self, theme: Theme) -> Result<(), PreferencesError> {
        let mut table = match fs::read_to_string(&self.path) {
            Ok(content) => toml::from_str::<toml::Table>(&content).unwrap_or_else(|err| {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "Discarding unparsable preferences file"
                );
                toml::Table::new()
            }),
            Err(err) if err.kind() == io::ErrorKind::NotFound => toml::Table::new(),
            Err(source) => {
                return Err(PreferencesError::ReadError {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        table.insert(
            THEME_KEY.to_string(),
            toml::Value::String(theme.as_str().to_string()),
        );
        let content = toml::to_string(&table)?;

        let tmp_path = self.path.with_extension("toml.tmp");
        fs::write(&tmp_path, content).map_err(|source| PreferencesError::WriteError {
            path: tmp_path.clone(),
            source,
        })?;
        fs::rename(&tmp_path, &self.path).map_err(|source| PreferencesError::WriteError {
            path: self.path.clone(),
            source,
        })
    }
}

impl ThemeStorage for PreferencesFile {
    fn load(&self) -> Option<Theme> {
        match self.read_theme() {
            Ok(theme) => theme,
            Err(err) => {
                tracing::warn!(error = %err, "Ignoring stored theme");
                None
            }
        }
    }

    fn save(&mut self, theme: Theme) -> Result<(), PreferencesError> {
        self.write_theme(theme)
    }
}

/// In-memory slot, used with `--no-persist` and in tests.
///
/// Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStorage {
    slot: Arc<Mutex<Option<Theme>>>,
}

impl MemoryThemeStorage {
    pub fn new(initial: Option<Theme>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(initial)),
        }
    }

    pub fn stored(&self) -> Option<Theme> {
        *self.slot.lock()
    }
}

impl ThemeStorage for MemoryThemeStorage {
    fn load(&self) -> Option<Theme> {
        self.stored()
    }

    fn save(&mut self, theme: Theme) -> Result<(), PreferencesError> {
        *self.slot.lock() = Some(theme);
        Ok(())
    }
}
