//! Settings storage
//!
//! A single string-keyed slot holding the JSON settings record. The form only
//! talks to [`SettingsStore`]; the file and in-memory backends are
//! interchangeable.

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::settings::{PersistedSettings, SETTINGS_KEY};


/// Environment variable overriding where the settings file lives.
pub const SETTINGS_DIR_ENV: &str = "KIOSK_SETTINGS_DIR";


#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to access settings at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("settings record is not valid JSON: {0}")]
    Format(#[from] serde_json::Error),
}


/// Key-value slot for the settings record.
pub trait SettingsStore {
    /// Read the stored record, `Ok(None)` when nothing was ever saved.
    fn load(&self) -> Result<Option<PersistedSettings>, StorageError>;

    /// Overwrite the stored record.
    fn save(&mut self, record: &PersistedSettings) -> Result<(), StorageError>;
}


/// Stores the record as `<dir>/settings.json`.
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store inside `dir`, named after the storage key.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(format!("{}.json", SETTINGS_KEY)))
    }

    /// `$KIOSK_SETTINGS_DIR` if set, otherwise next to the executable.
    pub fn from_env() -> Self {
        match std::env::var_os(SETTINGS_DIR_ENV) {
            Some(dir) if !dir.is_empty() => Self::in_dir(PathBuf::from(dir)),
            _ => Self::in_dir(Self::exe_dir()),
        }
    }

    fn exe_dir() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for FileSettingsStore {
    fn load(&self) -> Result<Option<PersistedSettings>, StorageError> {
        if !self.path.exists() {
            tracing::info!("No settings file at {:?}, starting fresh", self.path);
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })?;
        let record = PersistedSettings::from_json(&content)?;
        tracing::info!("Loaded {} URL entries from {:?}", record.urls.len(), self.path);
        Ok(Some(record))
    }

    fn save(&mut self, record: &PersistedSettings) -> Result<(), StorageError> {
        let content = record.to_json()?;
        std::fs::write(&self.path, content).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })?;
        tracing::info!("Saved {} URL entries to {:?}", record.urls.len(), self.path);
        Ok(())
    }
}


/// Keeps the serialized record in memory. Used by tests and by hosts that do
/// not want anything written to disk.
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    slot: Option<String>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a raw value already in the slot, as if written earlier.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self { slot: Some(raw.into()) }
    }

    pub fn raw(&self) -> Option<&str> {
        self.slot.as_deref()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> Result<Option<PersistedSettings>, StorageError> {
        self.slot
            .as_deref()
            .map(PersistedSettings::from_json)
            .transpose()
            .map_err(StorageError::from)
    }

    fn save(&mut self, record: &PersistedSettings) -> Result<(), StorageError> {
        self.slot = Some(record.to_json()?);
        Ok(())
    }
}
