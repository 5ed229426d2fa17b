//! Global configuration store.
//!
//! The store is a flat key-value map of JSON values, the same shape as an
//! editor's user `settings.json`. It holds the dotfile consent flag, the
//! integrated terminal environment maps, and tunables like the poll interval.

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GetThisError, Result};

/// Environment variable overriding the store location.
pub const CONFIG_PATH_ENV: &str = "GETTHIS_CONFIG";

/// Key-value persistence shared with the host.
pub trait ConfigStore {
    /// Read a value.
    fn get(&self, key: &str) -> Option<Value>;

    /// Write a value, persisting it immediately.
    fn set(&mut self, key: &str, value: Value) -> Result<()>;

    /// Remove a value, persisting the removal immediately.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Configuration store backed by a JSON object on disk.
///
/// The file is shared with other writers, so every read goes to disk and
/// every write is a read-modify-write of the current content.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Default store location.
    ///
    /// `$GETTHIS_CONFIG` if set, otherwise `<config dir>/getthis/settings.json`.
    pub fn default_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            if !path.is_empty() {
                return Ok(PathBuf::from(path));
            }
        }

        dirs::config_dir()
            .map(|dir| dir.join("getthis").join("settings.json"))
            .ok_or_else(|| GetThisError::ConfigValidationError {
                message: "Could not determine the configuration directory".to_string(),
            })
    }

    /// Open the store at `path`.
    ///
    /// A missing file is an empty store; it is created on the first write.
    /// An existing file must hold a JSON object.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let store = Self { path: path.into() };
        store.load()?;
        Ok(store)
    }

    /// Open the store at [`JsonFileStore::default_path`].
    pub fn open_default() -> Result<Self> {
        Self::open(Self::default_path()?)
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the current content of the backing file.
    fn load(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            tracing::debug!("No config at {}, starting empty", self.path.display());
            return Ok(Map::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(values)) => Ok(values),
            Ok(_) => Err(GetThisError::ConfigParseError {
                path: self.path.clone(),
                message: "expected a JSON object".to_string(),
            }),
            Err(e) => Err(GetThisError::ConfigParseError {
                path: self.path.clone(),
                message: e.to_string(),
            }),
        }
    }

    /// Save `values` using atomic write.
    ///
    /// Uses the write-to-temp-then-rename pattern to prevent corruption.
    fn save(&self, values: &Map<String, Value>) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }

        let content = serde_json::to_string_pretty(values).map_err(|e| {
            GetThisError::ConfigValidationError {
                message: format!("Failed to serialize settings: {}", e),
            }
        })?;

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, format!("{}\n", content))?;
        fs::rename(&temp_path, &self.path)?;

        Ok(())
    }
}

impl ConfigStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<Value> {
        match self.load() {
            Ok(mut values) => values.remove(key),
            Err(e) => {
                tracing::warn!("Ignoring unreadable settings: {}", e);
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        let mut values = self.load()?;
        values.insert(key.to_string(), value);
        self.save(&values)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut values = self.load()?;
        if values.remove(key).is_some() {
            self.save(&values)?;
        }
        Ok(())
    }
}

/// In-memory store for tests and embedding hosts.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, Value>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ConfigStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}
