//! Storage of script definitions
//!
//! The engine only ever reads definitions; the store owns them. Every store keeps insertion
//! order, and mutations replace whole definitions.

use std::path::{Path, PathBuf};

use log::info;
use thiserror::Error;

use crate::config_file::{Config, ConfigError};
use crate::scripts::ScriptDefinition;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("No script with id '{0}'")]
    NotFound(String),
    #[error("A script with id '{0}' already exists")]
    DuplicateId(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// CRUD and queries over the set of script definitions
pub trait ScriptStore {
    /// All definitions, in insertion order
    fn list_all(&self) -> Vec<ScriptDefinition>;

    /// Look up a definition by id
    fn get(&self, id: &str) -> Option<ScriptDefinition>;

    /// Append a definition.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicateId` if the id is taken, or a persistence error.
    fn add(&mut self, script: ScriptDefinition) -> Result<(), StoreError>;

    /// Replace the definition with the same id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no definition has that id, or a persistence error.
    fn update(&mut self, script: ScriptDefinition) -> Result<(), StoreError>;

    /// Delete by id, returning whether anything was removed.
    ///
    /// # Errors
    ///
    /// Returns a persistence error.
    fn remove(&mut self, id: &str) -> Result<bool, StoreError>;

    /// Enabled startup scripts, in insertion order
    fn list_startup_enabled(&self) -> Vec<ScriptDefinition> {
        self.list_all()
            .into_iter()
            .filter(ScriptDefinition::runs_at_startup)
            .collect()
    }

    /// Scripts not flagged for startup, in insertion order
    fn list_non_startup(&self) -> Vec<ScriptDefinition> {
        self.list_all()
            .into_iter()
            .filter(|s| !s.is_startup_script)
            .collect()
    }

    /// Look up by id, falling back to the first script with that exact name
    fn find(&self, id_or_name: &str) -> Option<ScriptDefinition> {
        self.get(id_or_name).or_else(|| {
            self.list_all()
                .into_iter()
                .find(|s| s.name == id_or_name)
        })
    }
}

/// Non-persistent store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    scripts: Vec<ScriptDefinition>,
}

impl MemoryStore {
    #[must_use]
    pub fn new(scripts: Vec<ScriptDefinition>) -> Self {
        Self { scripts }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.scripts.iter().position(|s| s.id == id)
    }
}

impl ScriptStore for MemoryStore {
    fn list_all(&self) -> Vec<ScriptDefinition> {
        self.scripts.clone()
    }

    fn get(&self, id: &str) -> Option<ScriptDefinition> {
        self.scripts.iter().find(|s| s.id == id).cloned()
    }

    fn add(&mut self, script: ScriptDefinition) -> Result<(), StoreError> {
        if self.position(&script.id).is_some() {
            return Err(StoreError::DuplicateId(script.id));
        }
        info!("Added script: {}", script.name);
        self.scripts.push(script);
        Ok(())
    }

    fn update(&mut self, script: ScriptDefinition) -> Result<(), StoreError> {
        let index = self
            .position(&script.id)
            .ok_or_else(|| StoreError::NotFound(script.id.clone()))?;
        info!("Updated script: {}", script.name);
        self.scripts[index] = script;
        Ok(())
    }

    fn remove(&mut self, id: &str) -> Result<bool, StoreError> {
        let before = self.scripts.len();
        self.scripts.retain(|s| s.id != id);
        let removed = self.scripts.len() != before;
        if removed {
            info!("Removed script with id: {id}");
        }
        Ok(removed)
    }
}

/// Store backed by a configuration file; every mutation is written before returning
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    version: String,
    inner: MemoryStore,
}

impl FileStore {
    /// Open an existing configuration file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn open(path: &Path) -> Result<Self, ConfigError> {
        let config = Config::from_file(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            version: config.scriptlauncher_version,
            inner: MemoryStore::new(config.scripts),
        })
    }

    /// Create a new, empty configuration file, replacing any existing one.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be written.
    pub fn create(path: &Path) -> Result<Self, ConfigError> {
        let config = Config::default();
        config.to_file(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            version: config.scriptlauncher_version,
            inner: MemoryStore::default(),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Apply `change` to a copy of the scripts and persist it; memory is only updated once the
    /// file has been written.
    fn commit<T>(
        &mut self,
        change: impl FnOnce(&mut MemoryStore) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut next = self.inner.clone();
        let value = change(&mut next)?;
        let config = Config {
            scriptlauncher_version: self.version.clone(),
            scripts: next.list_all(),
        };
        config.to_file(&self.path)?;
        self.inner = next;
        Ok(value)
    }
}

impl ScriptStore for FileStore {
    fn list_all(&self) -> Vec<ScriptDefinition> {
        self.inner.list_all()
    }

    fn get(&self, id: &str) -> Option<ScriptDefinition> {
        self.inner.get(id)
    }

    fn add(&mut self, script: ScriptDefinition) -> Result<(), StoreError> {
        self.commit(|scripts| scripts.add(script))
    }

    fn update(&mut self, script: ScriptDefinition) -> Result<(), StoreError> {
        self.commit(|scripts| scripts.update(script))
    }

    fn remove(&mut self, id: &str) -> Result<bool, StoreError> {
        if self.inner.get(id).is_none() {
            return Ok(false);
        }
        self.commit(|scripts| scripts.remove(id))
    }
}
