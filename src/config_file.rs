//! Configuration file handling for the script launcher

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scripts::ScriptDefinition;

/// Errors that can occur while loading or saving configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No config file found in current directory or its parents: {0}")]
    ConfigNotFound(PathBuf),
    #[error("Unknown working directory: {0}")]
    UnknownWorkingDirectory(String),
    #[error("Unable to parse YAML config file {path}: {source}")]
    Yaml {
        source: serde_yaml::Error,
        path: PathBuf,
    },
    #[error("Unable to parse JSON config file {path}: {source}")]
    Json {
        source: serde_json::Error,
        path: PathBuf,
    },
    #[error("Unable to access config file {path}: {source}")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("Duplicate script ID in config: {0}")]
    DuplicateId(String),
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Config {
    pub scriptlauncher_version: String,
    #[serde(default)]
    pub scripts: Vec<ScriptDefinition>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scriptlauncher_version: env!("CARGO_PKG_VERSION").to_string(),
            scripts: Vec::new(),
        }
    }
}

/// List of supported configuration file names
pub const FILENAMES: [&str; 3] = [".scripts.yaml", ".scripts.yml", ".scripts.json"];

fn is_json(file: &Path) -> bool {
    file.extension().is_some_and(|ext| ext == "json")
}

impl Config {
    /// Loads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ConfigNotFound` if the file cannot be read,
    /// `ConfigError::Yaml`/`ConfigError::Json` if parsing fails, or
    /// `ConfigError::DuplicateId` if two scripts share an id.
    pub fn from_file(file: &Path) -> Result<Config, ConfigError> {
        let contents = std::fs::read_to_string(file)
            .map_err(|_| ConfigError::ConfigNotFound(file.to_path_buf()))?;
        let config: Config = if is_json(file) {
            serde_json::from_str(&contents).map_err(|e| ConfigError::Json {
                source: e,
                path: file.to_path_buf(),
            })?
        } else {
            serde_yaml::from_str(&contents).map_err(|e| ConfigError::Yaml {
                source: e,
                path: file.to_path_buf(),
            })?
        };
        config.check_duplicates()?;
        config.validate_version();
        debug!(
            "Loaded {} scripts from {}",
            config.scripts.len(),
            file.display()
        );
        Ok(config)
    }

    /// Serializes the configuration and replaces `file` atomically.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Yaml`/`ConfigError::Json` if serialization fails, or
    /// `ConfigError::Io` if the file cannot be written.
    pub fn to_file(&self, file: &Path) -> Result<(), ConfigError> {
        let contents = if is_json(file) {
            serde_json::to_string_pretty(self).map_err(|e| ConfigError::Json {
                source: e,
                path: file.to_path_buf(),
            })?
        } else {
            serde_yaml::to_string(self).map_err(|e| ConfigError::Yaml {
                source: e,
                path: file.to_path_buf(),
            })?
        };

        let io_err = |source: std::io::Error| ConfigError::Io {
            source,
            path: file.to_path_buf(),
        };
        let mut tmp = file.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        std::fs::write(&tmp, contents).map_err(io_err)?;
        std::fs::rename(&tmp, file).map_err(io_err)?;
        debug!("Saved {} scripts to {}", self.scripts.len(), file.display());
        Ok(())
    }

    /// Searches for a configuration file in the current directory and its parents.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownWorkingDirectory` if the cwd cannot be determined,
    /// or `ConfigError::ConfigNotFound` if no config file is found.
    pub fn find_config() -> Result<PathBuf, ConfigError> {
        let cwd = std::env::current_dir()
            .map_err(|e| ConfigError::UnknownWorkingDirectory(e.to_string()))?;
        Self::find_config_from(&cwd)
    }

    /// Searches for a configuration file in `start` and its parents.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ConfigNotFound` if no config file is found.
    pub fn find_config_from(start: &Path) -> Result<PathBuf, ConfigError> {
        let mut path = start.to_path_buf();
        debug!("Searching for config file in {}", start.display());
        loop {
            for file in &FILENAMES {
                let config_path = path.join(file);
                if config_path.exists() {
                    info!("Found config file: {}", config_path.display());
                    return Ok(config_path);
                }
            }
            if !path.pop() {
                return Err(ConfigError::ConfigNotFound(start.to_path_buf()));
            }
        }
    }

    fn check_duplicates(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for script in &self.scripts {
            if !seen.insert(script.id.as_str()) {
                return Err(ConfigError::DuplicateId(script.id.clone()));
            }
        }
        Ok(())
    }

    /// Warn if the config's version doesn't match the binary version
    fn validate_version(&self) {
        if let Some(message) = self.version_mismatch() {
            warn!("{message}");
        }
    }

    fn version_mismatch(&self) -> Option<String> {
        let binary_version = env!("CARGO_PKG_VERSION");
        (self.scriptlauncher_version != binary_version).then(|| {
            format!(
                "Config scriptlauncher_version '{}' differs from binary version '{binary_version}'",
                self.scriptlauncher_version
            )
        })
    }
}
