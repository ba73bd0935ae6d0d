//! Core implementation of the script launcher
//!
//! The script launcher keeps named, reusable shell-command configurations ("scripts") and runs
//! them on demand or as a startup batch. Scripts live in a configuration file; running one
//! resolves its command into a concrete invocation and spawns it without waiting for it to
//! finish.

use std::path::{Path, PathBuf};

use log::debug;

use crate::config_file::{Config, ConfigError};
use crate::store::FileStore;

pub mod config_file;
pub mod engine;
pub mod launcher;
pub mod logger;
pub mod platform;
pub mod resolver;
pub mod scripts;
pub mod startup;
pub mod store;

/// Open the store from a config file (or auto-detect one), returning it with the config path.
///
/// # Errors
///
/// Returns `ConfigError` if the config file is not found, cannot be parsed, or contains
/// duplicate script ids.
pub fn open_store(config_file: Option<&Path>) -> Result<(FileStore, PathBuf), ConfigError> {
    let config_path = match config_file {
        Some(file) => {
            if !file.exists() {
                return Err(ConfigError::ConfigNotFound(file.to_path_buf()));
            }
            file.to_path_buf()
        }
        None => Config::find_config()?,
    };
    debug!("Opening script store: {}", config_path.display());
    let store = FileStore::open(&config_path)?;
    Ok((store, config_path))
}
