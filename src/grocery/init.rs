use crate::api::GroceryApi;
use crate::config::GroceryConfig;
use crate::error::{GroceryError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::env;
use std::path::PathBuf;

/// Overrides the data directory. Mostly useful for tests and portable setups.
pub const HOME_ENV: &str = "GOBLIN_HOME";

pub struct GroceryContext {
    pub api: GroceryApi<FileStore>,
    pub config: GroceryConfig,
}

/// `GOBLIN_HOME` if set, else the platform data directory.
pub fn data_dir() -> Result<PathBuf> {
    if let Some(home) = env::var_os(HOME_ENV).filter(|h| !h.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("app", "grocery-goblin", "goblin")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| GroceryError::Store("Could not determine data dir".to_string()))
}

pub fn initialize() -> Result<GroceryContext> {
    let data_dir = data_dir()?;
    let config = GroceryConfig::load(&data_dir).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "unreadable config, using defaults");
        GroceryConfig::default()
    });

    let store = FileStore::new(&data_dir);
    let api = GroceryApi::new(store, config.clone(), &data_dir);

    Ok(GroceryContext { api, config })
}
