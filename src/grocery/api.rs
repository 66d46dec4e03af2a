//! # API Facade
//!
//! The single entry point for every goblin operation, whatever the UI.
//!
//! The facade dispatches to `commands/*.rs` and normalizes inputs (turning
//! user selectors into [`ItemId`]s). It does no printing and holds no
//! business logic of its own; every method returns a [`CmdResult`] for the
//! caller to render.
//!
//! `GroceryApi<S: KeyValueStore>` is generic over the persistence backend:
//! `FileStore` in production, `InMemoryStore` in tests.

use crate::commands::{self, CmdResult, Confirm};
use crate::config::GroceryConfig;
use crate::error::Result;
use crate::index::parse_selectors;
use crate::model::Item;
use crate::store::{ItemStore, KeyValueStore};
use std::path::PathBuf;

pub struct GroceryApi<S: KeyValueStore> {
    store: ItemStore<S>,
    config: GroceryConfig,
    config_dir: PathBuf,
}

impl<S: KeyValueStore> GroceryApi<S> {
    /// Loads the list stored under the configured key. Unreadable state starts
    /// an empty list.
    pub fn new(backend: S, config: GroceryConfig, config_dir: impl Into<PathBuf>) -> Self {
        let store = ItemStore::load(backend, &config.storage_key);
        Self {
            store,
            config,
            config_dir: config_dir.into(),
        }
    }

    pub fn items(&self) -> &[Item] {
        self.store.items()
    }

    pub fn config(&self) -> &GroceryConfig {
        &self.config
    }

    pub fn add_item(&mut self, text: &str) -> Result<CmdResult> {
        commands::add::run(&mut self.store, text)
    }

    pub fn list_items(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn toggle_items<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<CmdResult> {
        let selectors = parse_selectors(selectors);
        let (ids, warnings) = commands::helpers::resolve_selectors(&self.store, &selectors);
        let mut result = commands::toggle::run(&mut self.store, &ids)?;
        result.messages.extend(warnings);
        Ok(result)
    }

    pub fn delete_items<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<CmdResult> {
        let selectors = parse_selectors(selectors);
        let (ids, warnings) = commands::helpers::resolve_selectors(&self.store, &selectors);
        if ids.is_empty() {
            return Ok(CmdResult {
                messages: warnings,
                ..Default::default()
            });
        }
        let mut result = commands::delete::run(&mut self.store, &ids)?;
        result.messages.extend(warnings);
        Ok(result)
    }

    pub fn clear_all<C: Confirm>(&mut self, confirm: &mut C) -> Result<CmdResult> {
        commands::clear::run(&mut self.store, confirm)
    }

    pub fn share(&self) -> Result<CmdResult> {
        commands::share::run(&self.store, &self.config.share_base_url)
    }

    pub fn import_from_address<C: Confirm>(
        &mut self,
        address: &str,
        confirm: &mut C,
    ) -> Result<CmdResult> {
        commands::import::run(&mut self.store, address, confirm)
    }

    pub fn voice_command(&mut self, transcript: &str) -> Result<CmdResult> {
        commands::voice::run(&mut self.store, transcript)
    }

    /// Config changes take effect on the next run.
    pub fn config_action(&self, action: commands::config::ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }
}
