//! # Storage Layer
//!
//! Persistence is modelled as an opaque key-value string store. The whole list
//! lives under a single key as one JSON array, rewritten on every mutation.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: one `<key>.json` file per key inside the data directory
//! - [`memory::InMemoryStore`]: a `HashMap` for tests, counting writes
//!
//! [`items::ItemStore`] sits on top of either backend and owns the in-memory
//! ordered list. It is the only place that serializes items.
//!
//! ```text
//! ~/.local/share/goblin/
//! ├── goblinItems.json    # [{"id": ..., "text": "milk", "completed": false}, ...]
//! └── config.json         # GroceryConfig
//! ```

use crate::error::Result;

pub mod fs;
pub mod items;
pub mod memory;

pub use items::ItemStore;

/// Key the item list is stored under unless configured otherwise.
pub const DEFAULT_ITEMS_KEY: &str = "goblinItems";

/// Abstract key-value persistence.
pub trait KeyValueStore {
    /// Returns the last value written under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
