use super::KeyValueStore;
use crate::error::Result;
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    values: HashMap<String, String>,
    writes: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a raw value without counting it as a write.
    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    /// Number of `set` calls seen so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Item, ItemId};
    use crate::store::{ItemStore, DEFAULT_ITEMS_KEY};

    /// Builds an [`ItemStore`] over an [`InMemoryStore`] with predictable ids (1, 2, 3...).
    #[derive(Default)]
    pub struct StoreFixture {
        items: Vec<Item>,
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_item(mut self, text: &str) -> Self {
            let id = ItemId::from(self.items.len() as u64 + 1);
            self.items.push(Item::new(id, text));
            self
        }

        pub fn with_completed_item(mut self, text: &str) -> Self {
            let id = ItemId::from(self.items.len() as u64 + 1);
            let mut item = Item::new(id, text);
            item.completed = true;
            self.items.push(item);
            self
        }

        pub fn with_items(self, texts: &[&str]) -> Self {
            texts.iter().fold(self, |fixture, text| fixture.with_item(text))
        }

        /// The seeded backend is not counted as written to.
        pub fn build(self) -> ItemStore<InMemoryStore> {
            let json = serde_json::to_string(&self.items).unwrap();
            let backend = InMemoryStore::new().with_value(DEFAULT_ITEMS_KEY, &json);
            ItemStore::load(backend, DEFAULT_ITEMS_KEY)
        }
    }
}
