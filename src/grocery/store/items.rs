use super::KeyValueStore;
use crate::error::{GroceryError, Result};
use crate::model::{Item, ItemId};

/// The in-memory ordered list, backed by a [`KeyValueStore`].
///
/// Order is insertion order and is never changed by the store itself.
pub struct ItemStore<S: KeyValueStore> {
    backend: S,
    key: String,
    items: Vec<Item>,
}

impl<S: KeyValueStore> ItemStore<S> {
    /// Loads the list stored under `key`.
    ///
    /// Missing, unreadable or malformed state yields an empty list. The failure
    /// is logged and never returned.
    pub fn load(backend: S, key: &str) -> Self {
        let items = match backend.get(key) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Item>>(&raw) {
                Ok(items) => items,
                Err(err) => {
                    tracing::warn!(%err, key, "stored list is malformed, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!(%err, key, "could not read stored list, starting empty");
                Vec::new()
            }
        };
        tracing::debug!(count = items.len(), key, "list loaded");

        Self {
            backend,
            key: key.to_string(),
            items,
        }
    }

    /// Writes the full list through to the backend.
    pub fn save(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.items).map_err(GroceryError::Serialization)?;
        self.backend.set(&self.key, &json)?;
        tracing::debug!(count = self.items.len(), key = %self.key, "list saved");
        Ok(())
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// First item, in list order, whose text contains `fragment` ignoring case.
    pub fn find_matching(&self, fragment: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.matches(fragment))
    }

    pub(crate) fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Removes the item with `id` if present.
    pub(crate) fn remove(&mut self, id: ItemId) -> Option<Item> {
        let position = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(position))
    }

    pub(crate) fn take_all(&mut self) -> Vec<Item> {
        std::mem::take(&mut self.items)
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}
