use crate::commands::{CmdMessage, CmdResult, ListChange};
use crate::error::Result;
use crate::model::ItemId;
use crate::store::{ItemStore, KeyValueStore};

/// Filters the given ids out of the list. Deleting an id that is already gone
/// is harmless; the list is written either way.
pub fn run<S: KeyValueStore>(store: &mut ItemStore<S>, ids: &[ItemId]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for id in ids {
        if let Some(item) = store.remove(*id) {
            result.add_message(CmdMessage::success(format!("Removed: {}", item.text)));
        }
        result.changes.push(ListChange::Deleted(*id));
    }

    store.save()?;
    Ok(result)
}
