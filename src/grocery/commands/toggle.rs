use crate::commands::{CmdMessage, CmdResult, ListChange};
use crate::error::Result;
use crate::model::ItemId;
use crate::store::{ItemStore, KeyValueStore};

/// Flips `completed` on each item present. Absent ids are skipped, and
/// nothing is written when no item was touched.
pub fn run<S: KeyValueStore>(store: &mut ItemStore<S>, ids: &[ItemId]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for id in ids {
        let Some(item) = store.get_mut(*id) else {
            continue;
        };
        item.completed = !item.completed;
        let message = if item.completed {
            format!("Bagged: {}", item.text)
        } else {
            format!("Back on the hunt: {}", item.text)
        };
        result.add_message(CmdMessage::success(message));
        result.changes.push(ListChange::Toggled(*id));
    }

    if result.changed() {
        store.save()?;
    }
    Ok(result)
}
