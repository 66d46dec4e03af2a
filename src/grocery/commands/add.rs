use crate::commands::{CmdMessage, CmdResult, ListChange};
use crate::error::Result;
use crate::model::{Item, ItemId};
use crate::store::{ItemStore, KeyValueStore};
use chrono::Utc;

pub const EMPTY_HINT: &str = "The goblin needs SOMETHING to eat!";

pub fn run<S: KeyValueStore>(store: &mut ItemStore<S>, text: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let text = text.trim();
    if text.is_empty() {
        result.add_message(CmdMessage::warning(EMPTY_HINT));
        return Ok(result);
    }

    let id = ItemId::fresh(store.items(), Utc::now(), false);
    store.push(Item::new(id, text));
    store.save()?;

    result.add_message(CmdMessage::success(format!("Added: {}", text)));
    result.changes.push(ListChange::Added(id));
    Ok(result)
}
