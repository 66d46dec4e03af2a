use crate::commands::{CmdMessage, CmdResult, Confirm, ListChange};
use crate::error::Result;
use crate::store::{ItemStore, KeyValueStore};

pub const CONFIRM_PROMPT: &str = "The goblin will forget everything! Are you sure?";

pub fn run<S: KeyValueStore, C: Confirm>(
    store: &mut ItemStore<S>,
    confirm: &mut C,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if store.is_empty() {
        return Ok(result);
    }
    if !confirm.confirm(CONFIRM_PROMPT) {
        result.add_message(CmdMessage::info("Operation cancelled."));
        return Ok(result);
    }

    let forgotten = store.take_all();
    store.save()?;

    result.add_message(CmdMessage::success(format!(
        "The goblin forgot {} item(s).",
        forgotten.len()
    )));
    result.changes.push(ListChange::Cleared(forgotten.len()));
    Ok(result)
}
