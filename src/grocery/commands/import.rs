use crate::commands::{CmdMessage, CmdResult, Confirm, ListChange};
use crate::error::Result;
use crate::model::{Item, ItemId};
use crate::share::{strip_param, SharedList, LIST_PARAM};
use crate::store::{ItemStore, KeyValueStore};
use chrono::Utc;

/// Merges the list carried by `address` into the store after confirmation.
///
/// A malformed list is logged and otherwise ignored: nothing is imported and
/// the address is left alone. Once a non-empty list has been offered, the
/// `list` parameter is stripped whether or not the user accepted it.
pub fn run<S: KeyValueStore, C: Confirm>(
    store: &mut ItemStore<S>,
    address: &str,
    confirm: &mut C,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let shared = match SharedList::from_address(address) {
        Ok(Some(shared)) => shared,
        Ok(None) => {
            result.add_message(CmdMessage::info("No shared list in that link."));
            return Ok(result);
        }
        Err(e) => {
            tracing::warn!(error = %e, "ignoring shared list");
            result.add_message(CmdMessage::warning(
                "The goblin couldn't make sense of that list.",
            ));
            return Ok(result);
        }
    };

    if shared.is_empty() {
        return Ok(result);
    }

    if confirm.confirm(&shared.preview()) {
        let now = Utc::now();
        let mut imported = 0;
        for text in shared.importable_texts() {
            let id = ItemId::fresh(store.items(), now, true);
            store.push(Item::new(id, text));
            imported += 1;
        }
        store.save()?;
        tracing::debug!(imported, "merged shared list");

        result.add_message(CmdMessage::success(format!(
            "The goblin gobbled up {} item(s)!",
            imported
        )));
        result.changes.push(ListChange::Imported(imported));
    } else {
        result.add_message(CmdMessage::info("Operation cancelled."));
    }

    result.cleaned_address = Some(strip_param(address, LIST_PARAM));
    Ok(result)
}
