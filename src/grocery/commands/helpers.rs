use crate::commands::CmdMessage;
use crate::index::ItemSelector;
use crate::model::ItemId;
use crate::store::{ItemStore, KeyValueStore};

/// Resolves selectors against the current list.
///
/// Selectors that match nothing become warnings rather than errors.
pub fn resolve_selectors<S: KeyValueStore>(
    store: &ItemStore<S>,
    selectors: &[ItemSelector],
) -> (Vec<ItemId>, Vec<CmdMessage>) {
    let mut ids = Vec::new();
    let mut warnings = Vec::new();

    for selector in selectors {
        let found = match selector {
            ItemSelector::Position(n) => n.checked_sub(1).and_then(|i| store.items().get(i)),
            ItemSelector::Text(fragment) if fragment.trim().is_empty() => None,
            ItemSelector::Text(fragment) => store.find_matching(fragment),
        };
        match found {
            Some(item) if !ids.contains(&item.id) => ids.push(item.id),
            Some(_) => {}
            None => warnings.push(CmdMessage::warning(format!(
                "No item matches {}",
                selector
            ))),
        }
    }

    (ids, warnings)
}
