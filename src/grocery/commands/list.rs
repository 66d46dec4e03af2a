use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::index_items;
use crate::model::ListSummary;
use crate::store::{ItemStore, KeyValueStore};

pub fn run<S: KeyValueStore>(store: &ItemStore<S>) -> Result<CmdResult> {
    Ok(CmdResult::default()
        .with_listed_items(index_items(store.items()))
        .with_summary(ListSummary::of(store.items())))
}
