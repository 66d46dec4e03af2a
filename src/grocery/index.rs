//! Users address items by their 1-based position in the rendered list, or by a
//! fragment of their text. Positions are recomputed on every render and are
//! never stored; the stable identity is [`ItemId`](crate::model::ItemId).

use crate::model::Item;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemSelector {
    Position(usize),
    Text(String),
}

impl fmt::Display for ItemSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemSelector::Position(n) => write!(f, "{}", n),
            ItemSelector::Text(t) => write!(f, "\"{}\"", t),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub index: usize,
    pub item: Item,
}

pub fn index_items(items: &[Item]) -> Vec<DisplayItem> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| DisplayItem {
            index: i + 1,
            item: item.clone(),
        })
        .collect()
}

/// If every input is a positive number they are positions; otherwise all the
/// words together are one text fragment (`goblin rm peanut butter`).
pub fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Vec<ItemSelector> {
    let positions: Option<Vec<usize>> = inputs
        .iter()
        .map(|s| s.as_ref().parse::<usize>().ok().filter(|n| *n > 0))
        .collect();

    match positions {
        Some(positions) => positions.into_iter().map(ItemSelector::Position).collect(),
        None => {
            let fragment = inputs
                .iter()
                .map(|s| s.as_ref().trim())
                .filter(|s| !s.is_empty())
                .collect::<Vec<&str>>()
                .join(" ");
            vec![ItemSelector::Text(fragment)]
        }
    }
}
