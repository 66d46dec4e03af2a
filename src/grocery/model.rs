use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sub-millisecond slots per timestamp. Ids are `millis * TIEBREAK_SLOTS + tiebreak`.
const TIEBREAK_SLOTS: u64 = 1000;

/// Identifier of an item, derived from its creation time.
///
/// The low digits hold a tiebreaker so that items created within the same
/// millisecond (a bulk import, typically) still get distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    pub fn at(created_at: DateTime<Utc>, tiebreak: u64) -> Self {
        let millis = created_at.timestamp_millis().max(0) as u64;
        Self(millis * TIEBREAK_SLOTS + tiebreak % TIEBREAK_SLOTS)
    }

    /// Returns an id for an item created at `now` that no item in `existing` uses.
    ///
    /// With `randomize`, the tiebreaker is drawn at random rather than starting at zero.
    pub fn fresh(existing: &[Item], now: DateTime<Utc>, randomize: bool) -> Self {
        let tiebreak = if randomize {
            fastrand::u64(..TIEBREAK_SLOTS)
        } else {
            0
        };
        let mut id = Self::at(now, tiebreak);
        while existing.iter().any(|item| item.id == id) {
            id = Self(id.0 + 1);
        }
        id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        let millis = (self.0 / TIEBREAK_SLOTS) as i64;
        Utc.timestamp_millis_opt(millis)
            .single()
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }

}

impl From<u64> for ItemId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Item {
    pub fn new(id: ItemId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    /// Case-insensitive substring match against the item text.
    pub fn matches(&self, fragment: &str) -> bool {
        self.text.to_lowercase().contains(&fragment.to_lowercase())
    }
}

/// Counts shown alongside the rendered list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListSummary {
    pub total: usize,
    pub remaining: usize,
}

impl ListSummary {
    pub fn of(items: &[Item]) -> Self {
        Self {
            total: items.len(),
            remaining: items.iter().filter(|i| !i.completed).count(),
        }
    }
}
