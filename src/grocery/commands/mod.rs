use crate::config::GroceryConfig;
use crate::index::DisplayItem;
use crate::model::{ItemId, ListSummary};
use crate::voice::VoiceOutcome;

pub mod add;
pub mod clear;
pub mod config;
pub mod delete;
pub mod helpers;
pub mod import;
pub mod list;
pub mod share;
pub mod toggle;
pub mod voice;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A change the list went through. Any change means the list must be re-rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListChange {
    Added(ItemId),
    Toggled(ItemId),
    Deleted(ItemId),
    Cleared(usize),
    Imported(usize),
}

/// Asks the user to confirm a destructive or merging operation.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Outbound representations of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareOutput {
    pub link: String,
    pub plain_text: String,
    pub sms_link: String,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub changes: Vec<ListChange>,
    pub listed_items: Vec<DisplayItem>,
    pub summary: Option<ListSummary>,
    pub share: Option<ShareOutput>,
    pub voice: Option<VoiceOutcome>,
    pub cleaned_address: Option<String>,
    pub config: Option<GroceryConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn changed(&self) -> bool {
        !self.changes.is_empty()
    }

    pub fn with_listed_items(mut self, items: Vec<DisplayItem>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_summary(mut self, summary: ListSummary) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn with_share(mut self, share: ShareOutput) -> Self {
        self.share = Some(share);
        self
    }

    pub fn with_config(mut self, config: GroceryConfig) -> Self {
        self.config = Some(config);
        self
    }
}
