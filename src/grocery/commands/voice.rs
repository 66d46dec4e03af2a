use crate::commands::{add, CmdResult, ListChange};
use crate::error::Result;
use crate::store::{ItemStore, KeyValueStore};
use crate::voice::{interpret, VoiceCommand, VoiceOutcome};

/// Applies a recognized transcript to the list.
///
/// Removal deletes the first item, in list order, whose text contains the
/// spoken fragment (case-insensitive).
pub fn run<S: KeyValueStore>(store: &mut ItemStore<S>, transcript: &str) -> Result<CmdResult> {
    let (mut result, outcome) = match interpret(transcript) {
        VoiceCommand::Add(text) => {
            let result = add::run(store, &text)?;
            (result, VoiceOutcome::Added(text))
        }
        VoiceCommand::Remove(fragment) => {
            let found = store.find_matching(&fragment).map(|item| item.id);
            match found.and_then(|id| store.remove(id)) {
                Some(item) => {
                    store.save()?;
                    let mut result = CmdResult::default();
                    result.changes.push(ListChange::Deleted(item.id));
                    (result, VoiceOutcome::Removed(item.text))
                }
                None => (CmdResult::default(), VoiceOutcome::NotFound(fragment)),
            }
        }
        VoiceCommand::Unrecognized(heard) => {
            (CmdResult::default(), VoiceOutcome::Unrecognized(heard))
        }
    };

    tracing::debug!(?outcome, "voice command applied");
    // The session shows the outcome as its status line; drop add's own message.
    result.messages.clear();
    result.voice = Some(outcome);
    Ok(result)
}
