use crate::commands::{CmdMessage, CmdResult, ShareOutput};
use crate::error::Result;
use crate::share::{plain_text, share_link, sms_link};
use crate::store::{ItemStore, KeyValueStore};

pub const NOTHING_TO_SHARE: &str = "The goblin has nothing to share! Add some items first.";

/// Produces the share link, plain text and SMS link for the current list.
/// `base_address` is the page the link should open; its query string is dropped.
pub fn run<S: KeyValueStore>(store: &ItemStore<S>, base_address: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if store.is_empty() {
        result.add_message(CmdMessage::warning(NOTHING_TO_SHARE));
        return Ok(result);
    }

    let texts: Vec<&str> = store.items().iter().map(|i| i.text.as_str()).collect();
    let link = share_link(base_address, &texts)?;
    let plain_text = plain_text(store.items());
    let sms_link = sms_link(&plain_text);

    Ok(result.with_share(ShareOutput {
        link,
        plain_text,
        sms_link,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::share::SharedList;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn empty_list_has_nothing_to_share() {
        let store = StoreFixture::new().build();
        let result = run(&store, "https://grocery-goblin.app/").unwrap();

        assert!(result.share.is_none());
        assert_eq!(result.messages[0].content, NOTHING_TO_SHARE);
    }

    #[test]
    fn link_round_trips_texts_in_order_ignoring_completion() {
        let store = StoreFixture::new()
            .with_item("milk")
            .with_completed_item("eggs & ham")
            .with_item("50% cocoa")
            .build();
        let result = run(&store, "https://grocery-goblin.app/?list=old").unwrap();
        let share = result.share.unwrap();

        assert!(share.link.starts_with("https://grocery-goblin.app/?list="));
        let shared = SharedList::from_address(&share.link).unwrap().unwrap();
        assert_eq!(
            shared.importable_texts(),
            vec!["milk", "eggs & ham", "50% cocoa"]
        );
    }

    #[test]
    fn plain_text_and_sms_carry_completion() {
        let store = StoreFixture::new()
            .with_item("milk")
            .with_completed_item("eggs")
            .build();
        let share = run(&store, "https://x.test/").unwrap().share.unwrap();

        assert!(share.plain_text.contains("[ ] milk\n[x] eggs\n"));
        assert!(share.sms_link.starts_with("sms:?body=Grocery%20Goblin"));
    }
}
