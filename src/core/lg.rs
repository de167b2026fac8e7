use crate::core::intent_index::IntentIndex;
use crate::core::sections::push_section;
use crate::core::template::render_message;
use crate::domain::model::{Message, Project};
use crate::domain::ports::EntityWrapper;

/// Builds the `.lg` file: one `# <message id>` section per indexed message.
///
/// The connected intents only decide which messages get a section; each id is
/// rendered once however many intents lead to it. Ids missing from the board
/// render as an empty message.
pub fn build_lg(
    header: &str,
    index: &IntentIndex,
    project: &Project,
    wrapper: &dyn EntityWrapper,
) -> String {
    index.iter().fold(header.to_string(), |mut acc, entry| {
        let variations = match project.find_message(&entry.message_id) {
            Some(message) => render_message(message, wrapper),
            None => {
                tracing::warn!(
                    "Message {} is connected to intents {:?} but is missing from the board",
                    entry.message_id,
                    entry.intent_ids
                );
                render_message(&Message::empty(&entry.message_id), wrapper)
            }
        };
        push_section(&mut acc, &entry.message_id, &variations);
        acc
    })
}
