use crate::core::sections::{push_section, LINE_ENDING};
use crate::domain::model::Intent;
use crate::domain::ports::EntityWrapper;

/// Builds the `.lu` file: one `# <intent>` section per intent, one `- <utterance>` per line.
pub fn build_lu(header: &str, intents: &[Intent], wrapper: &dyn EntityWrapper) -> String {
    intents.iter().fold(header.to_string(), |mut acc, intent| {
        let variations = intent
            .utterances
            .iter()
            .map(|utterance| format!("- {}", wrapper.wrap(&utterance.text)))
            .collect::<Vec<_>>()
            .join(LINE_ENDING);
        push_section(&mut acc, &intent.name, &variations);
        acc
    })
}
