use crate::domain::model::{Intent, Message};
use crate::domain::ports::IntentIndexer;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub message_id: String,
    pub intent_ids: Vec<String>,
}

/// Message id -> ids of the intents that lead into it, in discovery order.
///
/// Entries are only created together with their first intent, so no entry is
/// ever empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntentIndex {
    entries: Vec<IndexEntry>,
    positions: HashMap<String, usize>,
}

impl IntentIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `intent_id` under `message_id`. Repeated pairs are ignored.
    pub fn insert(&mut self, message_id: &str, intent_id: &str) {
        match self.positions.get(message_id) {
            Some(&position) => {
                let intent_ids = &mut self.entries[position].intent_ids;
                if !intent_ids.iter().any(|id| id == intent_id) {
                    intent_ids.push(intent_id.to_string());
                }
            }
            None => {
                self.positions.insert(message_id.to_string(), self.entries.len());
                self.entries.push(IndexEntry {
                    message_id: message_id.to_string(),
                    intent_ids: vec![intent_id.to_string()],
                });
            }
        }
    }

    pub fn get(&self, message_id: &str) -> Option<&[String]> {
        self.positions
            .get(message_id)
            .map(|&position| self.entries[position].intent_ids.as_slice())
    }

    pub fn contains(&self, message_id: &str) -> bool {
        self.positions.contains_key(message_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &IndexEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for IntentIndex {
    fn from_iter<T: IntoIterator<Item = (&'a str, &'a str)>>(iter: T) -> Self {
        let mut index = IntentIndex::new();
        for (message_id, intent_id) in iter {
            index.insert(message_id, intent_id);
        }
        index
    }
}

/// Follows intent-labelled edges between board messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlowIntentIndexer;

impl IntentIndexer for FlowIntentIndexer {
    fn build_index(&self, messages: &[Message], intents: &[Intent]) -> IntentIndex {
        let known_intents: HashSet<&str> =
            intents.iter().map(|intent| intent.id.as_str()).collect();
        let known_messages: HashSet<&str> = messages
            .iter()
            .map(|message| message.message_id.as_str())
            .collect();

        let mut index = IntentIndex::new();
        for message in messages {
            for edge in &message.next_message_ids {
                let Some(intent_id) = edge.intent_id() else {
                    continue;
                };
                if !known_intents.contains(intent_id) {
                    tracing::debug!(
                        "Skipping edge {} -> {}: unknown intent {}",
                        message.message_id,
                        edge.message_id,
                        intent_id
                    );
                    continue;
                }
                if !known_messages.contains(edge.message_id.as_str()) {
                    tracing::debug!(
                        "Skipping edge {} -> {}: target is not on the board",
                        message.message_id,
                        edge.message_id
                    );
                    continue;
                }
                index.insert(&edge.message_id, intent_id);
            }
        }

        tracing::debug!("Built intent index with {} messages", index.len());
        index
    }
}
