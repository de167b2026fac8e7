use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A full flow project export: project metadata, the board and the NLU assets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub project: ProjectMeta,
    pub board: BoardEnvelope,
    #[serde(deserialize_with = "null_as_default")]
    pub intents: Vec<Intent>,
    #[serde(deserialize_with = "null_as_default")]
    pub entities: Vec<Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub variables: Vec<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectMeta {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub platform: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardEnvelope {
    pub board: Board,
    pub slots: Value,
    #[serde(deserialize_with = "null_as_default")]
    pub variables: Vec<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Board {
    #[serde(deserialize_with = "null_as_default")]
    pub root_messages: Vec<Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Message {
    #[serde(deserialize_with = "null_as_default")]
    pub message_id: String,
    pub message_type: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub next_message_ids: Vec<NextMessage>,
    pub payload: Value,
}

/// An outgoing edge of a message. `intent` is either `{ "value": id, "label": .. }`,
/// a bare id string, or empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NextMessage {
    #[serde(deserialize_with = "null_as_default")]
    pub message_id: String,
    pub action: Value,
    pub intent: Value,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Intent {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub utterances: Vec<Utterance>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_global: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Utterance {
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub variables: Vec<UtteranceVariable>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UtteranceVariable {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    pub entity: Option<String>,
    pub default_value: Option<String>,
    pub start_index: Value,
}

/// Lead text of a response block.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// The payload's `text` field, not yet entity-wrapped.
    Text(String),
    /// No plain text available; the whole payload is printed instead.
    Payload(Value),
}

/// A message payload resolved against its `message_type` tag.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    QuickReplies { body: Body, replies: Value },
    Buttons { body: Body, buttons: Value },
    Image { image_url: String },
    Generic { payload: Value },
    /// `text`, `api`, `jump` and any tag not listed above.
    Plain { kind: Option<String>, body: Body },
}

impl Project {
    pub fn messages(&self) -> &[Message] {
        &self.board.board.messages
    }

    pub fn find_message(&self, id: &str) -> Option<&Message> {
        self.messages().iter().find(|message| message.message_id == id)
    }

    /// File stem for generated files: the project name without whitespace, lower-cased.
    pub fn slug(&self) -> String {
        let slug: String = self
            .project
            .name
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        if slug.is_empty() {
            "project".to_string()
        } else {
            slug
        }
    }
}

impl Message {
    /// Placeholder used when an indexed id has no message on the board.
    pub fn empty(id: &str) -> Self {
        Self {
            message_id: id.to_string(),
            ..Self::default()
        }
    }

    pub fn content(&self) -> Content {
        let payload = match &self.payload {
            Value::Object(map) => map.clone(),
            _ => Map::new(),
        };

        match self.message_type.as_deref() {
            Some("quick_replies") => Content::QuickReplies {
                body: Body::from_payload(&payload),
                replies: array_field(&payload, "quick_replies"),
            },
            Some("button") => Content::Buttons {
                body: Body::from_payload(&payload),
                buttons: array_field(&payload, "buttons"),
            },
            Some("image") => Content::Image {
                image_url: payload
                    .get("image_url")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
            },
            Some("generic") => Content::Generic {
                payload: Value::Object(payload),
            },
            other => Content::Plain {
                kind: other.map(str::to_string),
                body: Body::from_payload(&payload),
            },
        }
    }
}

impl NextMessage {
    pub fn intent_id(&self) -> Option<&str> {
        let id = match &self.intent {
            Value::String(id) => Some(id.as_str()),
            Value::Object(map) => map.get("value").and_then(Value::as_str),
            _ => None,
        };
        id.filter(|id| !id.is_empty())
    }
}

impl Body {
    fn from_payload(payload: &Map<String, Value>) -> Self {
        match payload.get("text") {
            Some(Value::String(text)) => Body::Text(text.clone()),
            _ => Body::Payload(Value::Object(payload.clone())),
        }
    }
}

/// Explicit `null` in an export reads the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn array_field(payload: &Map<String, Value>, key: &str) -> Value {
    match payload.get(key) {
        None | Some(Value::Null) => Value::Array(Vec::new()),
        Some(value) => value.clone(),
    }
}
