use crate::core::sections::LINE_ENDING;
use crate::domain::model::{Body, Content, Message};
use crate::domain::ports::EntityWrapper;
use serde_json::Value;

const MULTILINE_SYMBOL: &str = "```";

/// Renders one message as the body of its `.lg` template. No trailing newline.
pub fn render_message(message: &Message, wrapper: &dyn EntityWrapper) -> String {
    render_content(&message.content(), wrapper)
}

pub fn render_content(content: &Content, wrapper: &dyn EntityWrapper) -> String {
    match content {
        Content::QuickReplies { body, replies } => render_choices(body, replies, wrapper),
        Content::Buttons { body, buttons } => render_choices(body, buttons, wrapper),
        // URLs are not natural-language text, so they skip entity wrapping.
        Content::Image { image_url } => format!("- {}", image_url),
        Content::Generic { payload } => fenced(&pretty(payload)),
        Content::Plain { kind, body } => {
            if !matches!(kind.as_deref(), Some("text" | "api" | "jump")) {
                tracing::debug!(
                    "Rendering message type {:?} with the plain text template",
                    kind
                );
            }
            format!("- {}", render_body(body, wrapper))
        }
    }
}

fn render_choices(body: &Body, choices: &Value, wrapper: &dyn EntityWrapper) -> String {
    let inner = format!("{}{}{}", render_body(body, wrapper), LINE_ENDING, pretty(choices));
    fenced(&inner)
}

fn render_body(body: &Body, wrapper: &dyn EntityWrapper) -> String {
    match body {
        Body::Text(text) => wrapper.wrap(text),
        Body::Payload(payload) => pretty(payload),
    }
}

fn fenced(inner: &str) -> String {
    format!(
        "- {}{}{}{}{}",
        MULTILINE_SYMBOL,
        LINE_ENDING,
        inner,
        LINE_ENDING,
        MULTILINE_SYMBOL
    )
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entities::PlaceholderWrapper;
    use serde_json::json;

    fn message(kind: &str, payload: Value) -> Message {
        Message {
            message_id: "m1".to_string(),
            message_type: Some(kind.to_string()),
            next_message_ids: vec![],
            payload,
        }
    }

    fn lines(parts: &[&str]) -> String {
        parts.join(LINE_ENDING)
    }

    #[test]
    fn test_image_renders_url_verbatim() {
        let wrapper = PlaceholderWrapper::default();
        let rendered = render_message(
            &message("image", json!({ "image_url": "http://x/y.png" })),
            &wrapper,
        );
        assert_eq!(rendered, "- http://x/y.png");

        let rendered = render_message(
            &message("image", json!({ "image_url": "http://x/%id%.png" })),
            &wrapper,
        );
        assert_eq!(rendered, "- http://x/%id%.png");
    }

    #[test]
    fn test_button_renders_fenced_block() {
        let wrapper = PlaceholderWrapper::default();
        let rendered = render_message(
            &message("button", json!({ "text": "Pick one", "buttons": [{ "title": "A" }] })),
            &wrapper,
        );
        assert_eq!(
            rendered,
            lines(&[
                "- ```",
                "Pick one",
                "[",
                "  {",
                "    \"title\": \"A\"",
                "  }",
                "]",
                "```"
            ])
        );
    }

    #[test]
    fn test_quick_replies_use_their_own_key() {
        let wrapper = PlaceholderWrapper::default();
        let rendered = render_message(
            &message(
                "quick_replies",
                json!({
                    "text": "Size for %name%?",
                    "quick_replies": [{ "title": "S", "payload": "small" }],
                    "buttons": [{ "title": "ignored" }]
                }),
            ),
            &wrapper,
        );
        assert!(rendered.starts_with(&lines(&["- ```", "Size for {name}?", "["])));
        assert!(rendered.contains("\"payload\": \"small\""));
        assert!(!rendered.contains("ignored"));
        assert!(rendered.ends_with(&lines(&["]", "```"])));
    }

    #[test]
    fn test_button_without_text_prints_payload() {
        let wrapper = PlaceholderWrapper::default();
        let rendered = render_message(&message("button", json!({ "buttons": [] })), &wrapper);
        assert_eq!(
            rendered,
            lines(&["- ```", "{", "  \"buttons\": []", "}", "[]", "```"])
        );
    }

    #[test]
    fn test_generic_ignores_text_field() {
        let wrapper = PlaceholderWrapper::default();
        let rendered = render_message(
            &message(
                "generic",
                json!({ "text": "%skip%", "elements": [{ "title": "Card" }] }),
            ),
            &wrapper,
        );
        assert_eq!(
            rendered,
            lines(&[
                "- ```",
                "{",
                "  \"text\": \"%skip%\",",
                "  \"elements\": [",
                "    {",
                "      \"title\": \"Card\"",
                "    }",
                "  ]",
                "}",
                "```"
            ])
        );
    }

    #[test]
    fn test_unknown_type_uses_default_branch() {
        let wrapper = PlaceholderWrapper::default();
        let rendered = render_message(
            &message("weird_unknown_tag", json!({ "text": "Hi {name}" })),
            &wrapper,
        );
        assert_eq!(rendered, "- Hi {name}");

        let rendered = render_message(&message("api", json!({ "text": "Hi %name%" })), &wrapper);
        assert_eq!(rendered, "- Hi {name}");
    }

    #[test]
    fn test_missing_message_renders_empty_payload() {
        let wrapper = PlaceholderWrapper::default();
        assert_eq!(render_message(&Message::empty("gone"), &wrapper), "- {}");
    }

    #[test]
    fn test_rendering_is_repeatable() {
        let wrapper = PlaceholderWrapper::default();
        let msg = message("quick_replies", json!({ "text": "Hi", "quick_replies": [1, 2] }));
        assert_eq!(render_message(&msg, &wrapper), render_message(&msg, &wrapper));
    }
}
