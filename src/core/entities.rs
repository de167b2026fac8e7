use crate::domain::ports::EntityWrapper;
use regex::Regex;
use std::sync::OnceLock;

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"%([^%\s]+)%").expect("placeholder pattern is valid"))
}

/// Turns `%entity%` placeholders into `{entity}` (or another bracket pair).
#[derive(Debug, Clone)]
pub struct PlaceholderWrapper {
    open: char,
    close: char,
}

impl PlaceholderWrapper {
    pub fn new(open: char) -> Self {
        let close = match open {
            '{' => '}',
            '[' => ']',
            '(' => ')',
            '<' => '>',
            other => other,
        };
        Self { open, close }
    }
}

impl Default for PlaceholderWrapper {
    fn default() -> Self {
        Self::new('{')
    }
}

impl EntityWrapper for PlaceholderWrapper {
    fn wrap(&self, text: &str) -> String {
        placeholder_pattern()
            .replace_all(text, |caps: &regex::Captures| {
                format!("{}{}{}", self.open, &caps[1], self.close)
            })
            .into_owned()
    }
}
