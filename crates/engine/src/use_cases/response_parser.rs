//! Layered JSON extraction from free-form model output.
//!
//! Models asked for "ONLY a JSON object" still wrap it in prose, markdown
//! fences or chat-template tokens. The parser strips tokens, then walks an
//! ordered chain of [`ParseStrategy`]s and keeps the first value that parses:
//!
//! 1. the whole trimmed text
//! 2. the first ```` ```json ```` fenced block
//! 3. the first plain fenced block
//! 4. the first flat object containing `"identified"` or `"name"`
//! 5. everything from the first `{` to the last `}`
//! 6. everything from the first `[` to the last `]`

use regex_lite::Regex;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::LazyLock;

// Regex to remove model-specific special tokens (gpt-oss, llama, etc.)
static SPECIAL_TOKENS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<\|[^|>]+\|>|\[/?INST\]|<</?SYS>>").expect("valid regex"));

// gpt-oss: <|channel|>analysis<|message|>...<|end|><|start|>assistant<|channel|>final<|message|>CONTENT
static FINAL_CONTENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<\|channel\|>final<\|message\|>(.*)$").expect("valid regex"));

static JSON_FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)```json\s*(.*?)```").expect("valid regex"));
static PLAIN_FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```[A-Za-z0-9_-]*\s*(.*?)```").expect("valid regex"));
static KEYED_OBJECT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\{[^{}]*"(?:identified|name)"\s*:[^{}]*\}"#).expect("valid regex")
});

static DEFAULT_PARSER: LazyLock<ResponseParser> = LazyLock::new(ResponseParser::new);

/// Remove model-specific special tokens that leak through from LLM output.
///
/// For gpt-oss style output only the content after the final-channel marker
/// is kept.
pub fn strip_special_tokens(raw: &str) -> String {
    if let Some(content) = FINAL_CONTENT_RE.captures(raw).and_then(|caps| caps.get(1)) {
        return SPECIAL_TOKENS_RE
            .replace_all(content.as_str().trim(), "")
            .to_string();
    }
    SPECIAL_TOKENS_RE.replace_all(raw, "").to_string()
}

/// Errors from [`extract_json_as`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("No JSON found in model output")]
    NoJson,
    #[error("JSON did not match the expected shape: {0}")]
    Shape(String),
}

/// One way of locating JSON inside model text.
pub trait ParseStrategy: Send + Sync {
    fn name(&self) -> &'static str;
    fn try_parse(&self, text: &str) -> Option<Value>;
}

/// Only objects and arrays count; a bare `true` or `42` is not a document.
fn parse_document(candidate: &str) -> Option<Value> {
    match serde_json::from_str::<Value>(candidate.trim()) {
        Ok(value @ (Value::Object(_) | Value::Array(_))) => Some(value),
        _ => None,
    }
}

fn between(text: &str, open: char, close: char) -> Option<&str> {
    let start = text.find(open)?;
    let end = text.rfind(close)?;
    (end > start).then(|| &text[start..=end])
}

pub struct WholeText;

impl ParseStrategy for WholeText {
    fn name(&self) -> &'static str {
        "whole_text"
    }

    fn try_parse(&self, text: &str) -> Option<Value> {
        parse_document(text)
    }
}

pub struct JsonFence;

impl ParseStrategy for JsonFence {
    fn name(&self) -> &'static str {
        "json_fence"
    }

    fn try_parse(&self, text: &str) -> Option<Value> {
        let caps = JSON_FENCE_RE.captures(text)?;
        parse_document(caps.get(1)?.as_str())
    }
}

pub struct PlainFence;

impl ParseStrategy for PlainFence {
    fn name(&self) -> &'static str {
        "plain_fence"
    }

    fn try_parse(&self, text: &str) -> Option<Value> {
        let caps = PLAIN_FENCE_RE.captures(text)?;
        parse_document(caps.get(1)?.as_str())
    }
}

/// The first brace-free object that mentions a discriminating key.
pub struct KeyedObject;

impl ParseStrategy for KeyedObject {
    fn name(&self) -> &'static str {
        "keyed_object"
    }

    fn try_parse(&self, text: &str) -> Option<Value> {
        KEYED_OBJECT_RE
            .find_iter(text)
            .find_map(|m| parse_document(m.as_str()))
    }
}

pub struct GreedyObject;

impl ParseStrategy for GreedyObject {
    fn name(&self) -> &'static str {
        "greedy_object"
    }

    fn try_parse(&self, text: &str) -> Option<Value> {
        parse_document(between(text, '{', '}')?)
    }
}

pub struct GreedyArray;

impl ParseStrategy for GreedyArray {
    fn name(&self) -> &'static str {
        "greedy_array"
    }

    fn try_parse(&self, text: &str) -> Option<Value> {
        parse_document(between(text, '[', ']')?)
    }
}

/// Ordered chain of strategies; the first success wins.
pub struct ResponseParser {
    strategies: Vec<Box<dyn ParseStrategy>>,
}

impl Default for ResponseParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseParser {
    pub fn new() -> Self {
        Self::with_strategies(vec![
            Box::new(WholeText),
            Box::new(JsonFence),
            Box::new(PlainFence),
            Box::new(KeyedObject),
            Box::new(GreedyObject),
            Box::new(GreedyArray),
        ])
    }

    /// Chain for list-shaped answers: arrays are tried before any single
    /// object, so an array of objects in prose is not cut down to its first
    /// element.
    pub fn for_lists() -> Self {
        Self::with_strategies(vec![
            Box::new(WholeText),
            Box::new(JsonFence),
            Box::new(PlainFence),
            Box::new(GreedyArray),
            Box::new(GreedyObject),
        ])
    }

    pub fn with_strategies(strategies: Vec<Box<dyn ParseStrategy>>) -> Self {
        Self { strategies }
    }

    pub fn extract_json(&self, raw: &str) -> Option<Value> {
        let cleaned = strip_special_tokens(raw);
        let text = cleaned.trim();
        if text.is_empty() {
            return None;
        }

        self.strategies.iter().find_map(|strategy| {
            let value = strategy.try_parse(text)?;
            tracing::trace!(strategy = strategy.name(), "Extracted JSON from model output");
            Some(value)
        })
    }

    pub fn extract_json_as<T: DeserializeOwned>(&self, raw: &str) -> Result<T, ParseError> {
        let value = self.extract_json(raw).ok_or(ParseError::NoJson)?;
        serde_json::from_value(value).map_err(|e| ParseError::Shape(e.to_string()))
    }
}

/// Extract the first JSON document from model text using the default chain.
pub fn extract_json(raw: &str) -> Option<Value> {
    DEFAULT_PARSER.extract_json(raw)
}

/// Extract and deserialize using the default chain.
pub fn extract_json_as<T: DeserializeOwned>(raw: &str) -> Result<T, ParseError> {
    DEFAULT_PARSER.extract_json_as(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    const MINIMAL: &str = r#"{"identified": true, "landmark_name": "Taj Mahal"}"#;

    #[test]
    fn fenced_json_in_prose() {
        assert_eq!(
            extract_json("Sure! ```json\n{\"a\":1}\n```"),
            Some(json!({"a": 1}))
        );
    }

    #[test]
    fn no_json_is_none() {
        assert_eq!(extract_json("no json here"), None);
        assert_eq!(extract_json(""), None);
        assert_eq!(extract_json("   "), None);
    }

    #[test]
    fn every_wrapping_yields_the_minimal_value() {
        let expected = serde_json::from_str::<Value>(MINIMAL).ok();
        let variants = [
            MINIMAL.to_string(),
            format!("```json\n{MINIMAL}\n```"),
            format!("```JSON\n{MINIMAL}\n```"),
            format!("```\n{MINIMAL}\n```"),
            format!("Here is what I found: {MINIMAL} Hope that helps!"),
            format!("Analysis:\n```json\n{MINIMAL}\n```\nLet me know."),
            format!("<|channel|>final<|message|>{MINIMAL}"),
            format!("[INST]{MINIMAL}[/INST]"),
        ];

        for variant in variants {
            assert_eq!(extract_json(&variant), expected, "variant: {variant}");
        }
    }

    #[test]
    fn keyed_object_beats_surrounding_braces() {
        let raw = r#"Use {curly} style. Result: {"name": "Shah Jahan", "era": "17th Century"} done {x}"#;
        assert_eq!(
            extract_json(raw),
            Some(json!({"name": "Shah Jahan", "era": "17th Century"}))
        );
    }

    #[test]
    fn nested_object_falls_through_to_greedy() {
        let raw = r#"Answer: {"persona": {"title": "Emperor"}, "score": 3} ok"#;
        assert_eq!(
            extract_json(raw),
            Some(json!({"persona": {"title": "Emperor"}, "score": 3}))
        );
    }

    #[test]
    fn arrays_are_found_in_prose() {
        let raw = r#"Here are some figures: [{"name": "Mumtaz Mahal"}, {"name": "Ustad Ahmad Lahauri"}]"#;
        let value = ResponseParser::for_lists()
            .extract_json(raw)
            .expect("array found");
        assert_eq!(value.as_array().map(Vec::len), Some(2));

        // The default chain prefers the first keyed object
        assert_eq!(extract_json(raw), Some(json!({"name": "Mumtaz Mahal"})));
    }

    #[test]
    fn bare_array_parses_with_default_chain() {
        let value = extract_json(r#"[{"name": "Ashoka"}]"#).expect("whole text");
        assert!(value.is_array());
    }

    #[test]
    fn malformed_text_never_panics() {
        for raw in [
            "{",
            "}{",
            "```json\n{broken\n```",
            "[[[",
            "{\"name\": }",
            "```",
            "\u{0}\u{1}{]",
            "ü{ß}",
        ] {
            assert_eq!(extract_json(raw), None, "input: {raw:?}");
        }
    }

    #[test]
    fn bare_scalars_are_not_documents() {
        assert_eq!(extract_json("true"), None);
        assert_eq!(extract_json("42"), None);
    }

    #[test]
    fn typed_extraction_reports_shape_errors() {
        #[derive(Debug, Deserialize)]
        struct Named {
            #[allow(dead_code)]
            name: String,
        }

        assert!(extract_json_as::<Named>(r#"{"name": "Cleopatra"}"#).is_ok());
        assert!(matches!(
            extract_json_as::<Named>(r#"{"title": "Pharaoh"}"#),
            Err(ParseError::Shape(_))
        ));
        assert_eq!(
            extract_json_as::<Named>("nothing").err(),
            Some(ParseError::NoJson)
        );
    }

    #[test]
    fn custom_chain_is_respected() {
        let parser = ResponseParser::with_strategies(vec![Box::new(JsonFence)]);
        assert_eq!(parser.extract_json(r#"{"a": 1}"#), None);
        assert_eq!(
            parser.extract_json("```json\n{\"a\": 1}\n```"),
            Some(json!({"a": 1}))
        );
    }

    #[test]
    fn gpt_oss_final_channel_is_kept() {
        let raw = "<|channel|>analysis<|message|>thinking<|end|><|start|>assistant<|channel|>final<|message|>Hello traveler";
        assert_eq!(strip_special_tokens(raw), "Hello traveler");
        assert_eq!(strip_special_tokens("[INST]Hi[/INST]"), "Hi");
    }
}
