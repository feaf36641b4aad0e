//! Response normalizer — best-effort text extraction from provider
//! payloads.
//!
//! The provider's response shape is not contractually fixed. Three
//! variants are treated as officially supported: a bare string, an
//! object carrying a textual `content` field, and a non-empty array
//! whose first element carries one. Anything else falls back to a
//! caller-supplied default with a single diagnostic — never an error.

use serde_json::Value;
use tracing::warn;

/// Recognized provider response shapes, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResponseShape<'a> {
    /// The value is itself text.
    Text(&'a str),
    /// An object exposing a textual `content` field.
    Message(&'a str),
    /// A non-empty array whose first element exposes `content`.
    Batch(&'a str),
    /// None of the above.
    Unrecognized,
}

fn classify(value: &Value) -> ResponseShape<'_> {
    if let Some(text) = value.as_str() {
        return ResponseShape::Text(text);
    }
    if let Some(content) = value.get("content").and_then(Value::as_str) {
        return ResponseShape::Message(content);
    }
    if let Some(first) = value.as_array().and_then(|items| items.first()) {
        if let Some(content) = first.get("content").and_then(Value::as_str) {
            return ResponseShape::Batch(content);
        }
    }
    ResponseShape::Unrecognized
}

/// Extract the textual payload from a provider response value.
///
/// Returns `default` (and emits one `warn!` diagnostic) when the
/// shape is unrecognized. Unrecognized shapes are a recovered
/// condition, not a fatal one — the placeholder simply appears in the
/// transcript at that turn's position.
pub fn extract_content(value: &Value, default: &str) -> String {
    match classify(value) {
        ResponseShape::Text(text) => text.to_string(),
        ResponseShape::Message(content) => content.to_string(),
        ResponseShape::Batch(content) => content.to_string(),
        ResponseShape::Unrecognized => {
            warn!(payload = %value, "unexpected response shape; substituting default");
            default.to_string()
        }
    }
}
