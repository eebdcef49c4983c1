//! Bounded diagnostic value summaries
//!
//! Formats arbitrary runtime values into short strings for failure
//! messages. Summaries are ephemeral: computed on demand, used only for
//! human consumption, never persisted or compared.

use serde::Serialize;
use serde_json::Value;

/// Maximum number of array elements / object keys shown in a sample.
const SAMPLE_ITEMS: usize = 3;

/// Maximum number of characters shown from a string value.
const SAMPLE_CHARS: usize = 12;

/// Placeholder produced when a value cannot be converted for diagnostics.
pub const UNSERIALIZABLE: &str = "<unserializable>";

/// Summarize a diagnostic value into a short, bounded description.
///
/// Total over all inputs: always returns a string, never panics.
///
/// # Formats
/// - `null` → `null`
/// - arrays → `array(len=N, sample=[e0, e1, e2]…)` (ellipsis when truncated)
/// - objects → `object(keys=[k0, k1, k2]…)` (first keys in insertion order)
/// - strings → `string(len=N, sample="first12chars…")`
/// - numbers/booleans → `number(42)` / `bool(true)`
#[must_use]
pub fn summarize(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("bool({b})"),
        Value::Number(n) => format!("number({n})"),
        Value::String(s) => {
            let (sample, truncated) = clip(s);
            format!(
                "string(len={}, sample=\"{}{}\")",
                s.chars().count(),
                sample,
                ellipsis(truncated),
            )
        }
        Value::Array(items) => {
            let sample: Vec<String> = items.iter().take(SAMPLE_ITEMS).map(literal).collect();
            format!(
                "array(len={}, sample=[{}]{})",
                items.len(),
                sample.join(", "),
                ellipsis(items.len() > SAMPLE_ITEMS),
            )
        }
        Value::Object(map) => {
            let keys: Vec<&str> = map.keys().take(SAMPLE_ITEMS).map(String::as_str).collect();
            format!(
                "object(keys=[{}]{})",
                keys.join(", "),
                ellipsis(map.len() > SAMPLE_ITEMS),
            )
        }
    }
}

/// Summarize an optional value; an absent value reads as `undefined`.
#[must_use]
pub fn summarize_opt(value: Option<&Value>) -> String {
    value.map_or_else(|| "undefined".to_string(), summarize)
}

/// Convert an arbitrary value into a diagnostic [`Value`].
///
/// The conversion is lossy by design: a value whose `Serialize` impl
/// errors degrades to the [`UNSERIALIZABLE`] placeholder instead of
/// propagating. Diagnostics must never take down the code they describe.
#[must_use]
pub fn capture<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_else(|_| Value::String(UNSERIALIZABLE.to_string()))
}

/// Compact literal rendering for a sampled element.
///
/// Scalars render verbatim, strings quoted and clipped, nested
/// containers collapse to a marker so samples stay bounded.
fn literal(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => {
            let (sample, truncated) = clip(s);
            format!("\"{}{}\"", sample, ellipsis(truncated))
        }
        Value::Array(_) => "[…]".to_string(),
        Value::Object(_) => "{…}".to_string(),
    }
}

/// Take the first [`SAMPLE_CHARS`] characters; reports whether anything
/// was cut. Operates on chars so truncation never splits a code point.
fn clip(s: &str) -> (String, bool) {
    let sample: String = s.chars().take(SAMPLE_CHARS).collect();
    let truncated = s.chars().count() > SAMPLE_CHARS;
    (sample, truncated)
}

fn ellipsis(truncated: bool) -> &'static str {
    if truncated {
        "…"
    } else {
        ""
    }
}
