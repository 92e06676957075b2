//! Markup stripping for model-generated text.
//!
//! Models asked for plain text still emit emphasis and heading markers now and
//! then. [`clean`] walks any JSON value and scrubs every string leaf; object
//! keys and non-string leaves pass through untouched.

use serde_json::Value;

/// Markers removed outright, longest first.
const EMPHASIS_MARKERS: [&str; 5] = ["***", "**", "*", "##", "#"];

/// Bullet marker, removed once whitespace is normalised.
const LIST_MARKER: &str = "- ";

/// Strip markup from a single string and normalise its whitespace.
///
/// Whitespace is collapsed before the list marker is removed so that a tab or
/// newline after a dash cannot turn into a fresh `"- "` on a second pass; the
/// result is therefore stable under repeated cleaning.
pub fn clean_text(text: &str) -> String {
    let mut cleaned = text.to_string();
    for marker in EMPHASIS_MARKERS {
        cleaned = cleaned.replace(marker, "");
    }

    let collapsed = collapse_whitespace(&cleaned);
    collapse_whitespace(&collapsed.replace(LIST_MARKER, ""))
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Recursively clean every string leaf of a JSON value.
pub fn clean(value: Value) -> Value {
    match value {
        Value::String(text) => Value::String(clean_text(&text)),
        Value::Array(items) => Value::Array(items.into_iter().map(clean).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key, clean(value)))
                .collect(),
        ),
        other => other,
    }
}
