use serde_json::Value;

/// One way of reading a field out of a provider payload.
pub type Lookup<T> = fn(&Value) -> Option<T>;

/// Evaluate lookups in order; the first one that yields a value wins.
pub fn first_present<T>(source: &Value, strategies: &[Lookup<T>]) -> Option<T> {
    strategies.iter().find_map(|lookup| lookup(source))
}

/// Non-empty string at a JSON pointer.
pub fn text_at(source: &Value, pointer: &str) -> Option<String> {
    source
        .pointer(pointer)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}
