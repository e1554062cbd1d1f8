use serde_json::Value;

/// Whether a string's character count falls inside `[min, max]`
pub fn length_in(s: &str, min: usize, max: usize) -> bool {
    let len = s.chars().count();
    len >= min && len <= max
}

/// Extract a string field from a loose JSON body, enforcing length bounds.
///
/// Returns `None` when the field is missing, not a string, or out of range.
/// Handlers take `Json<Value>` rather than typed structs so that a
/// wrong-typed field is a validation failure in the response envelope, not a
/// 4xx from the extractor.
pub fn string_field<'a>(body: &'a Value, key: &str, min: usize, max: usize) -> Option<&'a str> {
    body.get(key)
        .and_then(Value::as_str)
        .filter(|s| length_in(s, min, max))
}
