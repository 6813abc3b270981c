//! Raw value helpers shared by validators and the argument builder.

/// Strict boolean: only `true` and `false` are accepted.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Split a list value on `sep`, trimming items.
///
/// A single trailing separator is tolerated (`1,2,` is two items) and an
/// empty value is an empty list.
pub fn split_list(value: &str, sep: char) -> Vec<&str> {
    let value = value.trim();
    if value.is_empty() {
        return Vec::new();
    }
    let value = value.strip_suffix(sep).unwrap_or(value);
    value.split(sep).map(str::trim).collect()
}
