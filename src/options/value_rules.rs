use serde_json::Value;

/// Truthiness rule used by the defaults merge.
///
/// `null`, `false`, `0`, NaN and the empty string are falsy; arrays and
/// objects are always truthy, even when empty. A falsy option value is
/// replaced by the descriptor default, exactly like an absent one.
#[must_use]
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64().is_none_or(|n| n == 0.0 || n.is_nan()),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Presence rule: `null` counts as absent everywhere in the builder.
#[must_use]
pub fn is_defined(value: &Value) -> bool {
    !value.is_null()
}

/// Whether an options node carries its own usable `type` discriminator.
///
/// Only a non-empty string counts; the recursion keeps the parent path
/// unchanged for such nodes so sibling same-path lookups stay consistent.
#[must_use]
pub fn has_explicit_type(value: &Value) -> bool {
    matches!(value.get("type"), Some(Value::String(name)) if !name.is_empty())
}
