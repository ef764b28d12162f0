//! Defaulting lookups into untyped JSON responses.
//!
//! Both eBay search APIs return loosely shaped JSON where any level may be
//! missing. A path is a slice of [`Step`]s; walking stops at the first missing
//! key, out-of-range index or type mismatch and the caller gets the documented
//! default instead of an error.

use serde_json::Value;

/// One hop into a JSON document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Object member by name.
    Key(&'static str),
    /// Array element by position.
    Index(usize),
}

/// Walks `path` from `value`, returning `None` as soon as a hop is missing.
pub fn lookup<'a>(value: &'a Value, path: &[Step]) -> Option<&'a Value> {
    path.iter().try_fold(value, |current, step| match step {
        Step::Key(key) => current.get(*key),
        Step::Index(idx) => current.get(*idx),
    })
}

/// Returns the text at `path`, or `""` when the path is missing.
///
/// Strings are returned as-is, numbers and booleans as their JSON text. A
/// single-element array around a scalar is unwrapped, since the Finding API
/// wraps most scalars that way. Anything else (null, objects, longer arrays)
/// yields `""`.
pub fn text_at(value: &Value, path: &[Step]) -> String {
    lookup(value, path).map(scalar_text).unwrap_or_default()
}

/// Returns the first non-empty [`text_at`] among `paths`, or `""`.
pub fn first_text_at(value: &Value, paths: &[&[Step]]) -> String {
    paths.iter().map(|path| text_at(value, path)).find(|s| !s.is_empty()).unwrap_or_default()
}

/// Returns a clone of the array at `path`, or an empty vec when the path is
/// missing or does not point at an array.
pub fn array_at(value: &Value, path: &[Step]) -> Vec<Value> {
    lookup(value, path).and_then(Value::as_array).cloned().unwrap_or_default()
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(items) if items.len() == 1 && !items[0].is_array() => scalar_text(&items[0]),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use Step::{Index, Key};

    #[test]
    fn test_lookup_nested() {
        let value = json!({"a": [{"b": "hit"}]});
        assert_eq!(lookup(&value, &[Key("a"), Index(0), Key("b")]), Some(&json!("hit")));
    }

    #[test]
    fn test_lookup_empty_path_returns_root() {
        let value = json!({"a": 1});
        assert_eq!(lookup(&value, &[]), Some(&value));
    }

    #[test]
    fn test_lookup_missing_levels() {
        let value = json!({"a": []});
        assert!(lookup(&value, &[Key("missing")]).is_none());
        assert!(lookup(&value, &[Key("a"), Index(0)]).is_none());
        assert!(lookup(&value, &[Key("a"), Key("b")]).is_none());
        assert!(lookup(&json!("scalar"), &[Key("a")]).is_none());
    }

    #[test]
    fn test_text_at_defaults_to_empty() {
        let value = json!({});
        assert_eq!(text_at(&value, &[Key("title")]), "");
        assert_eq!(text_at(&value, &[Key("price"), Key("value")]), "");
    }

    #[test]
    fn test_text_at_scalars() {
        let value = json!({"s": "x", "n": 9.5, "i": 3, "b": true, "z": null, "o": {"k": 1}});
        assert_eq!(text_at(&value, &[Key("s")]), "x");
        assert_eq!(text_at(&value, &[Key("n")]), "9.5");
        assert_eq!(text_at(&value, &[Key("i")]), "3");
        assert_eq!(text_at(&value, &[Key("b")]), "true");
        assert_eq!(text_at(&value, &[Key("z")]), "");
        assert_eq!(text_at(&value, &[Key("o")]), "");
    }

    #[test]
    fn test_text_at_unwraps_single_element_array() {
        let value = json!({"location": ["UK"], "many": ["a", "b"], "nested": [["x"]]});
        assert_eq!(text_at(&value, &[Key("location")]), "UK");
        assert_eq!(text_at(&value, &[Key("many")]), "");
        assert_eq!(text_at(&value, &[Key("nested")]), "");
    }

    #[test]
    fn test_first_text_at() {
        let value = json!({"title": ["plain"]});
        let wrapped: &[Step] = &[Key("title"), Index(0), Key("value")];
        let bare: &[Step] = &[Key("title"), Index(0)];
        assert_eq!(first_text_at(&value, &[wrapped, bare]), "plain");
        assert_eq!(first_text_at(&json!({"title": [{"value": "obj"}]}), &[wrapped, bare]), "obj");
        assert_eq!(first_text_at(&json!({}), &[wrapped, bare]), "");
    }

    #[test]
    fn test_array_at() {
        let value = json!({"items": [1, 2], "scalar": 5});
        assert_eq!(array_at(&value, &[Key("items")]), vec![json!(1), json!(2)]);
        assert!(array_at(&value, &[Key("scalar")]).is_empty());
        assert!(array_at(&value, &[Key("missing")]).is_empty());
    }
}
