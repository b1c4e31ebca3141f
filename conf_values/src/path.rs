//! Path-addressed access into nested value trees.
//!
//! A path is an ordered sequence of string keys; every non-terminal segment
//! must resolve to a mapping. Reads report absence and kind mismatch the same
//! way, as `None` — callers treat both as "not configured". Writes create
//! intermediate mappings on demand.

use serde_json::{Map, Value};

fn empty_map() -> Value {
    Value::Object(Map::new())
}

/// Resolve `path` against `root` and return the value it addresses.
///
/// Returns `None` when `root` is not a mapping, when any segment is absent,
/// or when an intermediate segment resolves to something other than a
/// mapping. An empty path addresses nothing.
#[must_use]
pub fn get_value<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let (last, intermediate) = path.split_last()?;
    let mut current = root.as_object()?;
    for segment in intermediate {
        current = current.get(*segment)?.as_object()?;
    }
    current.get(*last)
}

/// Read the number addressed by `path`.
///
/// Integer and floating-point representations both normalise to `f64`.
/// `None` when the path does not resolve or the terminal value is not a
/// number.
#[must_use]
pub fn get_number(root: &Value, path: &[&str]) -> Option<f64> {
    get_value(root, path)?.as_f64()
}

/// Read the string addressed by `path`.
#[must_use]
pub fn get_string<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    get_value(root, path)?.as_str()
}

/// Read the boolean addressed by `path`.
#[must_use]
pub fn get_bool(root: &Value, path: &[&str]) -> Option<bool> {
    get_value(root, path)?.as_bool()
}

/// Set the value addressed by `path`, creating intermediate mappings.
///
/// An intermediate segment holding a non-mapping value is replaced with a
/// fresh mapping; the write always lands. Last writer wins, intentionally.
/// A non-mapping `root` or an empty path leaves `root` untouched.
pub fn set_value(root: &mut Value, value: impl Into<Value>, path: &[&str]) {
    let Some((last, intermediate)) = path.split_last() else {
        return;
    };
    let Some(mut current) = root.as_object_mut() else {
        return;
    };
    for segment in intermediate {
        let slot = current
            .entry((*segment).to_owned())
            .or_insert_with(empty_map);
        if !slot.is_object() {
            *slot = empty_map();
        }
        let Some(next) = slot.as_object_mut() else {
            return;
        };
        current = next;
    }
    current.insert((*last).to_owned(), value.into());
}

/// Store an ordered sequence of strings at `path`.
///
/// The items land as an array of string values, matching what a decoder
/// would have produced for the same document.
pub fn set_string_slice<S: AsRef<str>>(root: &mut Value, items: &[S], path: &[&str]) {
    let values: Vec<Value> = items.iter().map(|s| Value::from(s.as_ref())).collect();
    set_value(root, Value::Array(values), path);
}

/// Remove the terminal key addressed by `path` from its parent mapping.
///
/// Silent no-op when any segment fails to resolve through mappings.
/// Intermediate mappings left empty by the removal are not pruned.
pub fn delete_value(root: &mut Value, path: &[&str]) {
    let Some((last, intermediate)) = path.split_last() else {
        return;
    };
    let Some(mut current) = root.as_object_mut() else {
        return;
    };
    for segment in intermediate {
        let Some(next) = current.get_mut(*segment).and_then(Value::as_object_mut) else {
            return;
        };
        current = next;
    }
    current.remove(*last);
}
