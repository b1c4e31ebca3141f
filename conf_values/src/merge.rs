//! Recursive overlay of override values onto a destination tree.

use serde_json::Value;
use serde_json::map::Entry;

/// Merge `overrides` into `dest` in place.
///
/// Keys absent from `dest` are moved in from `overrides`. When both sides
/// hold a mapping the merge recurses; every other pairing is resolved by
/// wholesale replacement with the override value, so sequences and scalars
/// are atomic and the rightmost source wins at every leaf.
///
/// A `dest` that is not a mapping (including `Value::Null`) is left
/// untouched, as is a `dest` paired with non-mapping `overrides`.
pub fn merge_values(dest: &mut Value, overrides: Value) {
    let Some(dest_map) = dest.as_object_mut() else {
        return;
    };
    let Value::Object(overrides) = overrides else {
        return;
    };
    for (key, incoming) in overrides {
        match dest_map.entry(key) {
            Entry::Occupied(mut slot) => {
                if slot.get().is_object() && incoming.is_object() {
                    merge_values(slot.get_mut(), incoming);
                } else {
                    slot.insert(incoming);
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(incoming);
            }
        }
    }
}
