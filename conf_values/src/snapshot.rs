//! Deep-copy isolation via the canonical interchange encoding.

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

/// Deep-copy `value` by round-tripping it through its JSON encoding.
///
/// The result shares no mutable state with the input: mutating one side
/// never affects the other. Ordinary configuration values (mappings,
/// sequences, strings, numbers, booleans) round-trip losslessly.
///
/// # Panics
///
/// Panics when the value fails to encode or its encoding fails to decode. A
/// partial copy would silently break the isolation guarantees callers rely
/// on, so the failure is unrecoverable by contract.
#[must_use]
pub fn deep_copy<T>(value: &T) -> T
where
    T: Serialize + DeserializeOwned,
{
    let encoded = match serde_json::to_string(value) {
        Ok(encoded) => encoded,
        Err(err) => panic!("deep copy failed to encode value: {err}"),
    };
    match serde_json::from_str(&encoded) {
        Ok(copy) => copy,
        Err(err) => panic!("deep copy failed to decode value: {err}"),
    }
}

/// Deep-copy a generic value tree.
///
/// # Panics
///
/// See [`deep_copy`]; a [`Value`] tree itself always round-trips, but the
/// contract is shared.
#[must_use]
pub fn deep_copy_values(values: &Value) -> Value {
    deep_copy(values)
}
