//! Property selection over JSON objects.

use serde_json::{Map, Value};

/// Copies the listed properties of `object` into a new map.
///
/// Keys missing from `object` are skipped, as are keys whose value equals
/// one of `exclude_values`.
pub fn pick_props<S: AsRef<str>>(
    object: &Map<String, Value>,
    props: &[S],
    exclude_values: &[Value],
) -> Map<String, Value> {
    let mut picked = Map::new();
    for prop in props {
        let prop = prop.as_ref();
        let Some(value) = object.get(prop) else {
            continue;
        };
        if exclude_values.contains(value) {
            continue;
        }
        picked.insert(prop.to_string(), value.clone());
    }
    picked
}
