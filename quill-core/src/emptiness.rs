//! Presence and emptiness checks over loosely typed values.

use std::collections::{BTreeMap, HashMap};

use serde_json::{Map, Value};

/// `false` only for JSON `null`.
pub fn non_nullable(value: &Value) -> bool {
    !value.is_null()
}

/// Values that can be "present but empty".
///
/// Absent values, empty strings and empty objects are empty. Arrays are
/// never considered empty.
pub trait NotEmpty {
    /// `true` when the value is present and holds something.
    fn is_not_empty(&self) -> bool;
}

/// Free-function form of [`NotEmpty::is_not_empty`].
pub fn not_empty<V: NotEmpty + ?Sized>(value: &V) -> bool {
    value.is_not_empty()
}

impl NotEmpty for Value {
    fn is_not_empty(&self) -> bool {
        match self {
            Value::Null => false,
            Value::String(s) => !s.is_empty(),
            Value::Object(map) => !map.is_empty(),
            Value::Bool(_) | Value::Number(_) | Value::Array(_) => true,
        }
    }
}

impl NotEmpty for str {
    fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }
}

impl NotEmpty for String {
    fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: NotEmpty> NotEmpty for Option<T> {
    fn is_not_empty(&self) -> bool {
        self.as_ref().is_some_and(|value| value.is_not_empty())
    }
}

impl<T: NotEmpty + ?Sized> NotEmpty for &T {
    fn is_not_empty(&self) -> bool {
        (**self).is_not_empty()
    }
}

impl NotEmpty for Map<String, Value> {
    fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }
}

impl<K, V, S> NotEmpty for HashMap<K, V, S> {
    fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }
}

impl<K, V> NotEmpty for BTreeMap<K, V> {
    fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }
}
