//! Shallow structural checks run on raw JSON before it is read into a record.
//!
//! Each predicate only checks that the identifying keys are present. Their
//! types are not looked at; that is left to deserialization.

use serde_json::Value;

/// Decides whether an untyped record is acceptable as a given resource.
pub trait Validator: Send + Sync {
    fn validate(&self, value: &Value) -> bool;
}

impl<F> Validator for F
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    fn validate(&self, value: &Value) -> bool {
        self(value)
    }
}

/// True when `value` is an object carrying every key in `keys`.
pub fn has_keys(value: &Value, keys: &[&str]) -> bool {
    value
        .as_object()
        .is_some_and(|obj| keys.iter().all(|k| obj.contains_key(*k)))
}

pub fn is_valid_space(value: &Value) -> bool {
    has_keys(value, &["id", "name", "statuses"])
}

pub fn is_valid_folder(value: &Value) -> bool {
    has_keys(value, &["id", "name", "space", "task_count"])
}

pub fn is_valid_list(value: &Value) -> bool {
    has_keys(value, &["id", "name"])
}

pub fn is_valid_task(value: &Value) -> bool {
    has_keys(value, &["id", "name", "date_created"])
}

pub fn is_valid_time_entry(value: &Value) -> bool {
    has_keys(value, &["id", "user", "start"])
}
