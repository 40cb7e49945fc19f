// Job Item & Worker Options Domain Model

use super::constants::{JID_KEY, UNIQUE_DIGEST_KEY};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Per-invocation job payload
///
/// A string-keyed JSON object. Only `unique`, `lock` and
/// `log_duplicate_payload` matter for lock resolution; every other key is
/// carried along untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobItem(Map<String, Value>);

impl JobItem {
    /// Build from a JSON value; `None` unless the value is an object
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self(fields)),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn jid(&self) -> Option<&str> {
        self.get(JID_KEY).and_then(Value::as_str)
    }

    pub fn unique_digest(&self) -> Option<&str> {
        self.get(UNIQUE_DIGEST_KEY).and_then(Value::as_str)
    }

    pub(crate) fn is_truthy(&self, key: &str) -> bool {
        is_truthy(self.get(key))
    }
}

/// Options declared per worker type
///
/// Same key space as [`JobItem`]; represents the defaults for every job of
/// that worker type. Keys are always strings: building from arbitrary key
/// types stringifies them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkerOptions(Map<String, Value>);

impl WorkerOptions {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from a JSON value; `None` unless the value is an object
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(options) => Some(Self(options)),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn is_truthy(&self, key: &str) -> bool {
        is_truthy(self.get(key))
    }
}

impl<K, V> FromIterator<(K, V)> for WorkerOptions
where
    K: ToString,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.to_string(), value.into()))
                .collect(),
        )
    }
}

/// Present and neither `null` nor `false`
pub(crate) fn is_truthy(value: Option<&Value>) -> bool {
    !matches!(value, None | Some(Value::Null) | Some(Value::Bool(false)))
}

/// Textual rendering of a value: strings verbatim, everything else as JSON
pub(crate) fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(None));
        assert!(!is_truthy(Some(&Value::Null)));
        assert!(!is_truthy(Some(&json!(false))));
        assert!(is_truthy(Some(&json!(true))));
        assert!(is_truthy(Some(&json!("until_executed"))));
        assert!(is_truthy(Some(&json!(""))));
        assert!(is_truthy(Some(&json!(0))));
    }

    #[test]
    fn test_value_text() {
        assert_eq!(value_text(&json!("true")), "true");
        assert_eq!(value_text(&json!(true)), "true");
        assert_eq!(value_text(&json!(42)), "42");
    }

    #[test]
    fn test_worker_options_stringifies_keys() {
        #[derive(Debug)]
        struct Key(&'static str);
        impl std::fmt::Display for Key {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.0)
            }
        }

        let options: WorkerOptions = vec![(Key("unique"), json!("until_executed"))]
            .into_iter()
            .collect();

        assert_eq!(options.get("unique"), Some(&json!("until_executed")));
    }

    #[test]
    fn test_job_item_accessors() {
        let item = JobItem::from_value(json!({
            "jid": "abc123",
            "unique_digest": "uniquejobs:digest",
            "args": [1, 2]
        }))
        .unwrap();

        assert_eq!(item.jid(), Some("abc123"));
        assert_eq!(item.unique_digest(), Some("uniquejobs:digest"));
        assert!(item.contains_key("args"));
        assert!(JobItem::from_value(json!([1, 2])).is_none());
    }
}
