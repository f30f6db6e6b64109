//! Resource record
//!
//! The services return resources as JSON objects whose shape differs between
//! API versions and deployments. Records are kept opaque: only the handful of
//! keys the CLI needs (`id`, `name`, `links`) are interpreted.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key holding transport metadata (self/bookmark URLs) that is never displayed
pub const LINKS_KEY: &str = "links";

/// An opaque resource returned by a service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// The resource ID, if the record carries a string `id`
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    /// The resource name, if the record carries a string `name`
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Keys of the record in ascending order
    pub fn sorted_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.0.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Remove the `links` entry
    pub fn strip_links(mut self) -> Self {
        self.0.remove(LINKS_KEY);
        self
    }

    /// Replace the value under `key` with `f(value)` if the key is present
    pub fn map_value(mut self, key: &str, f: impl FnOnce(&Value) -> Value) -> Self {
        if let Some(value) = self.0.get_mut(key) {
            *value = f(value);
        }
        self
    }

    /// Split the record into parallel key and value vectors sorted by key
    pub fn into_sorted_pairs(self) -> (Vec<String>, Vec<Value>) {
        let mut pairs: Vec<(String, Value)> = self.0.into_iter().collect();
        pairs.sort_by(|a, b| a.0.cmp(&b.0));
        pairs.into_iter().unzip()
    }
}
