//! JSON-backed implementations of the host capabilities.

use crate::provider::data_source::{ConfigSource, OutputSink};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;

/*-------------------------------------------------------------------------------------------------
  JSON Config
-------------------------------------------------------------------------------------------------*/

/// Configuration held as a JSON object, e.g. `{"apikey": "...", "id": "dummy-success"}`.
///
/// Non-string and `null` values are treated as not configured.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsonConfig(Map<String, Value>);

impl JsonConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a string attribute.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), Value::String(value.into()));
        self
    }
}

impl From<Map<String, Value>> for JsonConfig {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl ConfigSource for JsonConfig {
    fn get_string(&self, key: &str) -> Option<String> {
        self.0
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}

/*-------------------------------------------------------------------------------------------------
  JSON State
-------------------------------------------------------------------------------------------------*/

/// Computed outputs and identity of a read.
///
/// Set-valued attributes keep the first occurrence of each value, in the order received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JsonState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub attributes: Map<String, Value>,
}

impl JsonState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Get a set-valued attribute as strings.
    pub fn get_string_set(&self, key: &str) -> Option<Vec<&str>> {
        self.attributes
            .get(key)
            .and_then(Value::as_array)
            .map(|values| values.iter().filter_map(Value::as_str).collect())
    }
}

impl OutputSink for JsonState {
    fn set_string(&mut self, key: &str, value: &str) {
        self.attributes
            .insert(key.to_string(), Value::String(value.to_string()));
    }

    fn set_string_set(&mut self, key: &str, values: &[String]) {
        let mut seen: HashSet<&str> = HashSet::new();
        let unique: Vec<Value> = values
            .iter()
            .filter(|value| seen.insert(value.as_str()))
            .map(|value| Value::String(value.clone()))
            .collect();
        self.attributes.insert(key.to_string(), Value::Array(unique));
    }

    fn set_id(&mut self, id: &str) {
        self.id = Some(id.to_string());
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
