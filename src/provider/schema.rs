//! Attribute schema declarations for data sources.
//!
//! A schema tells the host which attributes a data source reads from configuration and which it
//! computes. Only the handful of shapes the `ipsfor` data source needs are modeled.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The type of an attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    /// A string value.
    String,
    /// A set of unique values of a single type.
    Set(Box<AttributeType>),
}

impl AttributeType {
    /// Create a set type.
    pub fn set(element_type: AttributeType) -> Self {
        Self::Set(Box::new(element_type))
    }
}

/// Describes how an attribute can be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AttributeFlags {
    pub required: bool,
    pub optional: bool,
    /// Set by the data source, never by configuration.
    pub computed: bool,
    /// Hidden from logs and rendered output.
    pub sensitive: bool,
}

impl AttributeFlags {
    pub fn required() -> Self {
        Self {
            required: true,
            ..Default::default()
        }
    }

    pub fn optional() -> Self {
        Self {
            optional: true,
            ..Default::default()
        }
    }

    pub fn computed() -> Self {
        Self {
            computed: true,
            ..Default::default()
        }
    }

    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }
}

/// Describes a single attribute in a schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    #[serde(rename = "type")]
    pub attr_type: AttributeType,
    #[serde(flatten)]
    pub flags: AttributeFlags,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Attribute {
    pub fn new(attr_type: AttributeType, flags: AttributeFlags) -> Self {
        Self {
            attr_type,
            flags,
            description: None,
        }
    }

    pub fn required_string() -> Self {
        Self::new(AttributeType::String, AttributeFlags::required())
    }

    pub fn optional_string() -> Self {
        Self::new(AttributeType::String, AttributeFlags::optional())
    }

    pub fn computed_string() -> Self {
        Self::new(AttributeType::String, AttributeFlags::computed())
    }

    /// Create a computed set-of-strings attribute.
    pub fn computed_string_set() -> Self {
        Self::new(
            AttributeType::set(AttributeType::String),
            AttributeFlags::computed(),
        )
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn sensitive(mut self) -> Self {
        self.flags = self.flags.sensitive();
        self
    }
}

/// The attributes of a data source, keyed by name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Schema {
    pub attributes: BTreeMap<String, Attribute>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute to the schema.
    pub fn with_attribute(mut self, name: impl Into<String>, attribute: Attribute) -> Self {
        self.attributes.insert(name.into(), attribute);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    /// Names of the attributes that configuration must supply.
    pub fn required(&self) -> impl Iterator<Item = &str> {
        self.attributes
            .iter()
            .filter(|(_, attribute)| attribute.flags.required)
            .map(|(name, _)| name.as_str())
    }

    /// Names of the attributes the data source computes.
    pub fn computed(&self) -> impl Iterator<Item = &str> {
        self.attributes
            .iter()
            .filter(|(_, attribute)| attribute.flags.computed)
            .map(|(name, _)| name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_and_computed() {
        let schema = Schema::new()
            .with_attribute("name", Attribute::required_string())
            .with_attribute("owner", Attribute::optional_string())
            .with_attribute("ips", Attribute::computed_string_set());

        assert_eq!(schema.required().collect::<Vec<_>>(), vec!["name"]);
        assert_eq!(schema.computed().collect::<Vec<_>>(), vec!["ips"]);
        assert!(schema.attribute("owner").unwrap().flags.optional);
        assert!(schema.attribute("missing").is_none());
    }

    #[test]
    fn test_serialize_attribute() {
        let attribute = Attribute::required_string()
            .sensitive()
            .with_description("API key");
        let value = serde_json::to_value(&attribute).unwrap();

        assert_eq!(value["type"], "string");
        assert_eq!(value["required"], true);
        assert_eq!(value["sensitive"], true);
        assert_eq!(value["description"], "API key");
    }

    #[test]
    fn test_serialize_set_type() {
        let value = serde_json::to_value(AttributeType::set(AttributeType::String)).unwrap();
        assert_eq!(value, serde_json::json!({ "set": "string" }));
    }
}
