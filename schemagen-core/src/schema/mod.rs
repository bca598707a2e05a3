//! The schema document produced by [`SchemaGenerator`](crate::SchemaGenerator)
//!
//! The document follows the dialect consumed by the Java model generator: plain JSON Schema
//! keywords plus `javaType`, `existingJavaType`, `javaInterfaces` and `javaOmitEmpty` hints.
//! Map values are serialized under the `additionalProperty` key to keep them apart from the
//! boolean `additionalProperties` of objects; [`render`] rewrites the key on output.

mod render;
pub use render::{fix_additional_properties, render};

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Value of the `$schema` keyword
pub const SCHEMA_DIALECT: &str = "http://json-schema.org/schema#";

/// Prefix of the schema `id`
pub const SCHEMA_ID_BASE: &str = "http://fabric8.io/fabric8/v2/";

/// Prefix of every `$ref`
pub const DEFINITIONS_REF: &str = "#/definitions/";

/// The root schema document
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct JsonSchema {
    /// The `id` keyword
    pub id: String,
    /// The `$schema` keyword
    #[serde(rename = "$schema")]
    pub schema: String,
    /// Every type reachable from the root, keyed by qualified name
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub definitions: BTreeMap<String, PropertyDescriptor>,
    /// Keywords describing the root itself
    #[serde(flatten)]
    pub descriptor: Descriptor,
    /// Properties of the root aggregate
    #[serde(flatten)]
    pub object: ObjectDescriptor,
    /// Definitions keyed by resource name, only kept for validation schemas
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<BTreeMap<String, PropertyDescriptor>>,
}

impl JsonSchema {
    /// Drop the resource list from the document
    pub fn clear_resources(&mut self) {
        self.resources = None;
    }
}

/// The possible types of values in schema documents
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum InstanceType {
    /// Represents the JSON boolean type.
    Boolean,
    /// Represents the JSON object type.
    Object,
    /// Represents the JSON array type.
    Array,
    /// Represents the JSON number type (floating point).
    Number,
    /// Represents the JSON string type.
    String,
    /// Represents the JSON integer type.
    Integer,
}

/// Annotation and validation keywords shared by every descriptor
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct Descriptor {
    /// The `type` keyword
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<InstanceType>,
    /// The `description` keyword
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The `default` keyword
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// The `enum` keyword
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,
}

/// Keywords of object definitions
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ObjectDescriptor {
    /// The `properties` keyword, in field declaration order
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, PropertyDescriptor>,
    /// The `required` keyword, in field declaration order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    /// The `additionalProperties` keyword
    pub additional_properties: bool,
}

impl ObjectDescriptor {
    /// An object without properties that accepts unknown fields
    pub fn open() -> Self {
        Self {
            additional_properties: true,
            ..Self::default()
        }
    }

    /// Add `name` to the required list unless already present
    pub fn require(&mut self, name: &str) {
        if !self.required.iter().any(|r| r == name) {
            self.required.push(name.to_string());
        }
    }
}

/// Keywords of array properties
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ArrayDescriptor {
    /// The `items` keyword
    pub items: Box<PropertyDescriptor>,
}

/// Keywords of map properties
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MapDescriptor {
    /// Schema of the map values, renamed to `additionalProperties` by [`render`]
    #[serde(rename = "additionalProperty")]
    pub value: Box<PropertyDescriptor>,
}

/// Hints for the Java model generator
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct JavaDescriptor {
    /// Java type to generate for the definition or reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub java_type: Option<String>,
    /// Existing Java type to use instead of generating one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub existing_java_type: Option<String>,
    /// Interfaces the generated class implements
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub java_interfaces: Vec<String>,
    /// Leave empty collections out of serialized output
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub java_omit_empty: bool,
}

/// A property, reference or definition
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct PropertyDescriptor {
    /// Common keywords
    #[serde(flatten)]
    pub descriptor: Descriptor,
    /// The `$ref` keyword
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Object keywords
    #[serde(flatten)]
    pub object: Option<ObjectDescriptor>,
    /// Array keywords
    #[serde(flatten)]
    pub array: Option<ArrayDescriptor>,
    /// Map keywords
    #[serde(flatten)]
    pub map: Option<MapDescriptor>,
    /// Java generator hints
    #[serde(flatten)]
    pub java: JavaDescriptor,
}

impl PropertyDescriptor {
    /// A property of the given JSON type
    pub fn typed(instance_type: InstanceType) -> Self {
        Self {
            descriptor: Descriptor {
                instance_type: Some(instance_type),
                ..Descriptor::default()
            },
            ..Self::default()
        }
    }

    /// A reference to a definition
    pub fn reference(name: &str, java_type: String) -> Self {
        Self {
            reference: Some(format!("{DEFINITIONS_REF}{name}")),
            java: JavaDescriptor {
                java_type: Some(java_type),
                ..JavaDescriptor::default()
            },
            ..Self::default()
        }
    }

    /// Attach a description
    #[must_use]
    pub fn described(mut self, description: Option<&str>) -> Self {
        if let Some(description) = description {
            self.descriptor.description = Some(description.to_string());
        }
        self
    }

    /// Use an existing Java type instead of a generated one
    #[must_use]
    pub fn existing_java_type(mut self, java_type: impl Into<String>) -> Self {
        self.java.existing_java_type = Some(java_type.into());
        self
    }

    /// Set the Java type to generate
    #[must_use]
    pub fn java_type(mut self, java_type: impl Into<String>) -> Self {
        self.java.java_type = Some(java_type.into());
        self
    }

    /// Restrict the value to a single constant that is also its default
    pub fn pin(&mut self, value: &str) {
        self.descriptor.default = Some(value.into());
        self.descriptor.enum_values = Some(vec![value.into()]);
    }
}
