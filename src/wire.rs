//! Wire-level schema records.
//!
//! These mirror the schema messages of the plugin protocol but keep attribute
//! types structured, so they can be compared and inspected before being
//! lowered into the protobuf messages in [`crate::generated`]. Records are
//! built by [`crate::convert`] and never mutated afterwards.

use serde::ser::{Serialize, Serializer};
use std::collections::BTreeMap;

use crate::generated;

/// A wire value type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WireType {
    /// `"string"`
    String,
    /// `"number"`
    Number,
    /// `"bool"`
    Bool,
    /// `"dynamic"`: the concrete type is decided per value.
    DynamicPseudoType,
    /// `["list", <element>]`
    List(Box<WireType>),
    /// `["set", <element>]`
    Set(Box<WireType>),
    /// `["map", <element>]`: keys are always strings.
    Map(Box<WireType>),
    /// `["object", {<name>: <type>, ...}]`
    Object(BTreeMap<String, WireType>),
}

impl WireType {
    /// Create a list type.
    pub fn list(element_type: WireType) -> Self {
        Self::List(Box::new(element_type))
    }

    /// Create a set type.
    pub fn set(element_type: WireType) -> Self {
        Self::Set(Box::new(element_type))
    }

    /// Create a map type.
    pub fn map(element_type: WireType) -> Self {
        Self::Map(Box::new(element_type))
    }

    /// Create an object type.
    pub fn object<I, K>(attribute_types: I) -> Self
    where
        I: IntoIterator<Item = (K, WireType)>,
        K: Into<String>,
    {
        Self::Object(
            attribute_types
                .into_iter()
                .map(|(name, ty)| (name.into(), ty))
                .collect(),
        )
    }

    /// Encode this type in the protocol's JSON type notation.
    pub fn to_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

impl Serialize for WireType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::String => serializer.serialize_str("string"),
            Self::Number => serializer.serialize_str("number"),
            Self::Bool => serializer.serialize_str("bool"),
            Self::DynamicPseudoType => serializer.serialize_str("dynamic"),
            Self::List(element) => ("list", element).serialize(serializer),
            Self::Set(element) => ("set", element).serialize(serializer),
            Self::Map(element) => ("map", element).serialize(serializer),
            Self::Object(attributes) => ("object", attributes).serialize(serializer),
        }
    }
}

/// The text format of a description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StringKind {
    /// Plain text.
    Plain,
    /// Markdown.
    Markdown,
}

impl From<StringKind> for generated::StringKind {
    fn from(kind: StringKind) -> Self {
        match kind {
            StringKind::Plain => generated::StringKind::Plain,
            StringKind::Markdown => generated::StringKind::Markdown,
        }
    }
}

fn kind_to_proto(kind: Option<StringKind>) -> i32 {
    kind.map(generated::StringKind::from)
        .unwrap_or(generated::StringKind::Plain) as i32
}

/// How a nested attribute object is repeated on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WireNestingMode {
    /// A single object.
    Single,
    /// A list of objects.
    List,
    /// A set of objects.
    Set,
    /// A map of objects.
    Map,
}

/// A single attribute as sent to the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize)]
pub struct SchemaAttribute {
    /// The attribute name.
    pub name: String,
    /// The value type. `None` when `nested_type` is set.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<WireType>,
    /// The nested attribute object. `None` when `type` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nested_type: Option<SchemaObject>,
    /// Resolved description text, empty if none was given.
    pub description: String,
    /// Format of `description`; absent when the description is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_kind: Option<StringKind>,
    /// The attribute must be configured.
    pub required: bool,
    /// The attribute may be configured.
    pub optional: bool,
    /// The provider may set the attribute.
    pub computed: bool,
    /// The value must be hidden from output.
    pub sensitive: bool,
    /// The attribute is deprecated.
    pub deprecated: bool,
}

/// A nested attribute object.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SchemaObject {
    /// Child attributes, sorted by name.
    pub attributes: Vec<SchemaAttribute>,
    /// How the object is repeated.
    pub nesting: WireNestingMode,
    /// Minimum number of elements (0 = unbounded).
    pub min_items: i64,
    /// Maximum number of elements (0 = unbounded).
    pub max_items: i64,
}

/// A converted schema block.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize)]
pub struct WireBlock {
    /// Attributes sorted by name.
    pub attributes: Vec<SchemaAttribute>,
    /// Resolved description text.
    pub description: String,
    /// Format of `description`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_kind: Option<StringKind>,
    /// The block is deprecated.
    pub deprecated: bool,
}

/// A converted resource, data source, or provider configuration schema.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize)]
pub struct WireSchema {
    /// Schema version for state upgrades.
    pub version: i64,
    /// The root block.
    pub block: WireBlock,
}

/// The full schema returned from the schema-negotiation call.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize)]
pub struct WireProviderSchema {
    /// Provider configuration schema.
    pub provider: WireSchema,
    /// Resource schemas by type name.
    pub resource_schemas: BTreeMap<String, WireSchema>,
    /// Data source schemas by type name.
    pub data_source_schemas: BTreeMap<String, WireSchema>,
}

impl From<WireNestingMode> for generated::schema::object::NestingMode {
    fn from(mode: WireNestingMode) -> Self {
        match mode {
            WireNestingMode::Single => generated::schema::object::NestingMode::Single,
            WireNestingMode::List => generated::schema::object::NestingMode::List,
            WireNestingMode::Set => generated::schema::object::NestingMode::Set,
            WireNestingMode::Map => generated::schema::object::NestingMode::Map,
        }
    }
}

impl From<SchemaAttribute> for generated::schema::Attribute {
    fn from(attr: SchemaAttribute) -> Self {
        Self {
            name: attr.name,
            r#type: attr
                .r#type
                .map(|t| t.to_json().unwrap_or_default())
                .unwrap_or_default(),
            nested_type: attr.nested_type.map(Into::into),
            description: attr.description,
            required: attr.required,
            optional: attr.optional,
            computed: attr.computed,
            sensitive: attr.sensitive,
            description_kind: kind_to_proto(attr.description_kind),
            deprecated: attr.deprecated,
        }
    }
}

impl From<SchemaObject> for generated::schema::Object {
    fn from(object: SchemaObject) -> Self {
        Self {
            attributes: object.attributes.into_iter().map(Into::into).collect(),
            nesting: generated::schema::object::NestingMode::from(object.nesting) as i32,
            min_items: object.min_items,
            max_items: object.max_items,
        }
    }
}

impl From<WireSchema> for generated::Schema {
    fn from(schema: WireSchema) -> Self {
        let block = schema.block;
        Self {
            version: schema.version,
            block: Some(generated::schema::Block {
                version: schema.version,
                attributes: block.attributes.into_iter().map(Into::into).collect(),
                description: block.description,
                description_kind: kind_to_proto(block.description_kind),
                deprecated: block.deprecated,
            }),
        }
    }
}

impl From<WireProviderSchema> for generated::ProviderSchema {
    fn from(schema: WireProviderSchema) -> Self {
        Self {
            provider: Some(schema.provider.into()),
            resource_schemas: schema
                .resource_schemas
                .into_iter()
                .map(|(k, v)| (k, v.into()))
                .collect(),
            data_source_schemas: schema
                .data_source_schemas
                .into_iter()
                .map(|(k, v)| (k, v.into()))
                .collect(),
        }
    }
}
