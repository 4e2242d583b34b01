//! Schema types for describing provider and resource structure.
//!
//! These are the framework-side definitions a provider authors. They are
//! deliberately permissive: an [`Attribute`] can be built in shapes the
//! protocol cannot carry, and it is the job of [`crate::convert`] to reject
//! those before anything reaches the wire.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The type of an attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    /// A string value.
    String,
    /// An arbitrary-precision number.
    Number,
    /// A 64-bit integer. Carried on the wire as a number.
    Int64,
    /// A 64-bit floating point number. Carried on the wire as a number.
    Float64,
    /// A boolean value.
    Bool,
    /// A list of values of a single type.
    List(Box<AttributeType>),
    /// A set of unique values of a single type.
    Set(Box<AttributeType>),
    /// A map from string keys to values of a single type.
    Map(Box<AttributeType>),
    /// An object with a fixed set of attributes.
    Object(BTreeMap<String, AttributeType>),
    /// A dynamic type that can hold any value (use sparingly).
    Dynamic,
}

impl AttributeType {
    /// Create a list type.
    pub fn list(element_type: AttributeType) -> Self {
        Self::List(Box::new(element_type))
    }

    /// Create a set type.
    pub fn set(element_type: AttributeType) -> Self {
        Self::Set(Box::new(element_type))
    }

    /// Create a map type.
    pub fn map(element_type: AttributeType) -> Self {
        Self::Map(Box::new(element_type))
    }

    /// Create an object type.
    pub fn object<I, K>(attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, AttributeType)>,
        K: Into<String>,
    {
        Self::Object(
            attributes
                .into_iter()
                .map(|(name, ty)| (name.into(), ty))
                .collect(),
        )
    }
}

/// Describes how an attribute can be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AttributeFlags {
    /// The attribute is required in configuration.
    #[serde(default)]
    pub required: bool,
    /// The attribute is optional in configuration.
    #[serde(default)]
    pub optional: bool,
    /// The attribute is computed by the provider (read-only).
    #[serde(default)]
    pub computed: bool,
    /// The attribute is sensitive and should be hidden in logs/UI.
    #[serde(default)]
    pub sensitive: bool,
}

impl AttributeFlags {
    /// Create flags for a required attribute.
    pub fn required() -> Self {
        Self {
            required: true,
            ..Default::default()
        }
    }

    /// Create flags for an optional attribute.
    pub fn optional() -> Self {
        Self {
            optional: true,
            ..Default::default()
        }
    }

    /// Create flags for a computed attribute (read-only, set by provider).
    pub fn computed() -> Self {
        Self {
            computed: true,
            ..Default::default()
        }
    }

    /// Create flags for an optional+computed attribute (can be set, but has default from provider).
    pub fn optional_computed() -> Self {
        Self {
            optional: true,
            computed: true,
            ..Default::default()
        }
    }

    /// Mark the attribute as sensitive.
    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }
}

/// How a group of nested attributes is repeated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NestingMode {
    /// A single object.
    #[default]
    Single,
    /// An ordered list of objects.
    List,
    /// An unordered set of unique objects.
    Set,
    /// A map of objects keyed by string.
    Map,
}

/// A structured sub-schema held by an attribute in place of a type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NestedAttributes {
    /// How the nested object is repeated.
    #[serde(default)]
    pub nesting_mode: NestingMode,
    /// The child attributes, keyed by name.
    #[serde(default)]
    pub attributes: BTreeMap<String, Attribute>,
    /// Minimum number of elements (list and set nesting only, 0 = unbounded).
    #[serde(default)]
    pub min_items: u64,
    /// Maximum number of elements (list and set nesting only, 0 = unbounded).
    #[serde(default)]
    pub max_items: u64,
}

impl NestedAttributes {
    fn new(nesting_mode: NestingMode, attributes: BTreeMap<String, Attribute>) -> Self {
        Self {
            nesting_mode,
            attributes,
            min_items: 0,
            max_items: 0,
        }
    }

    /// Nest a single object.
    pub fn single(attributes: BTreeMap<String, Attribute>) -> Self {
        Self::new(NestingMode::Single, attributes)
    }

    /// Nest a list of objects.
    pub fn list(attributes: BTreeMap<String, Attribute>) -> Self {
        Self::new(NestingMode::List, attributes)
    }

    /// Nest a set of objects.
    pub fn set(attributes: BTreeMap<String, Attribute>) -> Self {
        Self::new(NestingMode::Set, attributes)
    }

    /// Nest a map of objects.
    pub fn map(attributes: BTreeMap<String, Attribute>) -> Self {
        Self::new(NestingMode::Map, attributes)
    }

    /// Set the minimum number of elements.
    pub fn with_min_items(mut self, min: u64) -> Self {
        self.min_items = min;
        self
    }

    /// Set the maximum number of elements.
    pub fn with_max_items(mut self, max: u64) -> Self {
        self.max_items = max;
        self
    }

    /// Whether the group has no child attributes.
    ///
    /// An empty group counts as "not set" for validation.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

/// Describes a single attribute in a schema.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Attribute {
    /// The type of the attribute. Mutually exclusive with `nested`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub attr_type: Option<AttributeType>,
    /// Nested attributes. Mutually exclusive with `attr_type`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nested: Option<NestedAttributes>,
    /// Flags describing how the attribute can be used.
    #[serde(flatten)]
    pub flags: AttributeFlags,
    /// Plain-text description of the attribute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Markdown description of the attribute. Preferred over `description`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markdown_description: Option<String>,
    /// If set, the attribute is deprecated with this message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation_message: Option<String>,
}

impl Attribute {
    /// Create a new attribute with the given type and flags.
    pub fn new(attr_type: AttributeType, flags: AttributeFlags) -> Self {
        Self {
            attr_type: Some(attr_type),
            flags,
            ..Default::default()
        }
    }

    /// Create an attribute holding nested attributes instead of a type.
    pub fn nested(nested: NestedAttributes, flags: AttributeFlags) -> Self {
        Self {
            nested: Some(nested),
            flags,
            ..Default::default()
        }
    }

    /// Create a required string attribute.
    pub fn required_string() -> Self {
        Self::new(AttributeType::String, AttributeFlags::required())
    }

    /// Create an optional string attribute.
    pub fn optional_string() -> Self {
        Self::new(AttributeType::String, AttributeFlags::optional())
    }

    /// Create a computed string attribute.
    pub fn computed_string() -> Self {
        Self::new(AttributeType::String, AttributeFlags::computed())
    }

    /// Create a required number attribute.
    pub fn required_number() -> Self {
        Self::new(AttributeType::Number, AttributeFlags::required())
    }

    /// Create an optional number attribute.
    pub fn optional_number() -> Self {
        Self::new(AttributeType::Number, AttributeFlags::optional())
    }

    /// Create a computed number attribute.
    pub fn computed_number() -> Self {
        Self::new(AttributeType::Number, AttributeFlags::computed())
    }

    /// Create a required bool attribute.
    pub fn required_bool() -> Self {
        Self::new(AttributeType::Bool, AttributeFlags::required())
    }

    /// Create an optional bool attribute.
    pub fn optional_bool() -> Self {
        Self::new(AttributeType::Bool, AttributeFlags::optional())
    }

    /// Create a computed bool attribute.
    pub fn computed_bool() -> Self {
        Self::new(AttributeType::Bool, AttributeFlags::computed())
    }

    /// Set the plain-text description for this attribute.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the markdown description for this attribute.
    pub fn with_markdown_description(mut self, description: impl Into<String>) -> Self {
        self.markdown_description = Some(description.into());
        self
    }

    /// Mark this attribute as deprecated.
    pub fn with_deprecation_message(mut self, message: impl Into<String>) -> Self {
        self.deprecation_message = Some(message.into());
        self
    }

    /// Mark this attribute as sensitive.
    pub fn sensitive(mut self) -> Self {
        self.flags.sensitive = true;
        self
    }

    /// The nested attributes, if any are actually declared.
    pub fn nested_attributes(&self) -> Option<&NestedAttributes> {
        self.nested.as_ref().filter(|n| !n.is_empty())
    }
}

/// The root block of a schema.
///
/// Nested blocks are not modelled here; only attributes are converted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Block {
    /// The attributes within this block.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, Attribute>,
    /// Plain-text description of the block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Markdown description of the block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markdown_description: Option<String>,
    /// If set, the whole block is deprecated with this message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecation_message: Option<String>,
}

impl Block {
    /// Create a new empty block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute to this block.
    pub fn with_attribute(mut self, name: impl Into<String>, attr: Attribute) -> Self {
        self.attributes.insert(name.into(), attr);
        self
    }

    /// Set the description for this block.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the markdown description for this block.
    pub fn with_markdown_description(mut self, description: impl Into<String>) -> Self {
        self.markdown_description = Some(description.into());
        self
    }
}

/// Schema for a resource or data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// The version of this schema (for state upgrades).
    #[serde(default)]
    pub version: u64,
    /// The root block containing all attributes.
    #[serde(flatten)]
    pub block: Block,
}

impl Schema {
    /// Create a new schema with the given version.
    pub fn new(version: u64) -> Self {
        Self {
            version,
            block: Block::new(),
        }
    }

    /// Create a schema at version 0.
    pub fn v0() -> Self {
        Self::new(0)
    }

    /// Add an attribute to the schema.
    pub fn with_attribute(mut self, name: impl Into<String>, attr: Attribute) -> Self {
        self.block.attributes.insert(name.into(), attr);
        self
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::v0()
    }
}

/// Schema for the provider configuration, resources, and data sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProviderSchema {
    /// Schema for provider configuration.
    #[serde(default)]
    pub provider: Schema,
    /// Schemas for each resource type.
    #[serde(default)]
    pub resources: BTreeMap<String, Schema>,
    /// Schemas for each data source type.
    #[serde(default)]
    pub data_sources: BTreeMap<String, Schema>,
}

impl ProviderSchema {
    /// Create a new empty provider schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the provider configuration schema.
    pub fn with_provider_config(mut self, schema: Schema) -> Self {
        self.provider = schema;
        self
    }

    /// Add a resource schema.
    pub fn with_resource(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.resources.insert(name.into(), schema);
        self
    }

    /// Add a data source schema.
    pub fn with_data_source(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.data_sources.insert(name.into(), schema);
        self
    }
}

/// Diagnostic severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    /// An error that prevents the operation from completing.
    Error,
    /// A warning that doesn't prevent the operation but should be addressed.
    Warning,
}

/// A diagnostic message reported back to the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The severity of the diagnostic.
    pub severity: DiagnosticSeverity,
    /// A short summary of the issue.
    pub summary: String,
    /// A detailed description of the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// The attribute path where the issue occurred.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    pub fn error(summary: impl Into<String>) -> Self {
        Self {
            severity: DiagnosticSeverity::Error,
            summary: summary.into(),
            detail: None,
            attribute: None,
        }
    }

    /// Create a warning diagnostic.
    pub fn warning(summary: impl Into<String>) -> Self {
        Self {
            severity: DiagnosticSeverity::Warning,
            summary: summary.into(),
            detail: None,
            attribute: None,
        }
    }

    /// Add detail to this diagnostic.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Set the attribute path for this diagnostic.
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = Some(attribute.into());
        self
    }
}
