//! Conversion from framework schemas to wire schemas.
//!
//! [`schema_attribute`] is the core: it gates each attribute on the
//! negotiated [`ProtocolCapabilities`], validates it, maps its type, and
//! resolves its description. The block and schema level functions only fan
//! out over attributes, stopping at the first error, since a partial schema
//! cannot be negotiated with the orchestrator.
//!
//! # Example
//!
//! ```
//! use hemmer_provider_schema::convert::schema_attribute;
//! use hemmer_provider_schema::path::AttributePath;
//! use hemmer_provider_schema::schema::{Attribute, AttributeFlags, AttributeType};
//! use hemmer_provider_schema::wire::WireType;
//! use hemmer_provider_schema::ProtocolCapabilities;
//!
//! let attr = Attribute::new(
//!     AttributeType::list(AttributeType::Number),
//!     AttributeFlags::optional(),
//! );
//! let wire = schema_attribute("list", &AttributePath::root(), &attr, &ProtocolCapabilities::V5)
//!     .unwrap();
//!
//! assert_eq!(wire.name, "list");
//! assert_eq!(wire.r#type, Some(WireType::list(WireType::Number)));
//! assert!(wire.optional);
//! ```

use tracing::{debug, error, instrument, trace};

use crate::error::SchemaError;
use crate::path::AttributePath;
use crate::schema::{
    Attribute, AttributeType, Block, NestedAttributes, NestingMode, ProviderSchema, Schema,
};
use crate::types::ProtocolCapabilities;
use crate::validation::validate_attribute;
use crate::wire::{
    SchemaAttribute, SchemaObject, StringKind, WireBlock, WireNestingMode, WireProviderSchema,
    WireSchema, WireType,
};

/// Map a framework attribute type to its wire type.
pub fn attribute_type(attr_type: &AttributeType) -> WireType {
    match attr_type {
        AttributeType::String => WireType::String,
        AttributeType::Number | AttributeType::Int64 | AttributeType::Float64 => WireType::Number,
        AttributeType::Bool => WireType::Bool,
        AttributeType::Dynamic => WireType::DynamicPseudoType,
        AttributeType::List(element) => WireType::list(attribute_type(element)),
        AttributeType::Set(element) => WireType::set(attribute_type(element)),
        AttributeType::Map(element) => WireType::map(attribute_type(element)),
        AttributeType::Object(fields) => WireType::Object(
            fields
                .iter()
                .map(|(name, ty)| (name.clone(), attribute_type(ty)))
                .collect(),
        ),
    }
}

/// Pick the description to send and its format.
///
/// Markdown wins when both are set. Empty strings count as unset, and no
/// kind is reported when there is nothing to describe.
pub fn description(plain: Option<&str>, markdown: Option<&str>) -> (String, Option<StringKind>) {
    match (plain, markdown) {
        (_, Some(md)) if !md.is_empty() => (md.to_string(), Some(StringKind::Markdown)),
        (Some(text), _) if !text.is_empty() => (text.to_string(), Some(StringKind::Plain)),
        _ => (String::new(), None),
    }
}

fn is_deprecated(message: Option<&str>) -> bool {
    message.is_some_and(|m| !m.is_empty())
}

/// Convert one attribute, and any nested attributes, to its wire form.
///
/// `path` is the location of `attr` itself and is attached to any error.
/// Nested attributes are only accepted when `capabilities` allows them; that
/// check comes first, so a node that also declares a type still reports the
/// unsupported nesting.
pub fn schema_attribute(
    name: &str,
    path: &AttributePath,
    attr: &Attribute,
    capabilities: &ProtocolCapabilities,
) -> Result<SchemaAttribute, SchemaError> {
    trace!(attribute = name, path = %path, "converting schema attribute");

    if attr.nested_attributes().is_some() && !capabilities.nested_attributes {
        debug!(path = %path, version = capabilities.version, "nested attributes not supported");
        return Err(SchemaError::UnsupportedNesting {
            path: path.clone(),
            version: capabilities.version,
        });
    }

    if let Err(err) = validate_attribute(path, attr) {
        debug!(path = %path, error = %err, "invalid schema attribute");
        return Err(err);
    }

    let (r#type, nested_type) = match (&attr.attr_type, attr.nested_attributes()) {
        (Some(attr_type), _) => (Some(attribute_type(attr_type)), None),
        (None, Some(nested)) => (None, Some(nested_object(nested, path, capabilities)?)),
        (None, None) => return Err(SchemaError::MissingType { path: path.clone() }),
    };

    let (description, description_kind) = description(
        attr.description.as_deref(),
        attr.markdown_description.as_deref(),
    );

    Ok(SchemaAttribute {
        name: name.to_string(),
        r#type,
        nested_type,
        description,
        description_kind,
        required: attr.flags.required,
        optional: attr.flags.optional,
        computed: attr.flags.computed,
        sensitive: attr.flags.sensitive,
        deprecated: is_deprecated(attr.deprecation_message.as_deref()),
    })
}

fn nested_object(
    nested: &NestedAttributes,
    path: &AttributePath,
    capabilities: &ProtocolCapabilities,
) -> Result<SchemaObject, SchemaError> {
    let attributes = nested
        .attributes
        .iter()
        .map(|(name, child)| {
            schema_attribute(name, &path.with_attribute_name(name), child, capabilities)
        })
        .collect::<Result<Vec<_>, _>>()?;

    // Item bounds only mean something for list and set nesting.
    let (min_items, max_items) = match nested.nesting_mode {
        NestingMode::List | NestingMode::Set => (
            i64::try_from(nested.min_items).unwrap_or(i64::MAX),
            i64::try_from(nested.max_items).unwrap_or(i64::MAX),
        ),
        NestingMode::Single | NestingMode::Map => (0, 0),
    };

    Ok(SchemaObject {
        attributes,
        nesting: nesting_mode(nested.nesting_mode),
        min_items,
        max_items,
    })
}

fn nesting_mode(mode: NestingMode) -> WireNestingMode {
    match mode {
        NestingMode::Single => WireNestingMode::Single,
        NestingMode::List => WireNestingMode::List,
        NestingMode::Set => WireNestingMode::Set,
        NestingMode::Map => WireNestingMode::Map,
    }
}

/// Convert every attribute of a block.
///
/// Attributes come out sorted by name. `path` is the location of the block;
/// each attribute is converted at `path.<name>`.
pub fn block(
    block: &Block,
    path: &AttributePath,
    capabilities: &ProtocolCapabilities,
) -> Result<WireBlock, SchemaError> {
    let attributes = block
        .attributes
        .iter()
        .map(|(name, attr)| {
            schema_attribute(name, &path.with_attribute_name(name), attr, capabilities)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let (description, description_kind) = description(
        block.description.as_deref(),
        block.markdown_description.as_deref(),
    );

    Ok(WireBlock {
        attributes,
        description,
        description_kind,
        deprecated: is_deprecated(block.deprecation_message.as_deref()),
    })
}

/// Convert a resource, data source, or provider configuration schema.
pub fn schema(
    schema: &Schema,
    capabilities: &ProtocolCapabilities,
) -> Result<WireSchema, SchemaError> {
    Ok(WireSchema {
        version: i64::try_from(schema.version).unwrap_or(i64::MAX),
        block: block(&schema.block, &AttributePath::root(), capabilities)?,
    })
}

/// Convert a full provider schema for the schema-negotiation call.
///
/// Any invalid attribute anywhere fails the whole conversion.
#[instrument(skip_all, name = "convert.provider_schema", fields(version = capabilities.version))]
pub fn provider_schema(
    provider_schema: &ProviderSchema,
    capabilities: &ProtocolCapabilities,
) -> Result<WireProviderSchema, SchemaError> {
    let result = convert_provider_schema(provider_schema, capabilities);
    match &result {
        Ok(wire) => debug!(
            resources = wire.resource_schemas.len(),
            data_sources = wire.data_source_schemas.len(),
            "provider schema converted"
        ),
        Err(e) => error!(error = %e, path = ?e.path().map(ToString::to_string), "provider schema conversion failed"),
    }
    result
}

fn convert_provider_schema(
    provider_schema: &ProviderSchema,
    capabilities: &ProtocolCapabilities,
) -> Result<WireProviderSchema, SchemaError> {
    let provider = schema(&provider_schema.provider, capabilities)?;

    let mut resource_schemas = std::collections::BTreeMap::new();
    for (name, resource) in &provider_schema.resources {
        trace!(resource_type = %name, "converting resource schema");
        resource_schemas.insert(name.clone(), schema(resource, capabilities)?);
    }

    let mut data_source_schemas = std::collections::BTreeMap::new();
    for (name, data_source) in &provider_schema.data_sources {
        trace!(data_source_type = %name, "converting data source schema");
        data_source_schemas.insert(name.clone(), schema(data_source, capabilities)?);
    }

    Ok(WireProviderSchema {
        provider,
        resource_schemas,
        data_source_schemas,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::AttributeFlags;
    use std::collections::BTreeMap;
    use std::sync::Arc;

    struct TestCase {
        name: &'static str,
        attr: Attribute,
        expected: Result<SchemaAttribute, &'static str>,
    }

    fn optional(ty: AttributeType) -> Attribute {
        Attribute::new(ty, AttributeFlags::optional())
    }

    fn wire(name: &str, ty: WireType) -> SchemaAttribute {
        SchemaAttribute {
            name: name.to_string(),
            r#type: Some(ty),
            ..Default::default()
        }
    }

    fn wire_optional(name: &str, ty: WireType) -> SchemaAttribute {
        SchemaAttribute {
            optional: true,
            ..wire(name, ty)
        }
    }

    fn nested_children() -> BTreeMap<String, Attribute> {
        BTreeMap::from([
            ("string".to_string(), optional(AttributeType::String)),
            (
                "computed".to_string(),
                Attribute::new(AttributeType::Number, AttributeFlags::computed().sensitive()),
            ),
        ])
    }

    fn run(cases: Vec<(&'static str, TestCase)>, capabilities: &ProtocolCapabilities) {
        for (label, tc) in cases {
            let got = schema_attribute(tc.name, &AttributePath::root(), &tc.attr, capabilities);
            match (got, tc.expected) {
                (Ok(got), Ok(expected)) => assert_eq!(got, expected, "case {}", label),
                (Err(err), Err(expected)) => assert_eq!(err.to_string(), expected, "case {}", label),
                (Ok(got), Err(expected)) => {
                    panic!("case {}: expected error {:?}, got {:?}", label, expected, got)
                },
                (Err(err), Ok(_)) => panic!("case {}: unexpected error {}", label, err),
            }
        }
    }

    #[test]
    fn test_schema_attribute_v5() {
        let cases = vec![
            (
                "deprecated",
                TestCase {
                    name: "string",
                    attr: optional(AttributeType::String)
                        .with_deprecation_message("deprecated, use new_string instead"),
                    expected: Ok(SchemaAttribute {
                        deprecated: true,
                        ..wire_optional("string", WireType::String)
                    }),
                },
            ),
            (
                "description-plain",
                TestCase {
                    name: "string",
                    attr: optional(AttributeType::String).with_description("A string attribute"),
                    expected: Ok(SchemaAttribute {
                        description: "A string attribute".to_string(),
                        description_kind: Some(StringKind::Plain),
                        ..wire_optional("string", WireType::String)
                    }),
                },
            ),
            (
                "description-markdown",
                TestCase {
                    name: "string",
                    attr: optional(AttributeType::String)
                        .with_markdown_description("A string attribute"),
                    expected: Ok(SchemaAttribute {
                        description: "A string attribute".to_string(),
                        description_kind: Some(StringKind::Markdown),
                        ..wire_optional("string", WireType::String)
                    }),
                },
            ),
            (
                "description-both",
                TestCase {
                    name: "string",
                    attr: optional(AttributeType::String)
                        .with_description("A string attribute")
                        .with_markdown_description("A string attribute (markdown)"),
                    expected: Ok(SchemaAttribute {
                        description: "A string attribute (markdown)".to_string(),
                        description_kind: Some(StringKind::Markdown),
                        ..wire_optional("string", WireType::String)
                    }),
                },
            ),
            (
                "attr-string",
                TestCase {
                    name: "string",
                    attr: optional(AttributeType::String),
                    expected: Ok(wire_optional("string", WireType::String)),
                },
            ),
            (
                "attr-bool",
                TestCase {
                    name: "bool",
                    attr: optional(AttributeType::Bool),
                    expected: Ok(wire_optional("bool", WireType::Bool)),
                },
            ),
            (
                "attr-number",
                TestCase {
                    name: "number",
                    attr: optional(AttributeType::Number),
                    expected: Ok(wire_optional("number", WireType::Number)),
                },
            ),
            (
                "attr-list",
                TestCase {
                    name: "list",
                    attr: optional(AttributeType::list(AttributeType::Number)),
                    expected: Ok(wire_optional("list", WireType::list(WireType::Number))),
                },
            ),
            (
                "attr-map",
                TestCase {
                    name: "map",
                    attr: optional(AttributeType::map(AttributeType::String)),
                    expected: Ok(wire_optional("map", WireType::map(WireType::String))),
                },
            ),
            (
                "attr-object",
                TestCase {
                    name: "object",
                    attr: optional(AttributeType::object([
                        ("foo", AttributeType::String),
                        ("bar", AttributeType::Number),
                        ("baz", AttributeType::Bool),
                    ])),
                    expected: Ok(wire_optional(
                        "object",
                        WireType::object([
                            ("foo", WireType::String),
                            ("bar", WireType::Number),
                            ("baz", WireType::Bool),
                        ]),
                    )),
                },
            ),
            (
                "attr-set",
                TestCase {
                    name: "set",
                    attr: optional(AttributeType::set(AttributeType::Number)),
                    expected: Ok(wire_optional("set", WireType::set(WireType::Number))),
                },
            ),
            (
                "required",
                TestCase {
                    name: "string",
                    attr: Attribute::required_string(),
                    expected: Ok(SchemaAttribute {
                        required: true,
                        ..wire("string", WireType::String)
                    }),
                },
            ),
            (
                "optional",
                TestCase {
                    name: "string",
                    attr: Attribute::optional_string(),
                    expected: Ok(wire_optional("string", WireType::String)),
                },
            ),
            (
                "computed",
                TestCase {
                    name: "string",
                    attr: Attribute::computed_string(),
                    expected: Ok(SchemaAttribute {
                        computed: true,
                        ..wire("string", WireType::String)
                    }),
                },
            ),
            (
                "optional-computed",
                TestCase {
                    name: "string",
                    attr: Attribute::new(AttributeType::String, AttributeFlags::optional_computed()),
                    expected: Ok(SchemaAttribute {
                        computed: true,
                        ..wire_optional("string", WireType::String)
                    }),
                },
            ),
            (
                "sensitive",
                TestCase {
                    name: "string",
                    attr: Attribute::optional_string().sensitive(),
                    expected: Ok(SchemaAttribute {
                        sensitive: true,
                        ..wire_optional("string", WireType::String)
                    }),
                },
            ),
            (
                "nested-attr-single",
                TestCase {
                    name: "single_nested",
                    attr: Attribute::nested(
                        NestedAttributes::single(nested_children()),
                        AttributeFlags::optional(),
                    ),
                    expected: Err("protocol version 5 cannot have Attributes set"),
                },
            ),
            (
                "nested-attr-list",
                TestCase {
                    name: "list_nested",
                    attr: Attribute::nested(
                        NestedAttributes::list(nested_children()),
                        AttributeFlags::optional(),
                    ),
                    expected: Err("protocol version 5 cannot have Attributes set"),
                },
            ),
            (
                "nested-attr-set",
                TestCase {
                    name: "set_nested",
                    attr: Attribute::nested(
                        NestedAttributes::set(nested_children()),
                        AttributeFlags::optional(),
                    ),
                    expected: Err("protocol version 5 cannot have Attributes set"),
                },
            ),
            (
                "attr-and-nested-attr-set",
                TestCase {
                    name: "whoops",
                    attr: Attribute {
                        nested: Some(NestedAttributes::single(BTreeMap::from([(
                            "testing".to_string(),
                            Attribute::optional_string(),
                        )]))),
                        ..Attribute::optional_string()
                    },
                    expected: Err("protocol version 5 cannot have Attributes set"),
                },
            ),
            (
                "attr-and-nested-attr-unset",
                TestCase {
                    name: "whoops",
                    attr: Attribute {
                        flags: AttributeFlags::optional(),
                        ..Default::default()
                    },
                    expected: Err("must have Type set"),
                },
            ),
            (
                "attr-and-nested-attr-empty",
                TestCase {
                    name: "whoops",
                    attr: Attribute::nested(
                        NestedAttributes::single(BTreeMap::new()),
                        AttributeFlags::optional(),
                    ),
                    expected: Err("must have Type set"),
                },
            ),
            (
                "missing-required-optional-and-computed",
                TestCase {
                    name: "whoops",
                    attr: Attribute::new(AttributeType::String, AttributeFlags::default()),
                    expected: Err("must have Required, Optional, or Computed set"),
                },
            ),
        ];

        run(cases, &ProtocolCapabilities::V5);
    }

    #[test]
    fn test_deprecation_message_not_carried() {
        let attr = optional(AttributeType::String).with_deprecation_message("use new_string");
        let got =
            schema_attribute("string", &AttributePath::root(), &attr, &ProtocolCapabilities::V5)
                .unwrap();
        assert!(got.deprecated);
        assert!(got.description.is_empty());
        assert_eq!(got.description_kind, None);

        let attr = optional(AttributeType::String).with_deprecation_message("");
        let got =
            schema_attribute("string", &AttributePath::root(), &attr, &ProtocolCapabilities::V5)
                .unwrap();
        assert!(!got.deprecated);
    }

    #[test]
    fn test_attribute_type_nesting() {
        let ty = AttributeType::map(AttributeType::list(AttributeType::object([
            ("id", AttributeType::Int64),
            ("weight", AttributeType::Float64),
            ("tags", AttributeType::set(AttributeType::String)),
            ("extra", AttributeType::Dynamic),
        ])));

        assert_eq!(
            attribute_type(&ty),
            WireType::map(WireType::list(WireType::object([
                ("id", WireType::Number),
                ("weight", WireType::Number),
                ("tags", WireType::set(WireType::String)),
                ("extra", WireType::DynamicPseudoType),
            ])))
        );
    }

    #[test]
    fn test_description_resolution() {
        assert_eq!(description(None, None), (String::new(), None));
        assert_eq!(description(Some(""), Some("")), (String::new(), None));
        assert_eq!(
            description(Some("plain"), None),
            ("plain".to_string(), Some(StringKind::Plain))
        );
        assert_eq!(
            description(Some("plain"), Some("")),
            ("plain".to_string(), Some(StringKind::Plain))
        );
        assert_eq!(
            description(Some("plain"), Some("*md*")),
            ("*md*".to_string(), Some(StringKind::Markdown))
        );
    }

    #[test]
    fn test_conversion_is_idempotent() {
        let attr = optional(AttributeType::object([
            ("foo", AttributeType::String),
            ("bar", AttributeType::list(AttributeType::Number)),
            ("baz", AttributeType::map(AttributeType::Bool)),
        ]))
        .with_markdown_description("An object");

        let first =
            schema_attribute("object", &AttributePath::root(), &attr, &ProtocolCapabilities::V5)
                .unwrap();
        let second =
            schema_attribute("object", &AttributePath::root(), &attr, &ProtocolCapabilities::V5)
                .unwrap();
        assert_eq!(first, second);

        let first_bytes = prost::Message::encode_to_vec(
            &crate::generated::schema::Attribute::from(first),
        );
        let second_bytes = prost::Message::encode_to_vec(
            &crate::generated::schema::Attribute::from(second),
        );
        assert_eq!(first_bytes, second_bytes);
    }

    #[test]
    fn test_nested_attributes_v6() {
        let attr = Attribute::nested(
            NestedAttributes::list(nested_children())
                .with_min_items(1)
                .with_max_items(4),
            AttributeFlags::optional(),
        )
        .with_description("Rules");

        let got = schema_attribute(
            "list_nested",
            &AttributePath::root(),
            &attr,
            &ProtocolCapabilities::V6,
        )
        .unwrap();

        assert_eq!(
            got,
            SchemaAttribute {
                name: "list_nested".to_string(),
                r#type: None,
                nested_type: Some(SchemaObject {
                    attributes: vec![
                        SchemaAttribute {
                            computed: true,
                            sensitive: true,
                            ..wire("computed", WireType::Number)
                        },
                        wire_optional("string", WireType::String),
                    ],
                    nesting: WireNestingMode::List,
                    min_items: 1,
                    max_items: 4,
                }),
                description: "Rules".to_string(),
                description_kind: Some(StringKind::Plain),
                optional: true,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_single_nested_ignores_item_bounds() {
        let attr = Attribute::nested(
            NestedAttributes::single(nested_children()).with_max_items(3),
            AttributeFlags::required(),
        );
        let got =
            schema_attribute("single", &AttributePath::root(), &attr, &ProtocolCapabilities::V6)
                .unwrap();
        let nested = got.nested_type.expect("nested type");
        assert_eq!(nested.nesting, WireNestingMode::Single);
        assert_eq!(nested.max_items, 0);
    }

    #[test]
    fn test_nested_child_error_has_path() {
        let children = BTreeMap::from([(
            "inner".to_string(),
            Attribute::new(AttributeType::String, AttributeFlags::default()),
        )]);
        let attr = Attribute::nested(NestedAttributes::map(children), AttributeFlags::optional());
        let path = AttributePath::root().with_attribute_name("outer");

        let err = schema_attribute("outer", &path, &attr, &ProtocolCapabilities::V6).unwrap_err();
        assert_eq!(
            err.to_string(),
            "must have Required, Optional, or Computed set"
        );
        assert_eq!(err.path().map(ToString::to_string).as_deref(), Some("outer.inner"));
    }

    #[test]
    fn test_conflicting_type_with_nesting_support() {
        let attr = Attribute {
            nested: Some(NestedAttributes::single(nested_children())),
            ..Attribute::optional_string()
        };
        let err = schema_attribute("whoops", &AttributePath::root(), &attr, &ProtocolCapabilities::V6)
            .unwrap_err();
        assert!(matches!(err, SchemaError::ConflictingType { .. }));
        assert_eq!(err.to_string(), "must have Type set");
    }

    #[test]
    fn test_custom_capabilities_version_in_error() {
        let caps = ProtocolCapabilities::new(4);
        let attr = Attribute::nested(
            NestedAttributes::single(nested_children()),
            AttributeFlags::optional(),
        );
        let err = schema_attribute("nested", &AttributePath::root(), &attr, &caps).unwrap_err();
        assert_eq!(err.to_string(), "protocol version 4 cannot have Attributes set");
    }

    #[test]
    fn test_block_conversion() {
        let block = Block::new()
            .with_attribute("name", Attribute::required_string())
            .with_attribute("id", Attribute::computed_string())
            .with_markdown_description("An **example** resource");

        let got = super::block(&block, &AttributePath::root(), &ProtocolCapabilities::V5).unwrap();
        let names: Vec<_> = got.attributes.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["id", "name"]);
        assert_eq!(got.description, "An **example** resource");
        assert_eq!(got.description_kind, Some(StringKind::Markdown));
        assert!(!got.deprecated);
    }

    #[test]
    fn test_schema_error_path() {
        let schema = Schema::new(3)
            .with_attribute("name", Attribute::required_string())
            .with_attribute("broken", Attribute::optional_string().with_description(""))
            .with_attribute(
                "untyped",
                Attribute {
                    flags: AttributeFlags::computed(),
                    ..Default::default()
                },
            );

        let err = super::schema(&schema, &ProtocolCapabilities::V5).unwrap_err();
        assert_eq!(err.to_string(), "must have Type set");
        assert_eq!(err.path().map(ToString::to_string).as_deref(), Some("untyped"));
    }

    fn example_provider_schema() -> ProviderSchema {
        ProviderSchema::new()
            .with_provider_config(
                Schema::v0().with_attribute("api_key", Attribute::required_string().sensitive()),
            )
            .with_resource(
                "example_resource",
                Schema::new(1)
                    .with_attribute("name", Attribute::required_string())
                    .with_attribute("id", Attribute::computed_string())
                    .with_attribute(
                        "tags",
                        optional(AttributeType::map(AttributeType::String)),
                    ),
            )
            .with_data_source(
                "example_data",
                Schema::v0().with_attribute("filter", Attribute::optional_string()),
            )
    }

    #[test]
    fn test_provider_schema_conversion() {
        let wire = provider_schema(&example_provider_schema(), &ProtocolCapabilities::V5).unwrap();

        assert_eq!(wire.provider.block.attributes.len(), 1);
        assert!(wire.provider.block.attributes[0].sensitive);

        let resource = &wire.resource_schemas["example_resource"];
        assert_eq!(resource.version, 1);
        assert_eq!(resource.block.attributes.len(), 3);
        assert!(wire.data_source_schemas.contains_key("example_data"));

        let proto = crate::generated::ProviderSchema::from(wire);
        assert_eq!(proto.resource_schemas.len(), 1);
        assert_eq!(proto.data_source_schemas.len(), 1);
    }

    #[test]
    fn test_provider_schema_fails_on_single_bad_attribute() {
        let provider_schema = example_provider_schema().with_resource(
            "nested_resource",
            Schema::v0().with_attribute(
                "rules",
                Attribute::nested(
                    NestedAttributes::set(nested_children()),
                    AttributeFlags::optional(),
                ),
            ),
        );

        let err = super::provider_schema(&provider_schema, &ProtocolCapabilities::V5).unwrap_err();
        assert_eq!(err.to_string(), "protocol version 5 cannot have Attributes set");

        assert!(super::provider_schema(&provider_schema, &ProtocolCapabilities::V6).is_ok());
    }

    #[tokio::test]
    async fn test_concurrent_conversion() {
        let provider_schema = Arc::new(example_provider_schema());
        let expected = super::provider_schema(&provider_schema, &ProtocolCapabilities::V6).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let provider_schema = Arc::clone(&provider_schema);
                tokio::spawn(async move {
                    super::provider_schema(&provider_schema, &ProtocolCapabilities::V6)
                })
            })
            .collect();

        for handle in handles {
            let got = handle.await.unwrap().unwrap();
            assert_eq!(got, expected);
        }
    }
}
