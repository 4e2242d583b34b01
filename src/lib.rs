//! Hemmer Provider Schema
//!
//! This crate converts provider schemas, as authored with the framework types
//! in [`schema`], into the wire schema the orchestrator receives from the
//! schema-negotiation call. It follows the conversion rules of
//! [terraform-plugin-framework](https://github.com/hashicorp/terraform-plugin-framework).
//!
//! # Overview
//!
//! - **Schema types**: attributes, nested attributes, blocks, and provider schemas
//! - **Validation**: per-attribute well-formedness rules
//! - **Conversion**: type mapping, description resolution, and protocol capability checks
//! - **Wire types**: structured wire records and their protobuf messages
//! - **Logging**: Integration with `tracing` for structured logging
//!
//! # Quick Start
//!
//! ```
//! use hemmer_provider_schema::{
//!     convert, ProtocolCapabilities,
//!     schema::{Attribute, ProviderSchema, Schema},
//! };
//!
//! let schema = ProviderSchema::new().with_resource(
//!     "example_resource",
//!     Schema::v0()
//!         .with_attribute("name", Attribute::required_string())
//!         .with_attribute("id", Attribute::computed_string()),
//! );
//!
//! let wire = convert::provider_schema(&schema, &ProtocolCapabilities::V5).unwrap();
//! assert_eq!(wire.resource_schemas["example_resource"].block.attributes.len(), 2);
//! ```
//!
//! # Protocol Versions
//!
//! Protocol version 5 carries flat typed attributes only; version 6 adds
//! nested attributes. Conversion is driven by [`ProtocolCapabilities`] rather
//! than by the version number, and a schema that needs a capability the
//! negotiated version lacks is rejected, never downgraded:
//!
//! ```text
//! protocol version 5 cannot have Attributes set
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod convert;
pub mod error;
pub mod logging;
pub mod path;
pub mod schema;
pub mod types;
pub mod validation;
pub mod wire;

#[allow(missing_docs)]
#[allow(clippy::all)]
pub mod generated;

// Re-export main types at crate root
pub use convert::{provider_schema, schema_attribute};
pub use error::SchemaError;
pub use logging::{init_logging, init_logging_with_default, try_init_logging};
pub use path::AttributePath;
pub use schema::ProviderSchema;
pub use types::{ProtocolCapabilities, SUPPORTED_PROTOCOL_VERSIONS};
pub use validation::{is_valid, validate_attribute};
pub use wire::{SchemaAttribute, WireType};

// Re-export commonly used external types
pub use prost;
pub use tonic;
pub use tracing;
