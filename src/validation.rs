//! Attribute well-formedness checks.
//!
//! These rules hold for every protocol version and are checked on each
//! attribute, root and nested, before it is converted:
//!
//! - exactly one of a type or (non-empty) nested attributes is declared
//! - at least one of required, optional, or computed is set
//! - required and optional are not both set
//!
//! # Example
//!
//! ```
//! use hemmer_provider_schema::path::AttributePath;
//! use hemmer_provider_schema::schema::{Attribute, AttributeFlags, AttributeType};
//! use hemmer_provider_schema::validation::validate_attribute;
//!
//! let attr = Attribute::new(AttributeType::String, AttributeFlags::default());
//! let err = validate_attribute(&AttributePath::root(), &attr).unwrap_err();
//! assert_eq!(err.to_string(), "must have Required, Optional, or Computed set");
//! ```

use crate::error::SchemaError;
use crate::path::AttributePath;
use crate::schema::Attribute;

/// Check a single attribute, ignoring its children.
///
/// `path` is recorded on the returned error.
pub fn validate_attribute(path: &AttributePath, attr: &Attribute) -> Result<(), SchemaError> {
    match (&attr.attr_type, attr.nested_attributes()) {
        (None, None) => {
            return Err(SchemaError::MissingType { path: path.clone() });
        },
        (Some(_), Some(_)) => {
            return Err(SchemaError::ConflictingType { path: path.clone() });
        },
        _ => {},
    }

    let flags = &attr.flags;
    if !flags.required && !flags.optional && !flags.computed {
        return Err(SchemaError::MissingConstraint { path: path.clone() });
    }
    if flags.required && flags.optional {
        return Err(SchemaError::ConflictingConstraint { path: path.clone() });
    }

    Ok(())
}

/// Check if an attribute is well-formed.
///
/// Use [`validate_attribute`] to find out why it is not.
pub fn is_valid(attr: &Attribute) -> bool {
    validate_attribute(&AttributePath::root(), attr).is_ok()
}
