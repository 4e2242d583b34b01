//! Error types for schema conversion.
//!
//! The `Display` text of every variant is a stable literal: the orchestrator
//! side and the provider test suites match on it verbatim. The attribute
//! path is carried alongside and surfaced through [`SchemaError::path`] and
//! the diagnostic conversion, never spliced into the message.

use thiserror::Error;

use crate::path::AttributePath;
use crate::schema::Diagnostic;

/// Errors that can occur while converting a schema to its wire form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Neither a type nor nested attributes were declared.
    #[error("must have Type set")]
    MissingType {
        /// Location of the offending attribute.
        path: AttributePath,
    },

    /// Both a type and nested attributes were declared.
    ///
    /// Shares its message with [`SchemaError::MissingType`].
    #[error("must have Type set")]
    ConflictingType {
        /// Location of the offending attribute.
        path: AttributePath,
    },

    /// None of required, optional, or computed was set.
    #[error("must have Required, Optional, or Computed set")]
    MissingConstraint {
        /// Location of the offending attribute.
        path: AttributePath,
    },

    /// Both required and optional were set.
    #[error("cannot have both Required and Optional set")]
    ConflictingConstraint {
        /// Location of the offending attribute.
        path: AttributePath,
    },

    /// Nested attributes were declared but the negotiated protocol version
    /// cannot represent them.
    #[error("protocol version {version} cannot have Attributes set")]
    UnsupportedNesting {
        /// Location of the offending attribute.
        path: AttributePath,
        /// The negotiated protocol version.
        version: u32,
    },

    /// No capability set is known for the requested protocol version.
    #[error("unsupported protocol version {0}")]
    UnsupportedProtocolVersion(u32),
}

impl SchemaError {
    /// The path of the attribute that failed, if the error is tied to one.
    pub fn path(&self) -> Option<&AttributePath> {
        match self {
            Self::MissingType { path }
            | Self::ConflictingType { path }
            | Self::MissingConstraint { path }
            | Self::ConflictingConstraint { path }
            | Self::UnsupportedNesting { path, .. } => Some(path),
            Self::UnsupportedProtocolVersion(_) => None,
        }
    }
}

impl From<SchemaError> for tonic::Status {
    fn from(err: SchemaError) -> Self {
        match err {
            SchemaError::UnsupportedProtocolVersion(_) => {
                tonic::Status::failed_precondition(err.to_string())
            },
            // A malformed schema is a defect in the provider, not in the request.
            _ => match err.path().filter(|p| !p.is_empty()) {
                Some(path) => tonic::Status::internal(format!("{}: {}", path, err)),
                None => tonic::Status::internal(err.to_string()),
            },
        }
    }
}

impl From<&SchemaError> for Diagnostic {
    fn from(err: &SchemaError) -> Self {
        let diagnostic = Diagnostic::error(err.to_string());
        match err.path().filter(|p| !p.is_empty()) {
            Some(path) => diagnostic.with_attribute(path.to_string()),
            None => diagnostic,
        }
    }
}
