//! Protocol version capabilities.
//!
//! The converter never branches on a protocol version number. Callers pick a
//! [`ProtocolCapabilities`] for the negotiated version and the converter
//! consults its named flags; supporting a new version means supplying a new
//! capability set.

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// The wire features supported by a negotiated protocol version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProtocolCapabilities {
    /// The protocol version these capabilities describe. Used in error text.
    pub version: u32,
    /// Whether attributes may carry nested attribute groups.
    #[serde(default)]
    pub nested_attributes: bool,
}

impl ProtocolCapabilities {
    /// Protocol version 5: flat typed attributes only.
    pub const V5: Self = Self {
        version: 5,
        nested_attributes: false,
    };

    /// Protocol version 6: adds nested attribute groups.
    pub const V6: Self = Self {
        version: 6,
        nested_attributes: true,
    };

    /// Create a capability set with no optional features.
    pub fn new(version: u32) -> Self {
        Self {
            version,
            nested_attributes: false,
        }
    }

    /// Enable or disable nested attribute support.
    pub fn with_nested_attributes(mut self, enabled: bool) -> Self {
        self.nested_attributes = enabled;
        self
    }

    /// Look up the capability set of a known protocol version.
    pub fn for_version(version: u32) -> Result<Self, SchemaError> {
        match version {
            5 => Ok(Self::V5),
            6 => Ok(Self::V6),
            other => Err(SchemaError::UnsupportedProtocolVersion(other)),
        }
    }
}

/// The protocol versions this crate ships capability sets for.
pub const SUPPORTED_PROTOCOL_VERSIONS: [u32; 2] = [5, 6];
