//! Attribute paths for locating schema nodes in diagnostics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The location of an attribute within a schema tree.
///
/// Paths are built top-down while converting: the root path is empty and
/// every nested attribute appends its name. The display form is the dotted
/// notation used for diagnostic attributes, e.g. `network.ingress.port`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributePath {
    steps: Vec<String>,
}

impl AttributePath {
    /// Create an empty (root) path.
    pub fn root() -> Self {
        Self::default()
    }

    /// Return a new path with `name` appended. The receiver is unchanged.
    pub fn with_attribute_name(&self, name: impl Into<String>) -> Self {
        let mut steps = self.steps.clone();
        steps.push(name.into());
        Self { steps }
    }

    /// The attribute names from the root down.
    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// Whether this is the root path.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.steps.join("."))
    }
}

impl<S: Into<String>> FromIterator<S> for AttributePath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().map(Into::into).collect(),
        }
    }
}
