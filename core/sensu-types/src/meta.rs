//! Object and type metadata carried by every resource.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Name, namespace, labels and annotations of a stored object.
///
/// Every field is omitted from the wire form when empty, so a resource with
/// no metadata serializes as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMeta {
    /// Object name, unique within its namespace.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Namespace the object belongs to. Empty for cluster-wide objects.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,
    /// Labels used for filtering.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    /// Free-form annotations.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
    /// User that created or last replaced the object.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub created_by: String,
}

impl ObjectMeta {
    /// Creates metadata with the given name and no namespace.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Returns true if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.namespace.is_empty()
            && self.labels.is_empty()
            && self.annotations.is_empty()
            && self.created_by.is_empty()
    }
}

/// Identifies the concrete type of a wrapped resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeMeta {
    /// Type name, e.g. `LicenseFile`.
    #[serde(rename = "type")]
    pub type_name: String,
    /// API group and version, e.g. `licensing/v2`.
    pub api_version: String,
}

impl TypeMeta {
    /// Creates type metadata.
    #[must_use]
    pub fn new(type_name: impl Into<String>, api_version: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            api_version: api_version.into(),
        }
    }
}
