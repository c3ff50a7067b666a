//! The resource capability and its transport envelope.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::{ObjectMeta, Result, TypeMeta};

/// A type that can be stored, addressed and exposed through the API.
///
/// Registries map string aliases to implementors; stores use the key and
/// URI methods to address them.
pub trait Resource {
    /// Error returned by [`Resource::validate`].
    type Error: std::error::Error;

    /// Returns the type and API version of this resource.
    fn type_meta(&self) -> TypeMeta;

    /// Returns the object metadata.
    fn object_meta(&self) -> &ObjectMeta;

    /// Returns mutable object metadata.
    fn object_meta_mut(&mut self) -> &mut ObjectMeta;

    /// Replaces the object metadata.
    fn set_object_meta(&mut self, meta: ObjectMeta) {
        *self.object_meta_mut() = meta;
    }

    /// Moves the resource into a namespace.
    fn set_namespace(&mut self, namespace: &str) {
        self.object_meta_mut().namespace = namespace.to_string();
    }

    /// Returns the path prefix under which the resource is stored.
    fn store_prefix(&self) -> String;

    /// Returns the name of the store table or bucket for this type.
    fn store_name(&self) -> &'static str;

    /// Returns the name used in RBAC rules.
    fn rbac_name(&self) -> &'static str;

    /// Returns the path component of the resource URI.
    fn uri_path(&self) -> String;

    /// Checks that the resource content is valid.
    fn validate(&self) -> std::result::Result<(), Self::Error>;
}

/// Transport envelope pairing a resource with its type information.
///
/// Wire form: `{"type": .., "api_version": .., "metadata": {..}, "spec": {..}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wrapper<T> {
    /// Type name of the wrapped value.
    #[serde(rename = "type")]
    pub type_name: String,
    /// API group and version of the wrapped value.
    pub api_version: String,
    /// Metadata of the wrapped value.
    #[serde(default)]
    pub metadata: ObjectMeta,
    /// The wrapped value.
    #[serde(rename = "spec")]
    pub value: T,
}

impl<T> Wrapper<T> {
    /// Returns the type metadata of the wrapped value.
    #[must_use]
    pub fn type_meta(&self) -> TypeMeta {
        TypeMeta::new(self.type_name.clone(), self.api_version.clone())
    }

    /// Unwraps the value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Resource> Wrapper<T> {
    /// Wraps a resource, copying its type and object metadata.
    pub fn wrap(resource: T) -> Self {
        let TypeMeta {
            type_name,
            api_version,
        } = resource.type_meta();
        Self {
            type_name,
            api_version,
            metadata: resource.object_meta().clone(),
            value: resource,
        }
    }
}

impl<T: DeserializeOwned> Wrapper<T> {
    /// Decodes an envelope from JSON.
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if the bytes are not an envelope around `T`.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

impl<T: Serialize> Wrapper<T> {
    /// Encodes the envelope as compact JSON.
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if the value cannot be encoded.
    pub fn to_vec(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}
