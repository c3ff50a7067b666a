//! Core resource type definitions shared by Sensu API groups.
//!
//! This crate defines the API-group-agnostic surface every stored resource
//! speaks:
//! - Object and type metadata (`ObjectMeta`, `TypeMeta`)
//! - The `Resource` capability used by registries and stores
//! - The `Wrapper` transport envelope
//! - Entity classes recognized by the platform
//!
//! Group-specific types (licensing, checks, etc.) live in their own crates.

mod entity;
mod meta;
mod resource;

pub use entity::{EntityClass, ENTITY_AGENT_CLASS, ENTITY_PROXY_CLASS};
pub use meta::{ObjectMeta, TypeMeta};
pub use resource::{Resource, Wrapper};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unsupported entity class: {0}")]
    UnsupportedEntityClass(String),
}
