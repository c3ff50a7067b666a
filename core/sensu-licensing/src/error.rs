//! Error types for the licensing module.

use thiserror::Error;

/// Licensing-specific errors.
#[derive(Debug, Error)]
pub enum LicenseError {
    /// The license could not be canonically encoded.
    #[error("could not encode license: {0}")]
    Encoding(#[source] serde_json::Error),

    /// Public or private key material is malformed or of the wrong type.
    #[error("invalid key format: {0}")]
    KeyFormat(String),

    /// Signature algorithm other than PSS.
    #[error("unsupported signature algorithm {0:?}")]
    UnsupportedAlgorithm(String),

    /// Hash algorithm other than SHA-256.
    #[error("unknown or unsupported license hash algorithm {0:?}")]
    UnsupportedHash(String),

    /// Signature verification failed.
    #[error("license signature invalid")]
    SignatureInvalid,

    /// The RSA signing primitive failed.
    #[error("could not sign license: {0}")]
    Signing(String),

    /// License format version not supported by this build.
    #[error("unsupported license format version {0}")]
    UnsupportedVersion(i64),

    /// Entity class outside the recognized set.
    #[error("unsupported entity class: {0}")]
    UnsupportedEntityClass(String),

    /// Per-class limits add up to more than the total entity limit.
    #[error("entity class limits exceed total entity limit: {sum} > {limit}")]
    EntityLimitExceeded { sum: u64, limit: u64 },

    /// License has expired.
    #[error("license expired on {0}")]
    Expired(String),

    /// Type name or API version not known to the registry.
    #[error("unknown type {0}")]
    UnknownType(String),

    /// Storage error.
    #[error("storage error: {0}")]
    Storage(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<sensu_types::Error> for LicenseError {
    fn from(err: sensu_types::Error) -> Self {
        match err {
            sensu_types::Error::UnsupportedEntityClass(class) => Self::UnsupportedEntityClass(class),
            sensu_types::Error::Serialization(e) => Self::Serialization(e),
        }
    }
}

/// Result type for license operations.
pub type LicenseResult<T> = Result<T, LicenseError>;
