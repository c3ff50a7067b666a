//! License signing, verification and storage keys for Sensu.
//!
//! This module handles:
//! - The license model and its canonical encoding
//! - RSA-PSS signing (behind the `signing` feature) and verification
//! - Validation: signature, format version, entity class limits, expiry
//! - Namespace-safe store keys for the license and other resources
//!
//! # Trust model
//!
//! Licenses are verified against a single embedded public key. The signature
//! parameters (algorithm, hash, salt length) are part of the signed body, so
//! they cannot be weakened without breaking the signature.
//!
//! # Wire format
//!
//! A license file travels wrapped as
//! `{"type":"LicenseFile","api_version":"licensing/v2","metadata":{},"spec":{..}}`
//! where `spec` holds `license` and a base64 `signature`.

mod encoding;
mod error;
mod keys;
mod license;
mod options;
#[cfg(feature = "signing")]
mod signing;
mod store;
mod timestamp;
mod typemap;
mod validate;
mod verify;

pub use encoding::{encode_license, CanonicalBytes};
pub use error::{LicenseError, LicenseResult};
pub use keys::{
    build_key, license_key, license_key_builder, license_uri, KeyBuilder, API_KEY_PREFIX,
    API_VERSION, GROUP_NAME, LICENSE_RESOURCE, ROOT, VERSION,
};
pub use license::{License, LicenseFile, LICENSE_FILE_TYPE, SUPPORTED_LICENSE_VERSION};
pub use options::{HashAlgorithm, SignatureAlgorithm, SignatureOptions, DEFAULT_SALT_LENGTH};
pub use store::{get_license, put_license, LicenseStore, MemoryStore};
pub use timestamp::{Timestamp, TIMESTAMP_FORMAT};
pub use typemap::{decode_wrapped, encode_wrapped, resolve, LicensingResource, LicensingType};
pub use validate::Validator;
pub use verify::{verify_signature, PublicSigningKey, SENSU_PUBLIC_SIGNING_KEY};

#[cfg(feature = "signing")]
pub use signing::{sign_license, PrivateSigningKey};
