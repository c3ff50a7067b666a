//! Lookup of licensing types by name, and decoding of wrapped resources.

use sensu_types::{Resource, Wrapper};
use serde_json::Value;

use crate::error::{LicenseError, LicenseResult};
use crate::keys::API_VERSION;
use crate::license::{LicenseFile, LICENSE_FILE_TYPE};
use crate::options::HashAlgorithm;

/// Every type defined by the licensing API group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LicensingType {
    KeyBuilder,
    License,
    LicenseFile,
    SignatureOptions,
}

// Type names and snake_case aliases.
const TYPE_MAP: [(&str, LicensingType); 8] = [
    ("KeyBuilder", LicensingType::KeyBuilder),
    ("key_builder", LicensingType::KeyBuilder),
    ("License", LicensingType::License),
    ("license", LicensingType::License),
    (LICENSE_FILE_TYPE, LicensingType::LicenseFile),
    ("license_file", LicensingType::LicenseFile),
    ("SignatureOptions", LicensingType::SignatureOptions),
    ("signature_options", LicensingType::SignatureOptions),
];

impl LicensingType {
    /// All licensing types.
    pub const ALL: [Self; 4] = [
        Self::KeyBuilder,
        Self::License,
        Self::LicenseFile,
        Self::SignatureOptions,
    ];

    /// Looks up a type by type name or alias.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        TYPE_MAP
            .iter()
            .find(|(alias, _)| *alias == name)
            .map(|(_, t)| *t)
    }

    /// Returns the type name, e.g. `LicenseFile`.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::KeyBuilder => "KeyBuilder",
            Self::License => "License",
            Self::LicenseFile => LICENSE_FILE_TYPE,
            Self::SignatureOptions => "SignatureOptions",
        }
    }

    /// Returns the snake_case alias, e.g. `license_file`.
    #[must_use]
    pub const fn alias(&self) -> &'static str {
        match self {
            Self::KeyBuilder => "key_builder",
            Self::License => "license",
            Self::LicenseFile => "license_file",
            Self::SignatureOptions => "signature_options",
        }
    }

    /// Returns true if values of this type are stored resources.
    #[must_use]
    pub const fn is_resource(&self) -> bool {
        match self {
            Self::LicenseFile => true,
            Self::KeyBuilder | Self::License | Self::SignatureOptions => false,
        }
    }
}

/// Resolves a resource type from its API version and type name or alias.
///
/// # Errors
///
/// Returns `UnknownType` if the API version is not this group's, the name
/// is not registered, or the type is not a resource.
pub fn resolve(api_version: &str, name: &str) -> LicenseResult<LicensingType> {
    if api_version != API_VERSION {
        return Err(LicenseError::UnknownType(format!("{api_version}/{name}")));
    }
    LicensingType::from_name(name)
        .filter(LicensingType::is_resource)
        .ok_or_else(|| LicenseError::UnknownType(format!("{api_version}/{name}")))
}

/// A decoded licensing resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LicensingResource {
    LicenseFile(LicenseFile),
}

impl LicensingResource {
    /// Returns the registered type of this value.
    #[must_use]
    pub fn licensing_type(&self) -> LicensingType {
        match self {
            Self::LicenseFile(_) => LicensingType::LicenseFile,
        }
    }

    /// Returns the value as a generic resource.
    #[must_use]
    pub fn as_resource(&self) -> &dyn Resource<Error = LicenseError> {
        match self {
            Self::LicenseFile(file) => file,
        }
    }

    /// Unwraps the license file.
    #[must_use]
    pub fn into_license_file(self) -> LicenseFile {
        match self {
            Self::LicenseFile(file) => file,
        }
    }
}

/// Decodes a `{"type", "api_version", "metadata", "spec"}` envelope into the
/// registered type it names.
///
/// # Errors
///
/// Returns `Serialization` for malformed JSON or a `spec` that does not match
/// its type, `UnknownType` for unregistered types, and `UnsupportedHash` for
/// a license declaring a hash algorithm this build cannot verify.
pub fn decode_wrapped(bytes: &[u8]) -> LicenseResult<LicensingResource> {
    let wrapper = Wrapper::<Value>::from_slice(bytes)?;
    match resolve(&wrapper.api_version, &wrapper.type_name)? {
        LicensingType::LicenseFile => {
            check_declared_hash(&wrapper.value)?;
            let mut file: LicenseFile = serde_json::from_value(wrapper.value)?;
            if file.metadata.is_empty() {
                file.metadata = wrapper.metadata;
            }
            Ok(LicensingResource::LicenseFile(file))
        }
        other @ (LicensingType::KeyBuilder
        | LicensingType::License
        | LicensingType::SignatureOptions) => {
            Err(LicenseError::UnknownType(other.type_name().to_string()))
        }
    }
}

/// Encodes a license file in its wrapped wire form.
///
/// # Errors
///
/// Returns `Serialization` if encoding fails.
pub fn encode_wrapped(file: &LicenseFile) -> LicenseResult<Vec<u8>> {
    Ok(Wrapper::wrap(file.clone()).to_vec()?)
}

/// Parses the declared hash of a license file `spec`, if it names one.
/// A missing or non-string value is left to the typed decode.
fn check_declared_hash(spec: &Value) -> LicenseResult<()> {
    match spec
        .pointer("/license/signature/hashAlgorithm")
        .and_then(Value::as_str)
    {
        Some(name) => name.parse::<HashAlgorithm>().map(drop),
        None => Ok(()),
    }
}
