//! Signature parameters embedded in the signed license body.
//!
//! The parameters are part of the signed bytes so they cannot be swapped for
//! weaker ones without invalidating the signature.

use rsa::Pss;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

use crate::error::{LicenseError, LicenseResult};

/// Salt length used by the issuer.
pub const DEFAULT_SALT_LENGTH: usize = 20;

/// Signature schemes this build can verify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureAlgorithm {
    /// RSA probabilistic signature scheme.
    Pss,
}

impl SignatureAlgorithm {
    /// Returns the wire name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Pss => "PSS",
        }
    }
}

impl fmt::Display for SignatureAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SignatureAlgorithm {
    type Err = LicenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PSS" => Ok(Self::Pss),
            other => Err(LicenseError::UnsupportedAlgorithm(other.to_string())),
        }
    }
}

/// Hash functions this build can sign and verify with.
///
/// Adding one means adding a variant; every match below must then handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    /// SHA-256.
    Sha256,
}

impl HashAlgorithm {
    /// Returns the wire name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sha256 => "SHA256",
        }
    }

    /// Hashes `data`.
    #[must_use]
    pub fn digest(&self, data: &[u8]) -> Vec<u8> {
        match self {
            Self::Sha256 => Sha256::digest(data).to_vec(),
        }
    }

    /// Builds the PSS padding scheme for this hash and salt length.
    pub(crate) fn pss(&self, salt_length: usize) -> Pss {
        match self {
            Self::Sha256 => Pss::new_with_salt::<Sha256>(salt_length),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = LicenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            // upper or lowercase "sha"
            "SHA256" | "sha256" => Ok(Self::Sha256),
            other => Err(LicenseError::UnsupportedHash(other.to_string())),
        }
    }
}

impl Serialize for HashAlgorithm {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for HashAlgorithm {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// Signature algorithm and its parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SignatureOptions {
    /// Declared signature algorithm. Kept as text because it is signed.
    pub algorithm: String,
    /// Hash applied to the canonical license bytes.
    #[serde(rename = "hashAlgorithm")]
    pub hash: HashAlgorithm,
    /// PSS salt length in bytes, used as written. There are no special
    /// values: `0` is an empty salt and negative lengths do not decode.
    #[serde(rename = "saltLength")]
    pub salt_length: usize,
}

impl SignatureOptions {
    /// PSS options with the given hash and salt length.
    #[must_use]
    pub fn pss(hash: HashAlgorithm, salt_length: usize) -> Self {
        Self {
            algorithm: SignatureAlgorithm::Pss.name().to_string(),
            hash,
            salt_length,
        }
    }

    /// Parses the declared algorithm.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedAlgorithm` for anything other than PSS.
    pub fn signature_algorithm(&self) -> LicenseResult<SignatureAlgorithm> {
        self.algorithm.parse()
    }
}

impl Default for SignatureOptions {
    fn default() -> Self {
        Self::pss(HashAlgorithm::Sha256, DEFAULT_SALT_LENGTH)
    }
}
