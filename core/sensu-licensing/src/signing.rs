//! License signing with the issuer's RSA private key.
//!
//! Only needed by tooling that issues licenses; runtime builds can disable
//! the `signing` feature.

use rand::rngs::OsRng;
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::RsaPrivateKey;

use crate::encoding::encode_license;
use crate::error::{LicenseError, LicenseResult};
use crate::license::{License, LicenseFile};
use crate::options::SignatureOptions;
use crate::verify::PublicSigningKey;

/// An RSA private key that issues license signatures.
pub struct PrivateSigningKey(RsaPrivateKey);

impl PrivateSigningKey {
    /// Parses a PEM `RSA PRIVATE KEY` (PKCS#1) block.
    ///
    /// # Errors
    ///
    /// Returns `KeyFormat` if the text is not PEM, the block type is wrong,
    /// or the key does not parse.
    pub fn from_pem(pem: &str) -> LicenseResult<Self> {
        RsaPrivateKey::from_pkcs1_pem(pem.trim())
            .map(Self)
            .map_err(|e| LicenseError::KeyFormat(format!("unrecognized private key format: {e}")))
    }

    /// Returns the matching public key.
    #[must_use]
    pub fn public_key(&self) -> PublicSigningKey {
        PublicSigningKey::from_rsa(self.0.to_public_key())
    }

    /// Signs `data` with a PSS signature under the given options.
    ///
    /// The declared algorithm is not inspected; a license that declares
    /// anything but PSS will be rejected when verified.
    ///
    /// # Errors
    ///
    /// Returns `Signing` if the salt does not fit the key size.
    pub fn sign(&self, data: &[u8], opts: &SignatureOptions) -> LicenseResult<Vec<u8>> {
        let hashed = opts.hash.digest(data);
        self.0
            .sign_with_rng(&mut OsRng, opts.hash.pss(opts.salt_length), &hashed)
            .map_err(|e| LicenseError::Signing(e.to_string()))
    }
}

impl std::fmt::Debug for PrivateSigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateSigningKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Signs a license with a PEM private key, using the options the license
/// declares.
///
/// # Errors
///
/// Returns `Encoding`, `KeyFormat` or `Signing`.
pub fn sign_license(license: &License, private_key_pem: &str) -> LicenseResult<Vec<u8>> {
    let data = encode_license(license)?;
    let key = PrivateSigningKey::from_pem(private_key_pem)?;
    key.sign(data.as_bytes(), &license.signature_options)
}

impl LicenseFile {
    /// Signs the license and stores the result in `signature`.
    ///
    /// # Errors
    ///
    /// See [`sign_license`]. The file is left unchanged on error.
    pub fn sign(&mut self, private_key_pem: &str) -> LicenseResult<()> {
        self.signature = sign_license(&self.license, private_key_pem)?;
        Ok(())
    }
}
