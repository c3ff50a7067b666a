//! License signature verification.

use rsa::pkcs8::DecodePublicKey;
use rsa::RsaPublicKey;
use std::sync::LazyLock;

use crate::error::{LicenseError, LicenseResult};
use crate::options::{SignatureAlgorithm, SignatureOptions};

/// Public RSA key used for license signature validation. The matching
/// private key is held by the account manager that issues licenses.
pub const SENSU_PUBLIC_SIGNING_KEY: &str = "-----BEGIN PUBLIC KEY-----
MIIBIjANBgkqhkiG9w0BAQEFAAOCAQ8AMIIBCgKCAQEAv2DAERnXE52Cw6ukFuvQ
4ixaN608XHf45mW4pbvucKqCqfyLHDM3FC4wzZIuJSHpNcVw2OfZ5OCs6SDkFMhA
DfS0IxqoJoRX3dO1Yl4CcWKc3/6MZsFJ6jc5FrlQmTVprJMGZb5vuiYkSsJTNjdS
wI4FBmM0UlRdrg7z7kqVWBtRIN++AY01OshGc+GxzsYQKh2fCl3qrivrD9F0ger8
oHmcLz52u2NZBlDKvOXufKsO6FJxHEe8xgeLS9tbqYoQeiC3qfKbeB0EX2COl3xV
92xONQZ+mCmYim++ThAnqNjKPc0wdVX14hBhss6B3r/1PGLiUpkPwOOaakjyTyZJ
hwIDAQAB
-----END PUBLIC KEY-----";

static TRUSTED_KEY: LazyLock<Result<PublicSigningKey, String>> = LazyLock::new(|| {
    PublicSigningKey::from_pem(SENSU_PUBLIC_SIGNING_KEY).map_err(|e| e.to_string())
});

/// An RSA public key that license signatures are checked against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicSigningKey(RsaPublicKey);

impl PublicSigningKey {
    /// Parses a PEM `PUBLIC KEY` block holding an RSA key.
    ///
    /// # Errors
    ///
    /// Returns `KeyFormat` if the text is not PEM, the block is not
    /// `PUBLIC KEY`, or the key is not RSA.
    pub fn from_pem(pem: &str) -> LicenseResult<Self> {
        RsaPublicKey::from_public_key_pem(pem.trim())
            .map(Self)
            .map_err(|e| LicenseError::KeyFormat(format!("could not parse the public key: {e}")))
    }

    /// The embedded issuer key, parsed on first use.
    ///
    /// # Errors
    ///
    /// Returns `KeyFormat` if the embedded key does not parse.
    pub fn trusted() -> LicenseResult<&'static Self> {
        TRUSTED_KEY
            .as_ref()
            .map_err(|e| LicenseError::KeyFormat(e.clone()))
    }

    /// Verifies `signature` over `data` with the declared options.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedAlgorithm` if the options do not declare PSS.
    /// Any other mismatch (wrong key, altered data or signature, different
    /// salt length) is `SignatureInvalid`.
    pub fn verify(&self, data: &[u8], signature: &[u8], opts: &SignatureOptions) -> LicenseResult<()> {
        match opts.signature_algorithm()? {
            SignatureAlgorithm::Pss => {
                let hashed = opts.hash.digest(data);
                self.0
                    .verify(opts.hash.pss(opts.salt_length), &hashed, signature)
                    .map_err(|_| LicenseError::SignatureInvalid)
            }
        }
    }

    #[cfg(feature = "signing")]
    pub(crate) fn from_rsa(key: RsaPublicKey) -> Self {
        Self(key)
    }
}

/// Verifies that license data matches its signature under a PEM public key.
///
/// Checks run in order: declared algorithm, key format, then the signature
/// itself. The hash is already restricted to supported algorithms by
/// [`HashAlgorithm`](crate::HashAlgorithm).
///
/// # Errors
///
/// See [`PublicSigningKey::from_pem`] and [`PublicSigningKey::verify`].
pub fn verify_signature(
    data: &[u8],
    signature: &[u8],
    opts: &SignatureOptions,
    public_key_pem: &str,
) -> LicenseResult<()> {
    opts.signature_algorithm()?;
    let key = PublicSigningKey::from_pem(public_key_pem)?;
    key.verify(data, signature, opts)
}
