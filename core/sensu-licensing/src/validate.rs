//! License validation: signature, format version, entity classes, expiry.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::encoding::encode_license;
use crate::error::{LicenseError, LicenseResult};
use crate::license::{LicenseFile, SUPPORTED_LICENSE_VERSION};
use crate::verify::PublicSigningKey;

/// Validates license files against one trusted key.
///
/// Holds no state besides the key: every call re-encodes, re-verifies and
/// re-checks, and nothing is cached on the file.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'k> {
    key: &'k PublicSigningKey,
}

impl Validator<'static> {
    /// A validator for the embedded issuer key.
    ///
    /// # Errors
    ///
    /// Returns `KeyFormat` if the embedded key does not parse.
    pub fn trusted() -> LicenseResult<Self> {
        Ok(Self {
            key: PublicSigningKey::trusted()?,
        })
    }
}

impl<'k> Validator<'k> {
    /// A validator for an explicit key.
    #[must_use]
    pub fn new(key: &'k PublicSigningKey) -> Self {
        Self { key }
    }

    /// Validates against the current time.
    ///
    /// # Errors
    ///
    /// See [`Validator::validate_at`].
    pub fn validate(&self, file: &LicenseFile) -> LicenseResult<()> {
        self.validate_at(file, Utc::now())
    }

    /// Validates as of `now`. The first failing check is returned:
    ///
    /// 1. the signature over the canonical license bytes
    /// 2. the license format version
    /// 3. entity class names and limits
    /// 4. expiration
    ///
    /// # Errors
    ///
    /// Signature errors are returned unchanged; then `UnsupportedVersion`,
    /// `UnsupportedEntityClass`, `EntityLimitExceeded` or `Expired`.
    pub fn validate_at(&self, file: &LicenseFile, now: DateTime<Utc>) -> LicenseResult<()> {
        let result = self.check(file, now);
        match &result {
            Ok(()) => debug!(
                account = %file.license.account_name,
                account_id = file.license.account_id,
                valid_until = %file.license.valid_until,
                "license validated"
            ),
            Err(e) => warn!(error = %e, "license validation failed"),
        }
        result
    }

    fn check(&self, file: &LicenseFile, now: DateTime<Utc>) -> LicenseResult<()> {
        let license = &file.license;
        let data = encode_license(license)?;
        self.key
            .verify(data.as_bytes(), &file.signature, &license.signature_options)?;

        if license.version != SUPPORTED_LICENSE_VERSION {
            return Err(LicenseError::UnsupportedVersion(license.version));
        }

        license.validate_entity_classes()?;

        if now > license.valid_until.to_utc() {
            return Err(LicenseError::Expired(license.valid_until.to_string()));
        }
        Ok(())
    }
}
