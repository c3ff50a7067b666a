//! License model and its transport envelope.

use chrono::{Duration, Utc};
use sensu_types::{EntityClass, ObjectMeta, Resource, TypeMeta};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{LicenseError, LicenseResult};
use crate::keys::{self, API_KEY_PREFIX, API_VERSION, LICENSE_RESOURCE};
use crate::options::SignatureOptions;
use crate::timestamp::Timestamp;
use crate::validate::Validator;

/// The only license format version this build accepts.
pub const SUPPORTED_LICENSE_VERSION: i64 = 1;

/// Type name of [`LicenseFile`] in the registry and on the wire.
pub const LICENSE_FILE_TYPE: &str = "LicenseFile";

/// An enterprise software license: account, validity window, plan,
/// enabled features and entity quotas.
///
/// Field order is the canonical encoding order. Do not reorder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    /// License format version.
    pub version: i64,
    /// Name of the account that issued the license.
    pub issuer: String,
    /// Name of the customer account.
    #[serde(rename = "accountName")]
    pub account_name: String,
    /// ID of the customer account.
    #[serde(rename = "accountID")]
    pub account_id: u64,
    /// When the license was issued.
    pub issued: Timestamp,
    /// When the license expires.
    #[serde(rename = "validUntil")]
    pub valid_until: Timestamp,
    /// Subscription plan.
    pub plan: String,
    /// Enabled features, in issuer order. `None` encodes as `null`.
    pub features: Option<Vec<String>>,
    /// Signature algorithm and parameters. Signed along with the rest.
    #[serde(rename = "signature")]
    pub signature_options: SignatureOptions,
    /// Total number of entities allowed. Zero means unlimited.
    #[serde(rename = "entityLimit", default, skip_serializing_if = "is_zero")]
    pub entity_limit: u64,
    /// Lets licensed users opt out of Tessen telemetry.
    #[serde(rename = "allowTessenOptOut", default, skip_serializing_if = "is_false")]
    pub allow_tessen_opt_out: bool,
    /// Entity limit per entity class name.
    #[serde(
        rename = "entityClassLimits",
        default,
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub entity_class_limits: BTreeMap<String, u64>,
}

fn is_zero(n: &u64) -> bool {
    *n == 0
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl License {
    /// Returns true if `feature` is enabled.
    #[must_use]
    pub fn has_feature(&self, feature: &str) -> bool {
        self.features
            .as_deref()
            .is_some_and(|features| features.iter().any(|f| f == feature))
    }

    /// Returns true if Tessen opt-out is allowed.
    #[must_use]
    pub fn allows_tessen_opt_out(&self) -> bool {
        self.allow_tessen_opt_out
    }

    /// Returns the limit for one entity class, if the license sets one.
    #[must_use]
    pub fn entity_class_limit(&self, class: EntityClass) -> Option<u64> {
        self.entity_class_limits.get(class.as_str()).copied()
    }

    /// Checks that every class is recognized and that the per-class limits
    /// fit in the total entity limit.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedEntityClass` for the first unknown class (in key
    /// order), or `EntityLimitExceeded` if the sum is over a nonzero total.
    pub fn validate_entity_classes(&self) -> LicenseResult<()> {
        let mut sum: u64 = 0;
        for (class, limit) in &self.entity_class_limits {
            class.parse::<EntityClass>()?;
            sum = sum.saturating_add(*limit);
        }

        let limit = self.entity_limit;
        if limit != 0 && sum > limit {
            return Err(LicenseError::EntityLimitExceeded { sum, limit });
        }
        Ok(())
    }
}

/// A license paired with its detached signature and object metadata.
///
/// There is a single license per cluster, so the namespace is always empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseFile {
    /// The license itself.
    pub license: License,
    /// Signature over the canonical encoding of `license`.
    #[serde(default, with = "base64_bytes")]
    pub signature: Vec<u8>,
    /// Name, labels and annotations.
    #[serde(default)]
    pub metadata: ObjectMeta,
}

impl LicenseFile {
    /// Wraps an unsigned license.
    #[must_use]
    pub fn new(license: License) -> Self {
        Self {
            license,
            signature: Vec::new(),
            metadata: ObjectMeta::default(),
        }
    }

    /// A PSS/SHA-256 license valid for 60 days with an entity limit of 20,
    /// for use in tests.
    #[must_use]
    pub fn fixture(name: &str) -> Self {
        let now = Utc::now();
        let mut file = Self::new(License {
            version: SUPPORTED_LICENSE_VERSION,
            issuer: "Sensu, Inc.".to_string(),
            account_name: "Acme Corp.".to_string(),
            account_id: 573,
            issued: Timestamp::from_datetime(now),
            valid_until: Timestamp::from_datetime(now + Duration::days(60)),
            plan: "Testing Only".to_string(),
            features: Some(vec!["all".to_string()]),
            signature_options: SignatureOptions::default(),
            entity_limit: 20,
            allow_tessen_opt_out: false,
            entity_class_limits: BTreeMap::new(),
        });
        file.metadata = ObjectMeta::named(name);
        file
    }

    /// Checks the signature against the embedded key, then the version,
    /// entity classes and expiration.
    ///
    /// # Errors
    ///
    /// Returns the first failing check.
    pub fn validate(&self) -> LicenseResult<()> {
        Validator::trusted()?.validate(self)
    }

    /// Checks entity classes only. See [`License::validate_entity_classes`].
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedEntityClass` or `EntityLimitExceeded`.
    pub fn validate_entity_classes(&self) -> LicenseResult<()> {
        self.license.validate_entity_classes()
    }

    /// Total entity limit. Zero means unlimited.
    #[must_use]
    pub fn entity_limit(&self) -> u64 {
        self.license.entity_limit
    }

    /// Entity limits per class name.
    #[must_use]
    pub fn entity_class_limits(&self) -> &BTreeMap<String, u64> {
        &self.license.entity_class_limits
    }
}

impl Resource for LicenseFile {
    type Error = LicenseError;

    fn type_meta(&self) -> TypeMeta {
        TypeMeta::new(LICENSE_FILE_TYPE, API_VERSION)
    }

    fn object_meta(&self) -> &ObjectMeta {
        &self.metadata
    }

    fn object_meta_mut(&mut self) -> &mut ObjectMeta {
        &mut self.metadata
    }

    // Singleton: metadata is only replaced through `object_meta_mut`.
    fn set_object_meta(&mut self, _meta: ObjectMeta) {}

    fn set_namespace(&mut self, _namespace: &str) {}

    fn store_prefix(&self) -> String {
        keys::join([API_KEY_PREFIX, LICENSE_RESOURCE])
    }

    fn store_name(&self) -> &'static str {
        "license_file"
    }

    fn rbac_name(&self) -> &'static str {
        LICENSE_RESOURCE
    }

    fn uri_path(&self) -> String {
        keys::license_uri()
    }

    fn validate(&self) -> Result<(), Self::Error> {
        Validator::trusted()?.validate(self)
    }
}

/// Standard base64 for byte fields; `null` decodes as empty.
mod base64_bytes {
    use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&BASE64.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(text) => BASE64.decode(text).map_err(serde::de::Error::custom),
            None => Ok(Vec::new()),
        }
    }
}
