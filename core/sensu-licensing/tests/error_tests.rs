use sensu_licensing::LicenseError;
use std::error::Error as _;

#[test]
fn error_display_key_format() {
    let err = LicenseError::KeyFormat("not PEM".into());
    assert!(format!("{err}").contains("invalid key format"));
    assert!(format!("{err}").contains("not PEM"));
}

#[test]
fn error_display_unsupported_algorithm() {
    let err = LicenseError::UnsupportedAlgorithm("bad".into());
    assert_eq!(format!("{err}"), "unsupported signature algorithm \"bad\"");
}

#[test]
fn error_display_unsupported_hash() {
    let err = LicenseError::UnsupportedHash("MD5".into());
    let msg = format!("{err}");
    assert!(msg.contains("unsupported license hash algorithm"));
    assert!(msg.contains("MD5"));
}

#[test]
fn error_display_signature_invalid() {
    assert_eq!(LicenseError::SignatureInvalid.to_string(), "license signature invalid");
}

#[test]
fn error_display_unsupported_version() {
    let err = LicenseError::UnsupportedVersion(0);
    assert_eq!(format!("{err}"), "unsupported license format version 0");
}

#[test]
fn error_display_entity_limit_exceeded() {
    let err = LicenseError::EntityLimitExceeded { sum: 25, limit: 20 };
    let msg = format!("{err}");
    assert!(msg.contains("25"));
    assert!(msg.contains("20"));
}

#[test]
fn error_display_unsupported_entity_class() {
    let err = LicenseError::UnsupportedEntityClass("widget".into());
    assert!(format!("{err}").contains("widget"));
}

#[test]
fn error_display_expired() {
    let err = LicenseError::Expired("2020-01-01T00:00:00Z".into());
    assert_eq!(format!("{err}"), "license expired on 2020-01-01T00:00:00Z");
}

#[test]
fn error_display_signing() {
    let err = LicenseError::Signing("salt too long".into());
    assert!(format!("{err}").contains("could not sign license"));
}

#[test]
fn error_display_storage() {
    let err = LicenseError::Storage("poisoned".into());
    assert!(format!("{err}").contains("storage error"));
}

#[test]
fn error_from_serde() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: LicenseError = json_err.into();
    assert!(matches!(err, LicenseError::Serialization(_)));
    assert!(err.source().is_some());
}

#[test]
fn error_from_entity_class() {
    let err: LicenseError = "widget"
        .parse::<sensu_types::EntityClass>()
        .unwrap_err()
        .into();
    assert!(matches!(err, LicenseError::UnsupportedEntityClass(ref c) if c == "widget"));
}

#[test]
fn error_is_debug() {
    let err = LicenseError::SignatureInvalid;
    assert!(format!("{err:?}").contains("SignatureInvalid"));
}
