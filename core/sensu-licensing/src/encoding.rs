//! Canonical byte encoding of a license body.
//!
//! Signing and verification both hash the output of [`encode_license`]; a
//! license decoded from the wire must re-encode to exactly the bytes the
//! issuer signed. The encoding is compact JSON with:
//!
//! - fields in declaration order, optional fields omitted when empty
//! - map keys sorted
//! - `<`, `>`, `&`, U+2028 and U+2029 escaped as `\u003c`, `\u003e`,
//!   `\u0026`, `\u2028` and `\u2029`, as the issuer's encoder does

use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use std::io;

use crate::error::{LicenseError, LicenseResult};
use crate::license::License;

/// Bytes produced by the canonical encoder. There is no other constructor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalBytes(Vec<u8>);

impl CanonicalBytes {
    /// Returns the encoded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the wrapper.
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl AsRef<[u8]> for CanonicalBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Canonically encodes a license body.
///
/// # Errors
///
/// Returns `Encoding` if a field cannot be serialized.
pub fn encode_license(license: &License) -> LicenseResult<CanonicalBytes> {
    let mut buf = Vec::with_capacity(256);
    let mut ser = Serializer::with_formatter(&mut buf, CanonicalFormatter);
    license.serialize(&mut ser).map_err(LicenseError::Encoding)?;
    Ok(CanonicalBytes(buf))
}

/// Compact JSON formatter (the trait defaults) with HTML-safe string escaping.
struct CanonicalFormatter;

impl Formatter for CanonicalFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let bytes = fragment.as_bytes();
        let mut start = 0;
        for (i, ch) in fragment.char_indices() {
            let escaped = match ch {
                '<' => "\\u003c",
                '>' => "\\u003e",
                '&' => "\\u0026",
                '\u{2028}' => "\\u2028",
                '\u{2029}' => "\\u2029",
                _ => continue,
            };
            writer.write_all(&bytes[start..i])?;
            writer.write_all(escaped.as_bytes())?;
            start = i + ch.len_utf8();
        }
        writer.write_all(&bytes[start..])
    }
}
