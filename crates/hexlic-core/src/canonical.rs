//! # Canonical Serialization — Schema-Ordered Compact Text
//!
//! Defines [`CanonicalText`], the only form in which a [`License`] leaves
//! this crate.
//!
//! ## Rules
//!
//! 1. **Schema key order.** Object keys appear in the order the fields are
//!    declared in [`crate::model`]. Not sorted, not insertion dependent.
//!    This relies on `serde_json`'s `preserve_order` feature, enabled at
//!    the workspace level.
//! 2. **Compact separators.** `,` between members, `:` between key and
//!    value, no whitespace anywhere, no trailing newline.
//! 3. **ASCII only.** Every character outside printable ASCII (anything
//!    above `~`, including DEL) is written as a lowercase `\uXXXX` escape,
//!    with astral characters split into a UTF-16 surrogate pair. Control
//!    characters keep `serde_json`'s short or `\u00XX` escapes.
//!
//! Encoding a well-formed [`License`] cannot fail in practice; the
//! `Result` only surfaces `serde_json` errors for completeness.

use std::io;

use serde::Serialize;
use serde_json::ser::Formatter;
use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::error::CanonicalizationError;
use crate::model::License;

/// Compact, schema-ordered license text.
///
/// # Invariants
///
/// - Produced only by [`encode`].
/// - Decoding with [`decode`] and re-encoding yields identical bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalText(String);

impl CanonicalText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowercase hex SHA-256 of the encoded bytes.
    pub fn sha256_hex(&self) -> String {
        Sha256::digest(self.as_bytes())
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect()
    }
}

impl AsRef<[u8]> for CanonicalText {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl std::fmt::Display for CanonicalText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compact formatter that escapes everything beyond printable ASCII.
struct AsciiFormatter;

impl Formatter for AsciiFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (i, c) in fragment.char_indices() {
            if c.is_ascii() && c != '\x7f' {
                continue;
            }
            writer.write_all(fragment[start..i].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = i + c.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

/// Convert a license into an ordered key-value tree.
pub fn to_canonical_form(license: &License) -> Result<Value, CanonicalizationError> {
    Ok(serde_json::to_value(license)?)
}

/// Encode a license as compact canonical text.
pub fn encode(license: &License) -> Result<CanonicalText, CanonicalizationError> {
    let tree = to_canonical_form(license)?;
    let mut buf = Vec::with_capacity(2048);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, AsciiFormatter);
    tree.serialize(&mut ser)?;
    Ok(CanonicalText(String::from_utf8(buf)?))
}

/// Decode license text. Accepts any JSON layout (whitespace, key order).
pub fn decode(text: &str) -> Result<License, CanonicalizationError> {
    Ok(serde_json::from_str(text)?)
}

/// Decode license text and require it to already be in canonical form.
///
/// # Errors
///
/// Returns [`CanonicalizationError::NotCanonical`] with the first
/// diverging byte offset if re-encoding does not reproduce `text`.
pub fn decode_canonical(text: &str) -> Result<License, CanonicalizationError> {
    let license = decode(text)?;
    let reencoded = encode(&license)?;
    if reencoded.as_bytes() != text.as_bytes() {
        let offset = text
            .bytes()
            .zip(reencoded.as_bytes())
            .position(|(a, b)| a != *b)
            .unwrap_or_else(|| text.len().min(reencoded.len()));
        return Err(CanonicalizationError::NotCanonical { offset });
    }
    Ok(license)
}
