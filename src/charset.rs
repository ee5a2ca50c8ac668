//! Percent encoding and charset handling for extended parameter values.
//!
//! Implements the RFC 5987 ext-value octet rules and the lossy ASCII
//! fallback used for the legacy `filename` parameter.

use crate::error::{Error, Result};
use crate::grammar::{is_attr_char, is_display_safe};

const UPPER_HEX: &[u8] = b"0123456789ABCDEF";

/// Percent-encodes the bytes of an extended parameter value.
///
/// Every byte outside the RFC 5987 attr-char set is written as `%XX`
/// with upper-case hex digits.
///
/// # Examples
///
/// ```
/// use http_disposition::charset::percent_encode_attr;
///
/// assert_eq!(percent_encode_attr("plans.pdf".as_bytes()), "plans.pdf");
/// assert_eq!(percent_encode_attr("€".as_bytes()), "%E2%82%AC");
/// ```
pub fn percent_encode_attr(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for &b in bytes {
        if is_attr_char(b) {
            out.push(b as char);
        } else {
            out.push('%');
            out.push(UPPER_HEX[(b >> 4) as usize] as char);
            out.push(UPPER_HEX[(b & 0x0F) as usize] as char);
        }
    }
    out
}

/// Decodes `%XX` escapes back into raw bytes.
///
/// Fails when a `%` is not followed by exactly two hex digits.
pub fn percent_decode(s: &str) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(s.len());
    let mut bytes = s.bytes();
    while let Some(b) = bytes.next() {
        if b != b'%' {
            out.push(b);
            continue;
        }
        let hi = bytes
            .next()
            .and_then(|c| (c as char).to_digit(16))
            .ok_or_else(|| Error::Decode("incomplete percent escape".to_string()))?;
        let lo = bytes
            .next()
            .and_then(|c| (c as char).to_digit(16))
            .ok_or_else(|| Error::Decode("incomplete percent escape".to_string()))?;
        out.push(((hi << 4) | lo) as u8);
    }
    Ok(out)
}

/// Decodes an extended-value octet string per the declared charset.
///
/// UTF-8 values must form valid UTF-8 after percent-decoding; ISO-8859-1
/// maps every byte to the equally numbered Unicode scalar. The caller is
/// responsible for having validated the charset name.
pub fn decode_extended(charset: &str, value: &str) -> Result<String> {
    let bytes = percent_decode(value)?;
    if charset.eq_ignore_ascii_case("utf-8") {
        String::from_utf8(bytes).map_err(|_| Error::Decode("invalid UTF-8 sequence".to_string()))
    } else {
        // ISO-8859-1: bytes and scalar values coincide
        Ok(bytes.iter().map(|&b| b as char).collect())
    }
}

/// Reports whether the charset tag of an extended value is one this
/// header format recognizes.
pub fn is_supported_charset(charset: &str) -> bool {
    charset.eq_ignore_ascii_case("utf-8") || charset.eq_ignore_ascii_case("iso-8859-1")
}

/// Produces a best-effort ASCII approximation of a filename for the
/// legacy `filename` parameter.
///
/// Any character outside printable ASCII, plus `"` and `\`, is replaced
/// with a single `?` so the fallback keeps the original length and
/// shape. The substitution is lossy; the exact name travels only in the
/// extended parameter.
///
/// # Examples
///
/// ```
/// use http_disposition::charset::ascii_fallback;
///
/// assert_eq!(ascii_fallback("€ rates.pdf"), "? rates.pdf");
/// assert_eq!(ascii_fallback("планы.pdf"), "?????.pdf");
/// ```
pub fn ascii_fallback(name: &str) -> String {
    name.chars()
        .map(|c| if is_display_safe(c) { c } else { '?' })
        .collect()
}

/// Escapes `"` and `\` for embedding inside a quoted-string.
///
/// Only the two structural characters are escaped; all other bytes pass
/// through unchanged.
pub fn quote_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        if ch == '"' || ch == '\\' {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}
