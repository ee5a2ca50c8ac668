//! Content-Disposition header value parsing.
//!
//! Inverse of the formatter, tolerant of parameter order and optional
//! quoting but strict about the RFC 6266 grammar.

use crate::charset::{decode_extended, is_supported_charset};
use crate::error::{Error, Result};
use crate::format::DispositionType;
use crate::grammar::is_token;
use std::collections::HashMap;

/// A parsed Content-Disposition header value.
///
/// Both `filename` and `filename*` stay in the parameter map under
/// their literal (lowercased) names; [`Disposition::filename`] applies
/// the RFC 6266 preference for the extended value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disposition {
    /// The disposition type token.
    pub disposition_type: DispositionType,
    /// Decoded parameter values keyed by lowercased parameter name.
    pub parameters: HashMap<String, String>,
}

impl Disposition {
    /// Returns the effective filename, preferring the exact extended
    /// `filename*` value over the legacy `filename` fallback.
    pub fn filename(&self) -> Option<&str> {
        self.parameters
            .get("filename*")
            .or_else(|| self.parameters.get("filename"))
            .map(String::as_str)
    }
}

/// Parses a Content-Disposition header value, per RFC 6266.
///
/// # Examples
///
/// ```
/// use http_disposition::parse_disposition;
///
/// let disposition =
///     parse_disposition("attachment; filename=\"?plans.pdf\"; filename*=UTF-8''%E2%82%ACplans.pdf")
///         .unwrap();
/// assert_eq!(disposition.filename(), Some("€plans.pdf"));
/// assert_eq!(
///     disposition.parameters.get("filename").map(String::as_str),
///     Some("?plans.pdf")
/// );
/// ```
pub fn parse_disposition(v: &str) -> Result<Disposition> {
    let mut segments = split_segments(v).into_iter();

    // unwrap is fine: split always yields at least one segment
    let type_token = segments.next().unwrap().trim();
    if !is_token(type_token) {
        return Err(Error::Format(format!(
            "invalid disposition type token: {:?}",
            type_token
        )));
    }

    let mut parameters = HashMap::new();
    for segment in segments {
        let segment = segment.trim();
        if segment.is_empty() {
            // tolerate a trailing semicolon
            continue;
        }

        let (name, value) = segment
            .split_once('=')
            .ok_or_else(|| Error::Format(format!("parameter without '=': {:?}", segment)))?;
        let name = name.trim().to_lowercase();
        let value = value.trim();

        let decoded = if let Some(base) = name.strip_suffix('*') {
            if !is_token(base) {
                return Err(Error::Format(format!("invalid parameter name: {:?}", name)));
            }
            parse_ext_value(value)?
        } else {
            if !is_token(&name) {
                return Err(Error::Format(format!("invalid parameter name: {:?}", name)));
            }
            parse_value(value)?
        };

        if parameters.insert(name.clone(), decoded).is_some() {
            return Err(Error::Format(format!("duplicate parameter: {:?}", name)));
        }
    }

    Ok(Disposition {
        disposition_type: DispositionType::from_token(type_token),
        parameters,
    })
}

/// Splits a header value on `;`, ignoring separators inside a
/// quoted-string.
fn split_segments(v: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;
    let mut escaped = false;
    for (i, c) in v.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' if in_quotes => escaped = true,
            '"' => in_quotes = !in_quotes,
            ';' if !in_quotes => {
                segments.push(&v[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    segments.push(&v[start..]);
    segments
}

/// Parses a plain parameter value: either a bare token or a
/// quoted-string with `\X` escapes.
fn parse_value(value: &str) -> Result<String> {
    if !value.starts_with('"') {
        if !is_token(value) {
            return Err(Error::Format(format!("invalid parameter value: {:?}", value)));
        }
        return Ok(value.to_string());
    }

    let mut out = String::with_capacity(value.len());
    let mut chars = value[1..].char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => {
                let (_, escaped) = chars.next().ok_or_else(|| {
                    Error::Format("unterminated quoted-string".to_string())
                })?;
                out.push(escaped);
            }
            '"' => {
                // i is relative to the slice past the opening quote
                if !value[1 + i + 1..].is_empty() {
                    return Err(Error::Format(format!(
                        "characters after closing quote: {:?}",
                        value
                    )));
                }
                return Ok(out);
            }
            _ => out.push(c),
        }
    }
    Err(Error::Format("unterminated quoted-string".to_string()))
}

/// Parses an RFC 5987 ext-value: `charset "'" [language] "'" value-chars`.
fn parse_ext_value(value: &str) -> Result<String> {
    let mut parts = value.splitn(3, '\'');
    let (charset, _language, encoded) = match (parts.next(), parts.next(), parts.next()) {
        (Some(charset), Some(language), Some(encoded)) => (charset, language, encoded),
        _ => {
            return Err(Error::Format(format!(
                "malformed extended value: {:?}",
                value
            )))
        }
    };

    if !is_supported_charset(charset) {
        return Err(Error::Format(format!("unsupported charset: {:?}", charset)));
    }

    decode_extended(charset, encoded)
}
