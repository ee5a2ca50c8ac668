//! Content-Disposition header value formatting.
//!
//! Implements the RFC 6266 `disposition-type *( ";" disposition-parm )`
//! grammar with RFC 5987 extended filename parameters.

use crate::charset::{ascii_fallback, percent_encode_attr, quote_escape};
use crate::error::{Error, Result};
use crate::grammar::{is_display_safe, is_token};

/// The disposition of the response body.
///
/// `inline` implies default processing; `attachment` asks the recipient
/// to save the body locally. Any other valid token is carried through
/// as an extension type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum DispositionType {
    /// Save the body locally, prompting for a filename.
    #[default]
    Attachment,
    /// Display the body as part of the page or document.
    Inline,
    /// Extension type, handled by recipients like an attachment.
    Ext(String),
}

impl DispositionType {
    /// Builds a disposition type from a token, recognizing the two
    /// well-known values case-insensitively.
    pub fn from_token(token: &str) -> Self {
        if token.eq_ignore_ascii_case("attachment") {
            DispositionType::Attachment
        } else if token.eq_ignore_ascii_case("inline") {
            DispositionType::Inline
        } else {
            DispositionType::Ext(token.to_lowercase())
        }
    }

    /// Returns the serialized token.
    pub fn as_str(&self) -> &str {
        match self {
            DispositionType::Attachment => "attachment",
            DispositionType::Inline => "inline",
            DispositionType::Ext(token) => token,
        }
    }
}

/// Policy for the legacy `filename` parameter when the exact filename
/// cannot be carried in a quoted-string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Fallback {
    /// Derive an ASCII approximation with `?` substitution.
    #[default]
    Auto,
    /// Emit only the extended `filename*` parameter.
    Disabled,
    /// Use a caller-supplied fallback name. Must be printable ASCII.
    Fixed(String),
}

/// Options for [`format_disposition`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FormatOptions {
    /// Disposition type token, `attachment` by default.
    pub disposition_type: DispositionType,
    /// Fallback policy for non-ASCII filenames.
    pub fallback: Fallback,
}

/// Serializes a Content-Disposition header value conforming to RFC 6266.
///
/// When the filename is printable ASCII it is carried in a single
/// quoted-string `filename` parameter with no extended clause, keeping
/// the header small and legacy-compatible. Otherwise a `filename*`
/// parameter carries the exact UTF-8 name and, unless disabled, a lossy
/// ASCII `filename` parameter rides along for older clients.
///
/// # Examples
///
/// ```
/// use http_disposition::{format_disposition, FormatOptions};
///
/// let value = format_disposition(Some("plans.pdf"), &FormatOptions::default()).unwrap();
/// assert_eq!(value, "attachment; filename=\"plans.pdf\"");
///
/// let value = format_disposition(Some("планы.pdf"), &FormatOptions::default()).unwrap();
/// assert_eq!(
///     value,
///     "attachment; filename=\"?????.pdf\"; filename*=UTF-8''%D0%BF%D0%BB%D0%B0%D0%BD%D1%8B.pdf"
/// );
/// ```
pub fn format_disposition(filename: Option<&str>, options: &FormatOptions) -> Result<String> {
    if let DispositionType::Ext(token) = &options.disposition_type {
        if !is_token(token) {
            return Err(Error::Type(token.clone()));
        }
    }

    let mut result = String::from(options.disposition_type.as_str());

    let name = match filename {
        Some(name) => name,
        None => return Ok(result),
    };

    if name.chars().all(|c| ('\x20'..='\x7e').contains(&c)) {
        // Quoting protects " and \; no extended clause is needed.
        result.push_str("; filename=\"");
        result.push_str(&quote_escape(name));
        result.push('"');
        return Ok(result);
    }

    match &options.fallback {
        Fallback::Auto => {
            result.push_str("; filename=\"");
            result.push_str(&quote_escape(&ascii_fallback(name)));
            result.push('"');
        }
        Fallback::Fixed(fallback) => {
            if !fallback.chars().all(is_display_safe) {
                return Err(Error::Type(format!(
                    "fallback filename must be printable ASCII: {:?}",
                    fallback
                )));
            }
            result.push_str("; filename=\"");
            result.push_str(fallback);
            result.push('"');
        }
        Fallback::Disabled => {}
    }

    result.push_str("; filename*=UTF-8''");
    result.push_str(&percent_encode_attr(name.as_bytes()));
    Ok(result)
}

/// Formats an `attachment` disposition with default options.
pub fn attachment(filename: Option<&str>) -> Result<String> {
    format_disposition(filename, &FormatOptions::default())
}

/// Formats an `inline` disposition with default options.
pub fn inline(filename: Option<&str>) -> Result<String> {
    format_disposition(
        filename,
        &FormatOptions {
            disposition_type: DispositionType::Inline,
            ..FormatOptions::default()
        },
    )
}
