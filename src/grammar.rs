//! Grammar validation helpers for header tokens.
//!
//! Based on RFC 2616 token and RFC 5987 attr-char definitions.

/// Reports whether the character is a 'separator' as defined by RFC 2616.
///
/// separators := "(" / ")" / "<" / ">" / "@" / "," / ";" / ":" / "\" / <">
///             / "/" / "[" / "]" / "?" / "=" / "{" / "}" / SP / HT
pub fn is_separator(c: char) -> bool {
    matches!(
        c,
        '(' | ')' | '<' | '>' | '@' | ',' | ';' | ':' | '\\' | '"' | '/' | '[' | ']' | '?' | '='
            | '{' | '}' | ' ' | '\t'
    )
}

/// Reports whether the character is in 'token' as defined by RFC 2616.
///
/// token := 1*<any CHAR except CTLs or separators>
pub fn is_token_char(c: char) -> bool {
    c > '\x20' && c < '\x7f' && !is_separator(c)
}

/// Reports whether the string is a valid 'token' as defined by RFC 2616.
///
/// A token must be non-empty and contain only valid token characters.
pub fn is_token(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_token_char)
}

/// Reports whether the byte is in 'attr-char' as defined by RFC 5987.
///
/// attr-char := ALPHA / DIGIT / "!" / "#" / "$" / "&" / "+" / "-" / "."
///            / "^" / "_" / "`" / "|" / "~"
///
/// Bytes outside this set must be percent-encoded inside an extended
/// parameter value.
pub fn is_attr_char(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'!' | b'#' | b'$' | b'&' | b'+' | b'-' | b'.' | b'^' | b'_' | b'`' | b'|' | b'~'
        )
}

/// Reports whether the character survives the ASCII fallback unchanged:
/// printable ASCII excluding `"` and `\`, which a quoted-string cannot
/// carry without escaping.
pub fn is_display_safe(c: char) -> bool {
    ('\x20'..='\x7e').contains(&c) && c != '"' && c != '\\'
}
