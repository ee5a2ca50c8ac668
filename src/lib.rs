//! Content-Disposition header value formatting and parsing.
//!
//! This crate provides the RFC 6266 header machinery:
//! - Header value formatting with legacy quoted-string filenames
//! - RFC 5987 extended (`filename*`) parameters for exact non-ASCII names
//! - Header value parsing with extended-value preference (RFC 6266 §4.3)
//! - Optional memoization of repeated formatter calls
//!
//! Both core operations are pure and synchronous; setting the header on
//! a response is the caller's responsibility.

pub mod cache;
pub mod charset;
pub mod error;
pub mod format;
pub mod grammar;
pub mod parse;

// Re-export commonly used types
pub use cache::{cached_format, reset_global_cache, DispositionCache};
pub use error::{Error, Result};
pub use format::{attachment, format_disposition, inline, DispositionType, Fallback, FormatOptions};
pub use parse::{parse_disposition, Disposition};
