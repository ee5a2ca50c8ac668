//! Memoization for the disposition formatter.
//!
//! The formatter is a pure function of its inputs, so identical calls
//! can be served from a map keyed on the exact `(filename, options)`
//! pair. Entries live for the process lifetime unless a cache is reset;
//! no eviction policy is imposed.

use crate::error::Result;
use crate::format::{format_disposition, FormatOptions};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

type CacheKey = (Option<String>, FormatOptions);

/// A memoizing wrapper around [`format_disposition`].
///
/// Keys are compared structurally, so two calls with equal inputs hit
/// the same entry regardless of where the strings were allocated. The
/// miss counter exposes whether the formatter actually ran, letting
/// tests verify a hit without resorting to timing.
#[derive(Debug, Default)]
pub struct DispositionCache {
    entries: Mutex<HashMap<CacheKey, String>>,
    misses: AtomicU64,
}

impl DispositionCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Formats a disposition, serving repeated inputs from the cache.
    ///
    /// Errors are returned to the caller and never cached; a failing
    /// input fails identically on every call.
    pub fn format(&self, filename: Option<&str>, options: &FormatOptions) -> Result<String> {
        let key = (filename.map(str::to_string), options.clone());
        let mut entries = self.entries.lock().unwrap();
        if let Some(value) = entries.get(&key) {
            return Ok(value.clone());
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let value = format_disposition(filename, options)?;
        entries.insert(key, value.clone());
        Ok(value)
    }

    /// Number of cached header values.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Reports whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of times the underlying formatter has run.
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Drops all entries and resets the miss counter, isolating cache
    /// effects between test cases.
    pub fn reset(&self) {
        self.entries.lock().unwrap().clear();
        self.misses.store(0, Ordering::Relaxed);
    }
}

/// Process-wide cache used by [`cached_format`].
static GLOBAL_CACHE: Lazy<DispositionCache> = Lazy::new(DispositionCache::new);

/// Formats a disposition through the process-wide cache.
///
/// # Examples
///
/// ```
/// use http_disposition::{cached_format, FormatOptions};
///
/// let first = cached_format(Some("планы.pdf"), &FormatOptions::default()).unwrap();
/// let second = cached_format(Some("планы.pdf"), &FormatOptions::default()).unwrap();
/// assert_eq!(first, second);
/// ```
pub fn cached_format(filename: Option<&str>, options: &FormatOptions) -> Result<String> {
    GLOBAL_CACHE.format(filename, options)
}

/// Clears the process-wide cache.
pub fn reset_global_cache() {
    GLOBAL_CACHE.reset();
}
