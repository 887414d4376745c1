//! Log sanitization utilities
//!
//! Prevents sensitive data (API secrets, access key ids, oversized response
//! bodies) from being fully exposed in debug/error logs.

/// Maximum number of characters to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading characters kept visible by [`mask_secret`].
const MASK_VISIBLE_PREFIX: usize = 4;

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a string for safe logging.
///
/// Returns the original string if it's within the limit,
/// otherwise returns the first `TRUNCATE_LIMIT` characters with a suffix
/// indicating the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Mask a credential for logging, keeping only a short prefix.
///
/// Values no longer than the prefix are fully masked.
pub fn mask_secret(s: &str) -> String {
    if s.chars().count() <= MASK_VISIBLE_PREFIX {
        "***".to_string()
    } else {
        let prefix: String = s.chars().take(MASK_VISIBLE_PREFIX).collect();
        format!("{prefix}***")
    }
}
