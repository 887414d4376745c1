//! Utility modules.

/// Log sanitization utilities to prevent sensitive data exposure.
pub mod log_sanitizer;

pub use log_sanitizer::{mask_secret, truncate_for_log};
