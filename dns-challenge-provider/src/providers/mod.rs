//! DNS Provider implementations

/// Shared utilities used by provider implementations.
pub mod common;

#[cfg(feature = "aliyun")]
mod aliyun;
#[cfg(feature = "dnspod")]
mod dnspod;

#[cfg(feature = "aliyun")]
pub use aliyun::{AliyunProvider, AliyunProviderBuilder};
#[cfg(feature = "dnspod")]
pub use dnspod::{DnspodProvider, DnspodProviderBuilder};
