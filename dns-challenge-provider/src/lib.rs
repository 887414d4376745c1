//! # dns-challenge-provider
//!
//! DNS provider clients for publishing ACME DNS-01 challenge records.
//!
//! ## Supported Providers
//!
//! | Provider | Feature Flag | Auth Method |
//! |----------|-------------|-------------|
//! | [Aliyun DNS](https://www.aliyun.com/product/dns) | `aliyun` | HMAC-SHA256 (V3) |
//! | [DNSPod (Tencent Cloud)](https://www.dnspod.cn/) | `dnspod` | TC3-HMAC-SHA256 |
//!
//! ## Feature Flags
//!
//! - **`all-providers`** *(default)*: enable both providers.
//! - **`aliyun`** / **`dnspod`**: enable a single provider.
//! - **`native-tls`** *(default)* or **`rustls`**: TLS backend for `reqwest`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dns_challenge_provider::{
//!     create_provider, CreateDnsRecordRequest, DnsRecordType, ProviderCredentials, ProviderType,
//!     RecordQuery,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let platform: ProviderType = "tencent".parse()?;
//!     let credentials = ProviderCredentials::from_key_pair(platform, "secret-id", "secret-key")?;
//!     let provider = create_provider(credentials)?;
//!
//!     let query = RecordQuery {
//!         domain: "example.com".to_string(),
//!         name: "_acme-challenge".to_string(),
//!         record_type: Some(DnsRecordType::Txt),
//!     };
//!     for record in provider.list_records(&query).await? {
//!         provider.delete_record(&record.id, &record.domain).await?;
//!     }
//!
//!     provider
//!         .create_record(&CreateDnsRecordRequest {
//!             domain: "example.com".to_string(),
//!             name: "_acme-challenge".to_string(),
//!             record_type: DnsRecordType::Txt,
//!             value: "token".to_string(),
//!             ttl: 600,
//!         })
//!         .await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All provider operations return [`Result<T, ProviderError>`](ProviderError).
//! Each request is sent once; callers decide what a failure means for them.
//! [`ProviderError::is_expected`] separates user-facing failures (bad
//! credentials, missing domain) from transport or parsing failures.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

pub use factory::create_provider;

// Re-export core trait only (internal traits are not exported)
pub use traits::DnsProvider;

pub use types::{
    CreateDnsRecordRequest, CredentialValidationError, DnsRecord, DnsRecordType,
    ProviderCredentials, ProviderType, RecordQuery,
};

pub use utils::{mask_secret, truncate_for_log};

// Re-export concrete providers (behind feature flags)
#[cfg(feature = "aliyun")]
pub use providers::{AliyunProvider, AliyunProviderBuilder};

#[cfg(feature = "dnspod")]
pub use providers::{DnspodProvider, DnspodProviderBuilder};
