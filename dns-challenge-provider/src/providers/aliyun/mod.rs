//! 阿里云 DNS Provider

mod error;
mod http;
mod provider;
mod sign;
mod types;

use reqwest::Client;

use crate::error::Result;
use crate::providers::common::{Endpoint, create_http_client};

pub(crate) use types::{
    AddDomainRecordRequest, AddDomainRecordResponse, DeleteDomainRecordRequest,
    DeleteDomainRecordResponse, DescribeSubDomainRecordsRequest,
    DescribeSubDomainRecordsResponse, serialize_to_query_string,
};

pub(crate) const ALIYUN_DNS_VERSION: &str = "2015-01-09";
/// 未指定地域时使用的默认地域
pub(crate) const DEFAULT_REGION_ID: &str = "cn-hangzhou";
/// 空 body 的 SHA256 hash (固定值)
pub(crate) const EMPTY_BODY_SHA256: &str =
    "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
/// `DescribeSubDomainRecords` 单页最大记录数
pub(crate) const MAX_PAGE_SIZE: u32 = 500;

/// 按地域生成 API host
pub(crate) fn regional_host(region_id: &str) -> String {
    format!("alidns.{region_id}.aliyuncs.com")
}

/// Aliyun DNS provider implementation.
///
/// Authenticates via HMAC-SHA256 V3 signing with Access Key ID/Secret.
///
/// # Construction
///
/// ```rust,no_run
/// use dns_challenge_provider::AliyunProvider;
///
/// let provider = AliyunProvider::builder(
///     "your-access-key-id".to_string(),
///     "your-access-key-secret".to_string(),
/// )
/// .region_id("cn-shanghai")
/// .build()?;
/// # Ok::<(), dns_challenge_provider::ProviderError>(())
/// ```
pub struct AliyunProvider {
    pub(crate) client: Client,
    pub(crate) access_key_id: String,
    pub(crate) access_key_secret: String,
    pub(crate) endpoint: Endpoint,
}

/// Builder for [`AliyunProvider`] with configurable region and endpoint.
pub struct AliyunProviderBuilder {
    access_key_id: String,
    access_key_secret: String,
    region_id: Option<String>,
    endpoint: Option<String>,
}

impl AliyunProviderBuilder {
    fn new(access_key_id: String, access_key_secret: String) -> Self {
        Self {
            access_key_id,
            access_key_secret,
            region_id: None,
            endpoint: None,
        }
    }

    /// Set the region used to derive the API host (default: `cn-hangzhou`).
    #[must_use]
    pub fn region_id(mut self, region_id: impl Into<String>) -> Self {
        self.region_id = Some(region_id.into());
        self
    }

    /// Override the base URL (`scheme://host[:port]`). Takes precedence over the region.
    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Build the [`AliyunProvider`] instance.
    ///
    /// # Errors
    ///
    /// Fails if the endpoint override is not a valid URL or the HTTP client
    /// cannot be created.
    pub fn build(self) -> Result<AliyunProvider> {
        let region_id = self.region_id.as_deref().unwrap_or(DEFAULT_REGION_ID);
        let endpoint =
            Endpoint::resolve(self.endpoint.as_deref(), &regional_host(region_id), "aliyun")?;

        Ok(AliyunProvider {
            client: create_http_client("aliyun")?,
            access_key_id: self.access_key_id,
            access_key_secret: self.access_key_secret,
            endpoint,
        })
    }
}

impl AliyunProvider {
    /// Creates a new Aliyun provider for the default region.
    ///
    /// # Errors
    ///
    /// Fails if the HTTP client cannot be created.
    pub fn new(access_key_id: String, access_key_secret: String) -> Result<Self> {
        Self::builder(access_key_id, access_key_secret).build()
    }

    /// Returns a builder for customizing the provider configuration.
    pub fn builder(access_key_id: String, access_key_secret: String) -> AliyunProviderBuilder {
        AliyunProviderBuilder::new(access_key_id, access_key_secret)
    }
}
