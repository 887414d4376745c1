//! 腾讯云 `DNSPod` Provider

mod error;
mod http;
mod provider;
mod sign;
mod types;

use reqwest::Client;

use crate::error::Result;
use crate::providers::common::{Endpoint, create_http_client};

pub(crate) use types::{
    CreateRecordRequest, CreateRecordResponse, DeleteRecordRequest, DeleteRecordResponse,
    DescribeRecordListRequest, RecordListResponse, TencentResponse,
};

pub(crate) const DNSPOD_API_HOST: &str = "dnspod.tencentcloudapi.com";
pub(crate) const DNSPOD_SERVICE: &str = "dnspod";
pub(crate) const DNSPOD_VERSION: &str = "2021-03-23";
/// 默认解析线路
pub(crate) const DEFAULT_RECORD_LINE: &str = "默认";
/// `DescribeRecordList` 单页最大记录数
pub(crate) const MAX_PAGE_SIZE: u32 = 3000;

/// 腾讯云 `DNSPod` Provider
///
/// Authenticates via TC3-HMAC-SHA256 signing with a Secret ID/Key pair.
/// The DNS API is served globally, so requests carry no `X-TC-Region`.
pub struct DnspodProvider {
    pub(crate) client: Client,
    pub(crate) secret_id: String,
    pub(crate) secret_key: String,
    pub(crate) endpoint: Endpoint,
}

/// `DNSPod` Provider Builder
pub struct DnspodProviderBuilder {
    secret_id: String,
    secret_key: String,
    endpoint: Option<String>,
}

impl DnspodProviderBuilder {
    fn new(secret_id: String, secret_key: String) -> Self {
        Self {
            secret_id,
            secret_key,
            endpoint: None,
        }
    }

    /// 覆盖 API 地址（`scheme://host[:port]`）
    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn build(self) -> Result<DnspodProvider> {
        let endpoint = Endpoint::resolve(self.endpoint.as_deref(), DNSPOD_API_HOST, "dnspod")?;
        Ok(DnspodProvider {
            client: create_http_client("dnspod")?,
            secret_id: self.secret_id,
            secret_key: self.secret_key,
            endpoint,
        })
    }
}

impl DnspodProvider {
    pub fn new(secret_id: String, secret_key: String) -> Result<Self> {
        Self::builder(secret_id, secret_key).build()
    }

    pub fn builder(secret_id: String, secret_key: String) -> DnspodProviderBuilder {
        DnspodProviderBuilder::new(secret_id, secret_key)
    }
}
