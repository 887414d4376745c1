//! Provider 公共工具函数

use std::time::Duration;

use hmac::{Hmac, Mac};
use reqwest::{Client, Url};
use sha2::Sha256;

use crate::error::{ProviderError, Result};
use crate::types::DnsRecordType;

type HmacSha256 = Hmac<Sha256>;

// ============ HTTP Client ============

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// 创建带超时配置的 HTTP Client
pub fn create_http_client(provider: &str) -> Result<Client> {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(|e| ProviderError::NetworkError {
            provider: provider.to_string(),
            detail: format!("Failed to create HTTP client: {e}"),
        })
}

// ============ Endpoint ============

/// 请求目标：基础 URL 与参与签名的 host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// `scheme://host[:port]`，不带末尾斜杠
    pub base_url: String,
    /// `host[:port]`
    pub host: String,
}

impl Endpoint {
    /// 默认 HTTPS 端点
    pub fn https(host: &str) -> Self {
        Self {
            base_url: format!("https://{host}"),
            host: host.to_string(),
        }
    }

    /// 解析自定义端点（`scheme://host[:port]`）
    pub fn parse(endpoint: &str, provider: &str) -> Result<Self> {
        let invalid = |detail: String| ProviderError::InvalidParameter {
            provider: provider.to_string(),
            param: "endpoint".to_string(),
            detail,
        };

        let url = Url::parse(endpoint.trim()).map_err(|e| invalid(format!("{endpoint}: {e}")))?;
        let host = url
            .host_str()
            .ok_or_else(|| invalid(format!("{endpoint}: missing host")))?;
        let host = match url.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        };

        Ok(Self {
            base_url: format!("{}://{host}", url.scheme()),
            host,
        })
    }

    /// 自定义端点优先，否则使用默认 host
    pub fn resolve(endpoint: Option<&str>, default_host: &str, provider: &str) -> Result<Self> {
        match endpoint {
            Some(e) => Self::parse(e, provider),
            None => Ok(Self::https(default_host)),
        }
    }
}

// ============ 记录类型转换 ============

/// 将字符串转换为 `DnsRecordType`
pub fn parse_record_type(record_type: &str, provider: &str) -> Result<DnsRecordType> {
    record_type
        .parse()
        .map_err(|detail| ProviderError::InvalidParameter {
            provider: provider.to_string(),
            param: "record_type".to_string(),
            detail,
        })
}

// ============ HMAC-SHA256 ============

/// HMAC-SHA256 计算（供 aliyun/dnspod 使用）
#[allow(clippy::expect_used)]
pub fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

// ============ 域名名称处理 ============

/// 去掉域名末尾的点
pub fn normalize_domain_name(name: &str) -> String {
    name.trim_end_matches('.').to_string()
}

/// 将相对名称转换为完整域名
/// 如: "www" + "example.com" -> "www.example.com"
/// 如: "@" + "example.com" -> "example.com"
pub fn relative_to_full_name(relative_name: &str, zone_name: &str) -> String {
    let zone = normalize_domain_name(zone_name);

    if relative_name == "@" || relative_name.is_empty() {
        zone
    } else {
        format!("{relative_name}.{zone}")
    }
}
