//! 阿里云 API 类型定义和辅助函数

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{ProviderError, Result};

// ============ Query String ============

/// 将 `serde_json::Value` 展平为 key-value 对 (处理嵌套对象)
pub fn flatten_value(
    prefix: &str,
    value: &serde_json::Value,
    result: &mut BTreeMap<String, String>,
) {
    match value {
        serde_json::Value::Object(map) => {
            for (k, v) in map {
                let new_key = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{prefix}.{k}")
                };
                flatten_value(&new_key, v, result);
            }
        }
        serde_json::Value::Array(arr) => {
            for (i, v) in arr.iter().enumerate() {
                let new_key = format!("{}.{}", prefix, i + 1);
                flatten_value(&new_key, v, result);
            }
        }
        serde_json::Value::String(s) => {
            result.insert(prefix.to_string(), s.clone());
        }
        serde_json::Value::Number(n) => {
            result.insert(prefix.to_string(), n.to_string());
        }
        serde_json::Value::Bool(b) => {
            result.insert(prefix.to_string(), b.to_string());
        }
        serde_json::Value::Null => {}
    }
}

/// 将结构体序列化为按 key 排序、RFC3986 编码的 query string
pub fn serialize_to_query_string<T: Serialize>(params: &T) -> Result<String> {
    let value = serde_json::to_value(params).map_err(|e| ProviderError::SerializationError {
        provider: "aliyun".to_string(),
        detail: e.to_string(),
    })?;

    let mut flat_map = BTreeMap::new();
    flatten_value("", &value, &mut flat_map);

    let query_string = flat_map
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    Ok(query_string)
}

// ============ 请求结构 ============

#[derive(Debug, Serialize)]
pub struct DescribeSubDomainRecordsRequest {
    /// 完整子域名，如 `_acme-challenge.example.com`
    #[serde(rename = "SubDomain")]
    pub sub_domain: String,
    #[serde(rename = "DomainName")]
    pub domain_name: String,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub record_type: Option<String>,
    #[serde(rename = "PageSize")]
    pub page_size: u32,
}

#[derive(Debug, Serialize)]
pub struct AddDomainRecordRequest {
    #[serde(rename = "DomainName")]
    pub domain_name: String,
    #[serde(rename = "RR")]
    pub rr: String,
    #[serde(rename = "Type")]
    pub record_type: String,
    #[serde(rename = "Value")]
    pub value: String,
    #[serde(rename = "TTL")]
    pub ttl: u32,
}

#[derive(Debug, Serialize)]
pub struct DeleteDomainRecordRequest {
    #[serde(rename = "RecordId")]
    pub record_id: String,
}

// ============ 响应结构 ============

#[derive(Debug, Deserialize)]
pub struct DescribeSubDomainRecordsResponse {
    #[serde(rename = "DomainRecords")]
    pub domain_records: Option<DomainRecordsWrapper>,
    #[serde(rename = "TotalCount")]
    pub total_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct DomainRecordsWrapper {
    #[serde(rename = "Record")]
    pub record: Option<Vec<AliyunRecord>>,
}

#[derive(Debug, Deserialize)]
pub struct AliyunRecord {
    #[serde(rename = "RecordId")]
    pub record_id: String,
    #[serde(rename = "DomainName")]
    pub domain_name: Option<String>,
    #[serde(rename = "RR")]
    pub rr: String,
    #[serde(rename = "Type")]
    pub record_type: String,
    #[serde(rename = "Value")]
    pub value: String,
    #[serde(rename = "TTL")]
    pub ttl: u32,
}

#[derive(Debug, Deserialize)]
pub struct AddDomainRecordResponse {
    #[serde(rename = "RecordId")]
    pub record_id: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteDomainRecordResponse {}
