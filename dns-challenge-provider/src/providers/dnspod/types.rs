//! 腾讯云 `DNSPod` API 类型定义

use serde::{Deserialize, Serialize};

// ============ 腾讯云 API 响应结构 ============

/// 通用响应外壳，业务数据与错误都在 `Response` 内
#[derive(Debug, Deserialize)]
pub struct TencentResponse {
    #[serde(rename = "Response")]
    pub response: serde_json::Value,
}

/// `Response.Error`
#[derive(Debug, Deserialize)]
pub struct TencentError {
    #[serde(rename = "Code")]
    pub code: String,
    #[serde(rename = "Message")]
    pub message: String,
}

// ============ 请求结构 ============

#[derive(Debug, Serialize)]
pub struct DescribeRecordListRequest {
    #[serde(rename = "Domain")]
    pub domain: String,
    #[serde(rename = "Subdomain")]
    pub subdomain: String,
    #[serde(rename = "RecordType", skip_serializing_if = "Option::is_none")]
    pub record_type: Option<String>,
    #[serde(rename = "Limit")]
    pub limit: u32,
}

#[derive(Debug, Serialize)]
pub struct CreateRecordRequest {
    #[serde(rename = "Domain")]
    pub domain: String,
    #[serde(rename = "SubDomain")]
    pub sub_domain: String,
    #[serde(rename = "RecordType")]
    pub record_type: String,
    #[serde(rename = "RecordLine")]
    pub record_line: String,
    #[serde(rename = "Value")]
    pub value: String,
    #[serde(rename = "TTL")]
    pub ttl: u32,
}

#[derive(Debug, Serialize)]
pub struct DeleteRecordRequest {
    #[serde(rename = "Domain")]
    pub domain: String,
    #[serde(rename = "RecordId")]
    pub record_id: u64,
}

// ============ 记录相关结构 ============

/// `DescribeRecordList` 响应
#[derive(Debug, Deserialize)]
pub struct RecordListResponse {
    #[serde(rename = "RecordList")]
    pub record_list: Option<Vec<DnspodRecord>>,
    #[serde(rename = "RecordCountInfo")]
    pub record_count_info: Option<RecordCountInfo>,
}

#[derive(Debug, Deserialize)]
pub struct RecordCountInfo {
    #[serde(rename = "TotalCount")]
    pub total_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct DnspodRecord {
    #[serde(rename = "RecordId")]
    pub record_id: u64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Type")]
    pub record_type: String,
    #[serde(rename = "Value")]
    pub value: String,
    #[serde(rename = "TTL")]
    pub ttl: u32,
}

/// `CreateRecord` 响应
#[derive(Debug, Deserialize)]
pub struct CreateRecordResponse {
    #[serde(rename = "RecordId")]
    pub record_id: u64,
}

/// `DeleteRecord` 响应（只有 `RequestId`）
#[derive(Debug, Deserialize)]
pub struct DeleteRecordResponse {}
