//! 阿里云 HTTP 请求

use chrono::Utc;
use serde::{Serialize, de::DeserializeOwned};

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};
use crate::utils::truncate_for_log;

use super::{ALIYUN_DNS_VERSION, AliyunProvider, EMPTY_BODY_SHA256, serialize_to_query_string};

/// 从响应体中提取 `Code`/`Message`
fn extract_api_error(value: &serde_json::Value) -> Option<RawApiError> {
    let code = value.get("Code").and_then(|v| v.as_str())?;
    let message = value
        .get("Message")
        .and_then(|v| v.as_str())
        .unwrap_or_default();
    Some(RawApiError::with_code(code, message))
}

impl AliyunProvider {
    /// 执行阿里云 API 请求 (RPC 风格: 参数通过 query string 传递, body 为空)
    pub(crate) async fn request<T: DeserializeOwned, B: Serialize>(
        &self,
        action: &str,
        params: &B,
        ctx: ErrorContext,
    ) -> Result<T> {
        let query_string = serialize_to_query_string(params)?;

        let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
        let nonce = uuid::Uuid::new_v4().to_string();

        let authorization = self.sign(action, &query_string, &timestamp, &nonce);

        let url = if query_string.is_empty() {
            format!("{}/", self.endpoint.base_url)
        } else {
            format!("{}/?{query_string}", self.endpoint.base_url)
        };

        let request = self
            .client
            .post(&url)
            .header("Host", &self.endpoint.host)
            .header("x-acs-action", action)
            .header("x-acs-version", ALIYUN_DNS_VERSION)
            .header("x-acs-date", &timestamp)
            .header("x-acs-signature-nonce", &nonce)
            .header("x-acs-content-sha256", EMPTY_BODY_SHA256)
            .header("Authorization", authorization);

        let (status, response_text) = HttpUtils::execute_request(
            request,
            self.provider_name(),
            "POST",
            &format!("{} (Action: {action})", self.endpoint.base_url),
        )
        .await?;

        if status >= 400 {
            if let Ok(value) = serde_json::from_str::<serde_json::Value>(&response_text)
                && let Some(raw) = extract_api_error(&value)
            {
                log::error!("[aliyun] API error: {:?} - {}", raw.code, raw.message);
                return Err(self.map_error(raw, ctx));
            }
            return Err(ProviderError::NetworkError {
                provider: self.provider_name().to_string(),
                detail: format!("HTTP {status}: {}", truncate_for_log(&response_text)),
            });
        }

        let value: serde_json::Value = HttpUtils::parse_json(&response_text, self.provider_name())?;

        if let Some(raw) = extract_api_error(&value) {
            log::error!("[aliyun] API error: {:?} - {}", raw.code, raw.message);
            return Err(self.map_error(raw, ctx));
        }

        serde_json::from_value(value).map_err(|e| self.parse_error(e))
    }
}
