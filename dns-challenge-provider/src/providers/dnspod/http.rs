//! `DNSPod` HTTP 请求

use chrono::Utc;
use serde::{Serialize, de::DeserializeOwned};

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};
use crate::utils::truncate_for_log;

use super::types::TencentError;
use super::{DNSPOD_VERSION, DnspodProvider, TencentResponse};

impl DnspodProvider {
    /// 执行腾讯云 API 请求
    ///
    /// 业务错误以 HTTP 200 + `Response.Error` 返回，先按 `Value` 解析再检查。
    pub(crate) async fn request<T: DeserializeOwned, B: Serialize>(
        &self,
        action: &str,
        body: &B,
        ctx: ErrorContext,
    ) -> Result<T> {
        let payload =
            serde_json::to_string(body).map_err(|e| ProviderError::SerializationError {
                provider: self.provider_name().to_string(),
                detail: e.to_string(),
            })?;

        log::debug!("[dnspod] Request Body: {payload}");

        let timestamp = Utc::now().timestamp();
        let authorization = self.sign(action, &payload, timestamp);

        let request = self
            .client
            .post(&self.endpoint.base_url)
            .header("Content-Type", "application/json; charset=utf-8")
            .header("Host", &self.endpoint.host)
            .header("X-TC-Action", action)
            .header("X-TC-Version", DNSPOD_VERSION)
            .header("X-TC-Timestamp", timestamp.to_string())
            .header("Authorization", authorization)
            .body(payload);

        let (status, response_text) = HttpUtils::execute_request(
            request,
            self.provider_name(),
            "POST",
            &format!("Action: {action}"),
        )
        .await?;

        let parsed = HttpUtils::parse_json::<TencentResponse>(&response_text, self.provider_name());
        let envelope = match parsed {
            Ok(envelope) => envelope,
            Err(_) if status >= 400 => {
                return Err(ProviderError::NetworkError {
                    provider: self.provider_name().to_string(),
                    detail: format!("HTTP {status}: {}", truncate_for_log(&response_text)),
                });
            }
            Err(e) => return Err(e),
        };

        if let Some(error) = envelope.response.get("Error") {
            let error: TencentError =
                serde_json::from_value(error.clone()).map_err(|e| self.parse_error(e))?;
            log::error!("[dnspod] API error: {} - {}", error.code, error.message);
            return Err(self.map_error(RawApiError::with_code(error.code, error.message), ctx));
        }

        serde_json::from_value(envelope.response).map_err(|e| self.parse_error(e))
    }
}
