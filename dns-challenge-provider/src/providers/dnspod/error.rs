//! `DNSPod` 错误映射

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::DnspodProvider;

/// `DNSPod` 错误码映射
/// 参考: <https://cloud.tencent.com/document/api/1427/56192>
impl ProviderErrorMapper for DnspodProvider {
    fn provider_name(&self) -> &'static str {
        "dnspod"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.code.as_deref() {
            // ============ 认证错误 ============
            Some(
                "AuthFailure"
                | "AuthFailure.InvalidAuthorization"
                | "AuthFailure.InvalidSecretId"
                | "AuthFailure.MFAFailure"
                | "AuthFailure.SecretIdNotFound"
                | "AuthFailure.SignatureExpire"
                | "AuthFailure.SignatureFailure"
                | "AuthFailure.TokenFailure"
                | "InvalidParameter.InvalidSecretId"
                | "InvalidParameter.InvalidSignature",
            ) => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // ============ 配额限制 ============
            Some(
                "LimitExceeded"
                | "LimitExceeded.SubdomainLevelLimit"
                | "LimitExceeded.SubdomainRollLimit"
                | "RequestLimitExceeded.GlobalRegionUinLimitExceeded"
                | "RequestLimitExceeded.IPLimitExceeded"
                | "RequestLimitExceeded.UinLimitExceeded",
            ) => ProviderError::QuotaExceeded {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // ============ 频率限流 ============
            Some(
                "RequestLimitExceeded"
                | "RequestLimitExceeded.RequestLimitExceeded"
                | "FailedOperation.FrequencyLimit"
                | "InvalidParameter.OperationIsTooFrequent",
            ) => ProviderError::RateLimited {
                provider: self.provider_name().to_string(),
                retry_after: None,
                raw_message: Some(raw.message),
            },

            // ============ 记录已存在 ============
            Some("InvalidParameter.DomainRecordExist") => ProviderError::RecordExists {
                provider: self.provider_name().to_string(),
                record_name: context
                    .record_name
                    .unwrap_or_else(|| "<unknown>".to_string()),
                raw_message: Some(raw.message),
            },

            // ============ 记录不存在 ============
            Some("ResourceNotFound.NoDataOfRecord" | "InvalidParameter.RecordIdInvalid") => {
                ProviderError::RecordNotFound {
                    provider: self.provider_name().to_string(),
                    record_id: context.record_id.unwrap_or_default(),
                    raw_message: Some(raw.message),
                }
            }

            // ============ 域名不存在 ============
            Some("ResourceNotFound.NoDataOfDomain" | "InvalidParameterValue.DomainNotExists") => {
                ProviderError::DomainNotFound {
                    provider: self.provider_name().to_string(),
                    domain: context.domain.unwrap_or_else(|| "<unknown>".to_string()),
                    raw_message: Some(raw.message),
                }
            }

            // ============ 权限/操作被拒绝 (含域名锁定) ============
            Some(
                "OperationDenied"
                | "OperationDenied.AccessDenied"
                | "OperationDenied.DomainOwnerAllowedOnly"
                | "OperationDenied.NoPermissionToOperateDomain"
                | "OperationDenied.NotGrantedByOwner"
                | "UnauthorizedOperation"
                | "AuthFailure.UnauthorizedOperation"
                | "FailedOperation.NotDomainOwner"
                | "FailedOperation.DomainIsLocked"
                | "FailedOperation.DomainIsSpam"
                | "FailedOperation.AccountIsLocked",
            ) => ProviderError::PermissionDenied {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // ============ 参数无效 - 线路 ============
            Some("InvalidParameter.RecordLineInvalid" | "InvalidParameter.LineNotExist") => {
                ProviderError::InvalidParameter {
                    provider: self.provider_name().to_string(),
                    param: "line".to_string(),
                    detail: raw.message,
                }
            }

            // ============ 参数无效 - 记录类型 ============
            Some("InvalidParameter.RecordTypeInvalid") => ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "type".to_string(),
                detail: raw.message,
            },

            // ============ 参数无效 - 记录值 ============
            Some(
                "InvalidParameter.RecordValueInvalid" | "InvalidParameter.RecordValueLengthInvalid",
            ) => ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "value".to_string(),
                detail: raw.message,
            },

            // ============ 参数无效 - 子域名 ============
            Some("InvalidParameter.SubdomainInvalid") => ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "subdomain".to_string(),
                detail: raw.message,
            },

            // ============ 参数无效 - TTL ============
            Some("LimitExceeded.RecordTtlLimit") => ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "ttl".to_string(),
                detail: raw.message,
            },

            // ============ 参数无效 - 域名 ============
            Some(
                "InvalidParameter.DomainInvalid"
                | "InvalidParameter.DomainTooLong"
                | "InvalidParameter.DomainTypeInvalid",
            ) => ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "domain".to_string(),
                detail: raw.message,
            },

            // ============ 其他错误 fallback ============
            _ => self.unknown_error(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> DnspodProvider {
        DnspodProvider::new("sid".to_string(), "skey".to_string()).unwrap()
    }

    fn ctx() -> ErrorContext {
        ErrorContext {
            record_name: Some("_acme-challenge".to_string()),
            record_id: Some("1001".to_string()),
            domain: Some("example.com".to_string()),
        }
    }

    #[test]
    fn auth_failure_maps_to_invalid_credentials() {
        let p = provider();
        for code in [
            "AuthFailure",
            "AuthFailure.SignatureFailure",
            "AuthFailure.SecretIdNotFound",
        ] {
            let err = p.map_error(RawApiError::with_code(code, "auth failed"), ctx());
            assert!(
                matches!(err, ProviderError::InvalidCredentials { .. }),
                "expected InvalidCredentials for code '{code}', got {err:?}"
            );
        }
    }

    #[test]
    fn rate_limit_codes_map_to_rate_limited() {
        let p = provider();
        for code in [
            "RequestLimitExceeded",
            "FailedOperation.FrequencyLimit",
            "InvalidParameter.OperationIsTooFrequent",
        ] {
            let err = p.map_error(RawApiError::with_code(code, "slow down"), ctx());
            assert!(
                matches!(err, ProviderError::RateLimited { retry_after: None, .. }),
                "expected RateLimited for code '{code}', got {err:?}"
            );
        }
    }

    #[test]
    fn no_data_of_record_maps_to_record_not_found() {
        let err = provider().map_error(
            RawApiError::with_code("ResourceNotFound.NoDataOfRecord", "记录列表为空。"),
            ctx(),
        );
        assert!(matches!(
            err,
            ProviderError::RecordNotFound { ref record_id, .. } if record_id == "1001"
        ));
    }

    #[test]
    fn record_exist_uses_context_name() {
        let err = provider().map_error(
            RawApiError::with_code("InvalidParameter.DomainRecordExist", "exists"),
            ctx(),
        );
        assert!(matches!(
            err,
            ProviderError::RecordExists { ref record_name, .. } if record_name == "_acme-challenge"
        ));
    }

    #[test]
    fn domain_not_found_without_context() {
        let err = provider().map_error(
            RawApiError::with_code("ResourceNotFound.NoDataOfDomain", "no domain"),
            ErrorContext::default(),
        );
        assert!(matches!(
            err,
            ProviderError::DomainNotFound { ref domain, .. } if domain == "<unknown>"
        ));
    }

    #[test]
    fn locked_domain_is_permission_denied() {
        let err = provider().map_error(
            RawApiError::with_code("FailedOperation.DomainIsLocked", "locked"),
            ctx(),
        );
        assert!(matches!(err, ProviderError::PermissionDenied { .. }));
    }

    #[test]
    fn unknown_code_falls_back() {
        let err = provider().map_error(
            RawApiError::with_code("SomeNewError.NeverSeenBefore", "?"),
            ctx(),
        );
        assert!(matches!(
            err,
            ProviderError::Unknown { ref raw_code, .. }
                if raw_code.as_deref() == Some("SomeNewError.NeverSeenBefore")
        ));
    }
}
