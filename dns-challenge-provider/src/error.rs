use serde::{Deserialize, Serialize};

/// Failure of a call against Aliyun DNS or `DNSPod`.
///
/// Each call is made once. Vendor error codes are folded into the variants
/// below; `provider` names the platform (`aliyun` or `dnspod`). Transport
/// failures ([`NetworkError`](Self::NetworkError), [`Timeout`](Self::Timeout),
/// [`RateLimited`](Self::RateLimited)) reach the caller unchanged, and the
/// hook's error policy decides whether the challenge carries on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// Connection, TLS or HTTP 502/503/504 failure.
    NetworkError { provider: String, detail: String },

    /// Key id unknown, disabled, or signature rejected.
    InvalidCredentials {
        provider: String,
        raw_message: Option<String>,
    },

    /// An identical record is already published.
    RecordExists {
        provider: String,
        record_name: String,
        raw_message: Option<String>,
    },

    /// Record id does not exist (or, for `DNSPod` listings, no record matched).
    RecordNotFound {
        provider: String,
        record_id: String,
        raw_message: Option<String>,
    },

    /// Request rejected for a bad argument, or a local argument check failed.
    InvalidParameter {
        provider: String,
        param: String,
        detail: String,
    },

    /// `platform_type` names no compiled-in provider.
    UnsupportedProvider { provider: String },

    /// Record limit of the zone reached.
    QuotaExceeded {
        provider: String,
        raw_message: Option<String>,
    },

    /// Throttled. `retry_after` is taken from the `Retry-After` header.
    RateLimited {
        provider: String,
        retry_after: Option<u64>,
        raw_message: Option<String>,
    },

    /// No response within the client timeout.
    Timeout { provider: String, detail: String },

    /// Zone is not hosted in this account.
    DomainNotFound {
        provider: String,
        domain: String,
        raw_message: Option<String>,
    },

    /// Key lacks the DNS permission, or the zone is locked.
    PermissionDenied {
        provider: String,
        raw_message: Option<String>,
    },

    /// Response body could not be decoded.
    ParseError { provider: String, detail: String },

    /// Request body could not be encoded.
    SerializationError { provider: String, detail: String },

    /// Vendor code without a dedicated variant.
    Unknown {
        provider: String,
        raw_code: Option<String>,
        raw_message: String,
    },
}

impl ProviderError {
    /// Caused by configuration or account state rather than the network.
    /// Such errors are logged at `warn`, the rest at `error`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. }
                | Self::RecordExists { .. }
                | Self::RecordNotFound { .. }
                | Self::InvalidParameter { .. }
                | Self::UnsupportedProvider { .. }
                | Self::QuotaExceeded { .. }
                | Self::DomainNotFound { .. }
                | Self::PermissionDenied { .. }
        )
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::InvalidCredentials {
                provider,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Invalid credentials: {msg}")
                } else {
                    write!(f, "[{provider}] Invalid credentials")
                }
            }
            Self::RecordExists {
                provider,
                record_name,
                ..
            } => {
                write!(f, "[{provider}] Record '{record_name}' already exists")
            }
            Self::RecordNotFound {
                provider,
                record_id,
                ..
            } => {
                write!(f, "[{provider}] Record '{record_id}' not found")
            }
            Self::InvalidParameter {
                provider,
                param,
                detail,
            } => {
                write!(f, "[{provider}] Invalid parameter '{param}': {detail}")
            }
            Self::UnsupportedProvider { provider } => {
                write!(f, "Unsupported platform: {provider}")
            }
            Self::QuotaExceeded { provider, .. } => {
                write!(f, "[{provider}] Quota exceeded")
            }
            Self::RateLimited {
                provider,
                retry_after,
                ..
            } => {
                if let Some(secs) = retry_after {
                    write!(f, "[{provider}] Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "[{provider}] Rate limited")
                }
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::DomainNotFound {
                provider,
                domain,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Domain '{domain}' not found: {msg}")
                } else {
                    write!(f, "[{provider}] Domain '{domain}' not found")
                }
            }
            Self::PermissionDenied {
                provider,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Permission denied: {msg}")
                } else {
                    write!(f, "[{provider}] Permission denied")
                }
            }
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
            Self::SerializationError { provider, detail } => {
                write!(f, "[{provider}] Serialization error: {detail}")
            }
            Self::Unknown {
                provider,
                raw_code,
                raw_message,
            } => {
                if let Some(code) = raw_code {
                    write!(f, "[{provider}] {code}: {raw_message}")
                } else {
                    write!(f, "[{provider}] {raw_message}")
                }
            }
        }
    }
}

impl std::error::Error for ProviderError {}

pub type Result<T> = std::result::Result<T, ProviderError>;
