use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{CreateDnsRecordRequest, DnsRecord, RecordQuery};

/// Vendor error as it came off the wire: the `Code` and `Message` fields of
/// an Aliyun body or a DNSPod `Response.Error`.
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    pub code: Option<String>,
    pub message: String,
}

impl RawApiError {
    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// What the failing call was about. Filled in by each operation so the
/// mapped [`ProviderError`] can name the record or zone.
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    pub record_name: Option<String>,
    pub record_id: Option<String>,
    pub domain: Option<String>,
}

/// Turns vendor error codes into [`ProviderError`] variants.
pub(crate) trait ProviderErrorMapper {
    fn provider_name(&self) -> &'static str;

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// Response body did not have the expected shape.
    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// Code with no dedicated variant.
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// A DNS zone host able to publish and withdraw challenge records.
///
/// Implemented by the Aliyun and `DNSPod` clients. Every method makes exactly
/// one API call and reports failure as a [`ProviderError`]; nothing is
/// retried.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// Short platform name used in logs and errors (`aliyun`, `dnspod`).
    fn id(&self) -> &'static str;

    /// Records at `query.name` inside `query.domain`, optionally filtered by
    /// type. `query.name` is relative (`_acme-challenge`, not the full name).
    /// No match yields an empty list, not an error.
    async fn list_records(&self, query: &RecordQuery) -> Result<Vec<DnsRecord>>;

    /// Add one record and return it with the id the provider assigned.
    async fn create_record(&self, req: &CreateDnsRecordRequest) -> Result<DnsRecord>;

    /// Remove the record `record_id` from zone `domain`.
    async fn delete_record(&self, record_id: &str, domain: &str) -> Result<()>;
}
