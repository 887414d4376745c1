//! `DNSPod` DnsProvider trait 实现

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::providers::common::{normalize_domain_name, parse_record_type};
use crate::traits::{DnsProvider, ErrorContext, ProviderErrorMapper};
use crate::types::{CreateDnsRecordRequest, DnsRecord, RecordQuery};

use super::{
    CreateRecordRequest, CreateRecordResponse, DEFAULT_RECORD_LINE, DeleteRecordRequest,
    DeleteRecordResponse, DescribeRecordListRequest, DnspodProvider, MAX_PAGE_SIZE,
    RecordListResponse,
};

#[async_trait]
impl DnsProvider for DnspodProvider {
    fn id(&self) -> &'static str {
        "dnspod"
    }

    async fn list_records(&self, query: &RecordQuery) -> Result<Vec<DnsRecord>> {
        let domain = normalize_domain_name(&query.domain);
        let req = DescribeRecordListRequest {
            domain: domain.clone(),
            subdomain: query.name.clone(),
            record_type: query.record_type.map(|t| t.as_str().to_string()),
            limit: MAX_PAGE_SIZE,
        };

        let ctx = ErrorContext {
            record_name: Some(query.name.clone()),
            domain: Some(domain.clone()),
            ..Default::default()
        };

        // DNSPod 在无记录时返回 ResourceNotFound.NoDataOfRecord
        let response: RecordListResponse =
            match self.request("DescribeRecordList", &req, ctx).await {
                Ok(resp) => resp,
                Err(ProviderError::RecordNotFound { .. }) => {
                    log::debug!("[dnspod] No records for {}.{domain}", query.name);
                    return Ok(Vec::new());
                }
                Err(e) => return Err(e),
            };

        log::debug!(
            "[dnspod] DescribeRecordList {}.{domain} -> TotalCount={:?}",
            query.name,
            response.record_count_info.as_ref().and_then(|c| c.total_count)
        );

        response
            .record_list
            .unwrap_or_default()
            .into_iter()
            .map(|r| {
                Ok(DnsRecord {
                    id: r.record_id.to_string(),
                    domain: domain.clone(),
                    name: r.name,
                    record_type: parse_record_type(&r.record_type, self.provider_name())?,
                    value: r.value,
                    ttl: r.ttl,
                })
            })
            .collect()
    }

    async fn create_record(&self, req: &CreateDnsRecordRequest) -> Result<DnsRecord> {
        let domain = normalize_domain_name(&req.domain);
        let api_req = CreateRecordRequest {
            domain: domain.clone(),
            sub_domain: req.name.clone(),
            record_type: req.record_type.as_str().to_string(),
            record_line: DEFAULT_RECORD_LINE.to_string(),
            value: req.value.clone(),
            ttl: req.ttl,
        };

        let ctx = ErrorContext {
            record_name: Some(req.name.clone()),
            domain: Some(domain.clone()),
            ..Default::default()
        };

        let response: CreateRecordResponse = self.request("CreateRecord", &api_req, ctx).await?;

        Ok(DnsRecord {
            id: response.record_id.to_string(),
            domain,
            name: req.name.clone(),
            record_type: req.record_type,
            value: req.value.clone(),
            ttl: req.ttl,
        })
    }

    async fn delete_record(&self, record_id: &str, domain: &str) -> Result<()> {
        let id: u64 = record_id
            .parse()
            .map_err(|_| ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "record_id".to_string(),
                detail: format!("Invalid record id: {record_id}"),
            })?;

        let domain = normalize_domain_name(domain);
        let req = DeleteRecordRequest {
            domain: domain.clone(),
            record_id: id,
        };

        let ctx = ErrorContext {
            record_id: Some(record_id.to_string()),
            domain: Some(domain),
            ..Default::default()
        };

        let _response: DeleteRecordResponse = self.request("DeleteRecord", &req, ctx).await?;
        Ok(())
    }
}
