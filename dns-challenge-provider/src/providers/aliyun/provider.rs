//! 阿里云 DnsProvider trait 实现

use async_trait::async_trait;

use crate::error::Result;
use crate::providers::common::{normalize_domain_name, parse_record_type, relative_to_full_name};
use crate::traits::{DnsProvider, ErrorContext};
use crate::types::{CreateDnsRecordRequest, DnsRecord, RecordQuery};

use super::{
    AddDomainRecordRequest, AddDomainRecordResponse, AliyunProvider, DeleteDomainRecordRequest,
    DeleteDomainRecordResponse, DescribeSubDomainRecordsRequest,
    DescribeSubDomainRecordsResponse, MAX_PAGE_SIZE,
};

#[async_trait]
impl DnsProvider for AliyunProvider {
    fn id(&self) -> &'static str {
        "aliyun"
    }

    async fn list_records(&self, query: &RecordQuery) -> Result<Vec<DnsRecord>> {
        let domain = normalize_domain_name(&query.domain);
        let req = DescribeSubDomainRecordsRequest {
            sub_domain: relative_to_full_name(&query.name, &domain),
            domain_name: domain.clone(),
            record_type: query.record_type.map(|t| t.as_str().to_string()),
            page_size: MAX_PAGE_SIZE,
        };

        let ctx = ErrorContext {
            record_name: Some(query.name.clone()),
            domain: Some(domain.clone()),
            ..Default::default()
        };

        let response: DescribeSubDomainRecordsResponse = self
            .request("DescribeSubDomainRecords", &req, ctx)
            .await?;

        log::debug!(
            "[aliyun] DescribeSubDomainRecords {} -> TotalCount={:?}",
            req.sub_domain,
            response.total_count
        );

        response
            .domain_records
            .and_then(|r| r.record)
            .unwrap_or_default()
            .into_iter()
            .map(|r| {
                Ok(DnsRecord {
                    id: r.record_id,
                    domain: r.domain_name.unwrap_or_else(|| domain.clone()),
                    name: r.rr,
                    record_type: parse_record_type(&r.record_type, "aliyun")?,
                    value: r.value,
                    ttl: r.ttl,
                })
            })
            .collect()
    }

    async fn create_record(&self, req: &CreateDnsRecordRequest) -> Result<DnsRecord> {
        let domain = normalize_domain_name(&req.domain);
        let api_req = AddDomainRecordRequest {
            domain_name: domain.clone(),
            rr: req.name.clone(),
            record_type: req.record_type.as_str().to_string(),
            value: req.value.clone(),
            ttl: req.ttl,
        };

        let ctx = ErrorContext {
            record_name: Some(req.name.clone()),
            domain: Some(domain.clone()),
            ..Default::default()
        };

        let response: AddDomainRecordResponse =
            self.request("AddDomainRecord", &api_req, ctx).await?;

        Ok(DnsRecord {
            id: response.record_id,
            domain,
            name: req.name.clone(),
            record_type: req.record_type,
            value: req.value.clone(),
            ttl: req.ttl,
        })
    }

    async fn delete_record(&self, record_id: &str, domain: &str) -> Result<()> {
        let req = DeleteDomainRecordRequest {
            record_id: record_id.to_string(),
        };

        let ctx = ErrorContext {
            record_id: Some(record_id.to_string()),
            domain: Some(normalize_domain_name(domain)),
            ..Default::default()
        };

        let _response: DeleteDomainRecordResponse =
            self.request("DeleteDomainRecord", &req, ctx).await?;
        Ok(())
    }
}
