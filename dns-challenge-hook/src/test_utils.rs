//! 测试辅助模块
//!
//! 提供内存版 `DnsProvider` mock。

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dns_challenge_provider::{
    CreateDnsRecordRequest, DnsProvider, DnsRecord, DnsRecordType, ProviderError, RecordQuery,
    Result,
};
use tokio::sync::RwLock;

/// Provider operation, used for call logs and failure injection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MockOp {
    List,
    Create,
    Delete,
}

/// One recorded provider call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    List {
        domain: String,
        name: String,
        record_type: Option<DnsRecordType>,
    },
    Create(CreateDnsRecordRequest),
    Delete {
        record_id: String,
        domain: String,
    },
}

impl MockCall {
    pub fn op(&self) -> MockOp {
        match self {
            Self::List { .. } => MockOp::List,
            Self::Create(_) => MockOp::Create,
            Self::Delete { .. } => MockOp::Delete,
        }
    }
}

// ===== MockDnsProvider =====

pub struct MockDnsProvider {
    records: RwLock<Vec<DnsRecord>>,
    calls: RwLock<Vec<MockCall>>,
    /// 如果存在，对应操作返回此错误
    failures: RwLock<HashMap<MockOp, ProviderError>>,
    next_id: AtomicU64,
}

impl MockDnsProvider {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            calls: RwLock::new(Vec::new()),
            failures: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Seed a TXT record directly into the store.
    pub async fn insert_txt(&self, domain: &str, name: &str, value: &str) -> String {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst).to_string();
        self.records.write().await.push(DnsRecord {
            id: id.clone(),
            domain: domain.to_string(),
            name: name.to_string(),
            record_type: DnsRecordType::Txt,
            value: value.to_string(),
            ttl: 600,
        });
        id
    }

    pub async fn fail(&self, op: MockOp, err: ProviderError) {
        self.failures.write().await.insert(op, err);
    }

    pub async fn records(&self) -> Vec<DnsRecord> {
        self.records.read().await.clone()
    }

    pub async fn calls(&self) -> Vec<MockCall> {
        self.calls.read().await.clone()
    }

    pub async fn count(&self, op: MockOp) -> usize {
        self.calls
            .read()
            .await
            .iter()
            .filter(|c| c.op() == op)
            .count()
    }

    async fn record_call(&self, call: MockCall) -> Result<()> {
        let op = call.op();
        self.calls.write().await.push(call);
        match self.failures.read().await.get(&op) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

/// Network failure as a provider would report it
pub fn network_error() -> ProviderError {
    ProviderError::NetworkError {
        provider: "mock".to_string(),
        detail: "connection refused".to_string(),
    }
}

#[async_trait]
impl DnsProvider for MockDnsProvider {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn list_records(&self, query: &RecordQuery) -> Result<Vec<DnsRecord>> {
        self.record_call(MockCall::List {
            domain: query.domain.clone(),
            name: query.name.clone(),
            record_type: query.record_type,
        })
        .await?;
        Ok(self
            .records
            .read()
            .await
            .iter()
            .filter(|r| r.domain == query.domain && r.name == query.name)
            .filter(|r| query.record_type.is_none_or(|t| r.record_type == t))
            .cloned()
            .collect())
    }

    async fn create_record(&self, req: &CreateDnsRecordRequest) -> Result<DnsRecord> {
        self.record_call(MockCall::Create(req.clone())).await?;
        let record = DnsRecord {
            id: self.next_id.fetch_add(1, Ordering::SeqCst).to_string(),
            domain: req.domain.clone(),
            name: req.name.clone(),
            record_type: req.record_type,
            value: req.value.clone(),
            ttl: req.ttl,
        };
        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn delete_record(&self, record_id: &str, domain: &str) -> Result<()> {
        self.record_call(MockCall::Delete {
            record_id: record_id.to_string(),
            domain: domain.to_string(),
        })
        .await?;
        let mut store = self.records.write().await;
        let before = store.len();
        store.retain(|r| r.id != record_id);
        if store.len() == before {
            return Err(ProviderError::RecordNotFound {
                provider: "mock".to_string(),
                record_id: record_id.to_string(),
                raw_message: None,
            });
        }
        Ok(())
    }
}
