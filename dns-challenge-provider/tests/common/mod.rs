//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use dns_challenge_provider::{
    CreateDnsRecordRequest, DnsProvider, DnsRecord, DnsRecordType, ProviderCredentials,
    ProviderType, RecordQuery, create_provider,
};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 生成唯一的测试记录名称
pub fn generate_test_record_name() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_acme-challenge._test-{}", &uuid.to_string()[..8])
}

/// 指向 mock server 的 Provider
pub fn mock_provider(platform: ProviderType, endpoint: String) -> Arc<dyn DnsProvider> {
    let credentials =
        ProviderCredentials::from_key_pair(platform, "test-key-id", "test-key-secret")
            .expect("valid test credentials")
            .with_endpoint(Some(endpoint));
    create_provider(credentials).expect("mock provider")
}

pub fn txt_query(domain: &str, name: &str) -> RecordQuery {
    RecordQuery {
        domain: domain.to_string(),
        name: name.to_string(),
        record_type: Some(DnsRecordType::Txt),
    }
}

pub fn txt_request(domain: &str, name: &str, value: &str) -> CreateDnsRecordRequest {
    CreateDnsRecordRequest {
        domain: domain.to_string(),
        name: name.to_string(),
        record_type: DnsRecordType::Txt,
        value: value.to_string(),
        ttl: 600,
    }
}

/// 测试上下文 - 封装 Provider 和测试域名
pub struct TestContext {
    pub provider: Arc<dyn DnsProvider>,
    pub domain: String,
}

impl TestContext {
    /// 创建 Aliyun 测试上下文
    pub fn aliyun() -> Option<Self> {
        let access_key_id = env::var("ALIYUN_ACCESS_KEY_ID").ok()?;
        let access_key_secret = env::var("ALIYUN_ACCESS_KEY_SECRET").ok()?;
        let domain = env::var("TEST_DOMAIN").ok()?;

        let credentials = ProviderCredentials::from_key_pair(
            ProviderType::Aliyun,
            &access_key_id,
            &access_key_secret,
        )
        .ok()?
        .with_region(env::var("ALIYUN_REGION_ID").ok());
        let provider = create_provider(credentials).ok()?;

        Some(Self { provider, domain })
    }

    /// 创建 `DNSPod` 测试上下文
    pub fn dnspod() -> Option<Self> {
        let secret_id = env::var("DNSPOD_SECRET_ID").ok()?;
        let secret_key = env::var("DNSPOD_SECRET_KEY").ok()?;
        let domain = env::var("TEST_DOMAIN").ok()?;

        let credentials =
            ProviderCredentials::from_key_pair(ProviderType::Dnspod, &secret_id, &secret_key)
                .ok()?;
        let provider = create_provider(credentials).ok()?;

        Some(Self { provider, domain })
    }

    /// 创建一条 TXT 测试记录
    pub async fn create_test_record(&self, name: &str, value: &str) -> Option<DnsRecord> {
        self.provider
            .create_record(&txt_request(&self.domain, name, value))
            .await
            .ok()
    }

    /// 删除指定名称下的全部 TXT 记录
    pub async fn cleanup_records(&self, name: &str) {
        if let Ok(records) = self
            .provider
            .list_records(&txt_query(&self.domain, name))
            .await
        {
            for record in records {
                let _ = self.provider.delete_record(&record.id, &self.domain).await;
            }
        }
    }
}
