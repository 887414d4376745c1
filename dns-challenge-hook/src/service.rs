//! 挑战记录服务
//!
//! Publishes and removes the `_acme-challenge` TXT record through a
//! [`DnsProvider`]. Provider failures are handled here according to the
//! configured [`ErrorPolicy`].

use std::sync::Arc;
use std::time::Duration;

use dns_challenge_provider::{DnsProvider, ProviderError};

use crate::challenge::{ChallengeRecord, check_prefix};
use crate::config::ErrorPolicy;
use crate::error::HookResult;

/// Wait after publishing so the record reaches the provider's nameservers
/// before the CA queries it.
pub const PROPAGATION_DELAY: Duration = Duration::from_secs(30);

/// 挑战记录服务
pub struct ChallengeService {
    provider: Arc<dyn DnsProvider>,
    policy: ErrorPolicy,
}

impl ChallengeService {
    #[must_use]
    pub fn new(provider: Arc<dyn DnsProvider>, policy: ErrorPolicy) -> Self {
        Self { provider, policy }
    }

    fn on_provider_error(&self, operation: &str, err: ProviderError) -> HookResult<()> {
        match self.policy {
            ErrorPolicy::Continue => {
                tracing::error!("{operation} failed: {err}");
                Ok(())
            }
            ErrorPolicy::Abort => Err(err.into()),
        }
    }

    /// 删除已有的挑战记录
    ///
    /// Lists TXT records at the challenge name and deletes them one by one.
    pub async fn remove_record(&self, record: &ChallengeRecord) -> HookResult<()> {
        check_prefix(&record.full_domain)?;

        let existing = match self.provider.list_records(&record.query()).await {
            Ok(records) => records,
            Err(e) => return self.on_provider_error("List records", e),
        };
        tracing::info!(
            "[{}] {} TXT record(s) at {}",
            self.provider.id(),
            existing.len(),
            record.full_domain
        );

        for old in &existing {
            tracing::info!("Deleting record {} ({})", old.id, old.value);
            if let Err(e) = self
                .provider
                .delete_record(&old.id, &record.root_domain)
                .await
            {
                self.on_provider_error("Delete record", e)?;
            }
        }
        Ok(())
    }

    /// 发布挑战记录
    ///
    /// Removes any previous record, creates the new one, then blocks for
    /// [`PROPAGATION_DELAY`].
    pub async fn add_record(&self, record: &ChallengeRecord) -> HookResult<()> {
        check_prefix(&record.full_domain)?;
        self.remove_record(record).await?;

        match self.provider.create_record(&record.create_request()).await {
            Ok(created) => tracing::info!(
                "Created TXT record {} at {}",
                created.id,
                record.full_domain
            ),
            Err(e) => self.on_provider_error("Create record", e)?,
        }

        tracing::info!(
            "Waiting {}s for DNS propagation",
            PROPAGATION_DELAY.as_secs()
        );
        tokio::time::sleep(PROPAGATION_DELAY).await;
        Ok(())
    }
}
