//! Hook dispatcher
//!
//! Resolves the challenge from the environment, builds the provider once and
//! runs the requested action.

use std::sync::Arc;

use dns_challenge_provider::{DnsProvider, ProviderCredentials, ProviderType};

use crate::challenge::{ChallengeEnv, ChallengeRecord, challenge_domain};
use crate::cli::Action;
use crate::config::MainSection;
use crate::domain::split_domain;
use crate::error::{HookError, HookResult};
use crate::service::ChallengeService;

/// Build credentials for the configured platform.
fn credentials(main: &MainSection) -> HookResult<ProviderCredentials> {
    let platform: ProviderType = main
        .platform_type
        .parse()
        .map_err(|_| HookError::UnknownPlatform(main.platform_type.clone()))?;
    if platform == ProviderType::Dnspod && main.region_id.is_some() {
        tracing::debug!("region_id only applies to Aliyun, ignored for DNSPod");
    }
    let credentials =
        ProviderCredentials::from_key_pair(platform, &main.access_key_id, &main.access_key_secret)?
            .with_region(main.region_id.clone())
            .with_endpoint(main.endpoint.clone());
    Ok(credentials)
}

/// Run one hook invocation.
///
/// `lookup` reads environment variables and `factory` builds the provider
/// client. A name that cannot be split into root and host is logged and
/// treated as success.
pub async fn run<L, F>(action: Action, main: &MainSection, lookup: L, factory: F) -> HookResult<()>
where
    L: Fn(&str) -> Option<String>,
    F: FnOnce(ProviderCredentials) -> dns_challenge_provider::Result<Arc<dyn DnsProvider>>,
{
    let env = ChallengeEnv::from_lookup(lookup)?;
    tracing::info!("Domain: {}, validation: {}", env.domain, env.validation);

    let credentials = credentials(main)?;
    tracing::debug!("Provider credentials: {credentials:?}");
    let provider = factory(credentials)?;

    let full_domain = challenge_domain(&env.domain);
    let Some(split) = split_domain(&full_domain) else {
        tracing::error!("Cannot determine root domain of {full_domain}, nothing to do");
        return Ok(());
    };
    tracing::info!("Root domain: {}, host: {}", split.root, split.host);

    let record = ChallengeRecord::new(full_domain, split, env.validation);
    let service = ChallengeService::new(provider, main.on_provider_error);
    match action {
        Action::Auth => service.add_record(&record).await,
        Action::Cleanup => service.remove_record(&record).await,
    }
}
