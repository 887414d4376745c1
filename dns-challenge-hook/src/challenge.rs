//! DNS-01 challenge record model

use dns_challenge_provider::{CreateDnsRecordRequest, DnsRecordType, RecordQuery};

use crate::domain::DomainSplit;
use crate::error::{HookError, HookResult};

/// Label every DNS-01 record name starts with
pub const CHALLENGE_PREFIX: &str = "_acme-challenge.";

/// TTL of published challenge records, in seconds
pub const CHALLENGE_TTL: u32 = 600;

/// Domain being validated, set by certbot
pub const ENV_DOMAIN: &str = "CERTBOT_DOMAIN";

/// Validation token, set by certbot
pub const ENV_VALIDATION: &str = "CERTBOT_VALIDATION";

/// `_acme-challenge.<domain>`
pub fn challenge_domain(domain: &str) -> String {
    format!("{CHALLENGE_PREFIX}{domain}")
}

/// Reject any name that is not a challenge record name.
pub fn check_prefix(full_domain: &str) -> HookResult<()> {
    if full_domain.starts_with(CHALLENGE_PREFIX) {
        Ok(())
    } else {
        Err(HookError::InvalidChallengeDomain(full_domain.to_string()))
    }
}

/// Values certbot passes to the hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeEnv {
    pub domain: String,
    pub validation: String,
}

impl ChallengeEnv {
    /// Read both variables through `lookup`. Absent or empty values are errors.
    pub fn from_lookup<F>(lookup: F) -> HookResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or(HookError::MissingEnv(key))
        };
        Ok(Self {
            domain: read(ENV_DOMAIN)?,
            validation: read(ENV_VALIDATION)?,
        })
    }
}

/// The TXT record a single hook invocation manages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeRecord {
    pub full_domain: String,
    pub root_domain: String,
    pub host_label: String,
    pub value: String,
}

impl ChallengeRecord {
    pub fn new(full_domain: String, split: DomainSplit, value: String) -> Self {
        Self {
            full_domain,
            root_domain: split.root,
            host_label: split.host,
            value,
        }
    }

    pub(crate) fn query(&self) -> RecordQuery {
        RecordQuery {
            domain: self.root_domain.clone(),
            name: self.host_label.clone(),
            record_type: Some(DnsRecordType::Txt),
        }
    }

    pub(crate) fn create_request(&self) -> CreateDnsRecordRequest {
        CreateDnsRecordRequest {
            domain: self.root_domain.clone(),
            name: self.host_label.clone(),
            record_type: DnsRecordType::Txt,
            value: self.value.clone(),
            ttl: CHALLENGE_TTL,
        }
    }
}
