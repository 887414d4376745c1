//! Provider factory.

use std::sync::Arc;

use crate::error::Result;
use crate::traits::DnsProvider;
use crate::types::ProviderCredentials;

#[cfg(feature = "aliyun")]
use crate::providers::AliyunProvider;
#[cfg(feature = "dnspod")]
use crate::providers::DnspodProvider;

/// Creates a [`DnsProvider`] instance from the given credentials.
///
/// The concrete provider type is determined by the [`ProviderCredentials`] variant.
/// The returned provider is wrapped in `Arc<dyn DnsProvider>` so callers can
/// hold it without knowing the implementation.
///
/// # Examples
///
/// ```rust,no_run
/// use dns_challenge_provider::{create_provider, ProviderCredentials, ProviderType};
///
/// let credentials =
///     ProviderCredentials::from_key_pair(ProviderType::Aliyun, "key-id", "key-secret")?;
/// let provider = create_provider(credentials)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Errors
///
/// Fails if the endpoint override is invalid or the HTTP client cannot be built.
pub fn create_provider(credentials: ProviderCredentials) -> Result<Arc<dyn DnsProvider>> {
    match credentials {
        #[cfg(feature = "aliyun")]
        ProviderCredentials::Aliyun {
            access_key_id,
            access_key_secret,
            region_id,
            endpoint,
        } => {
            let mut builder = AliyunProvider::builder(access_key_id, access_key_secret);
            if let Some(region_id) = region_id {
                builder = builder.region_id(region_id);
            }
            if let Some(endpoint) = endpoint {
                builder = builder.endpoint(endpoint);
            }
            Ok(Arc::new(builder.build()?))
        }
        #[cfg(feature = "dnspod")]
        ProviderCredentials::Dnspod {
            secret_id,
            secret_key,
            endpoint,
        } => {
            let mut builder = DnspodProvider::builder(secret_id, secret_key);
            if let Some(endpoint) = endpoint {
                builder = builder.endpoint(endpoint);
            }
            Ok(Arc::new(builder.build()?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProviderType;

    #[test]
    fn factory_selects_implementation_by_variant() {
        let aliyun = ProviderCredentials::from_key_pair(ProviderType::Aliyun, "id", "secret")
            .unwrap()
            .with_region(Some("cn-beijing".to_string()));
        let dnspod = ProviderCredentials::from_key_pair(ProviderType::Dnspod, "id", "secret")
            .unwrap();

        assert_eq!(create_provider(aliyun).unwrap().id(), "aliyun");
        assert_eq!(create_provider(dnspod).unwrap().id(), "dnspod");
    }

    #[test]
    fn factory_rejects_bad_endpoint() {
        let creds = ProviderCredentials::from_key_pair(ProviderType::Dnspod, "id", "secret")
            .unwrap()
            .with_endpoint(Some("::nope::".to_string()));
        assert!(create_provider(creds).is_err());
    }
}
