use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProviderError;

// ============ Provider Types ============

/// Identifies which DNS provider implementation to use.
///
/// Each variant is gated behind its corresponding feature flag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    /// Aliyun (China) DNS. Requires feature `aliyun`.
    #[cfg(feature = "aliyun")]
    Aliyun,
    /// Tencent Cloud `DNSPod`. Requires feature `dnspod`.
    #[cfg(feature = "dnspod")]
    Dnspod,
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            #[cfg(feature = "aliyun")]
            Self::Aliyun => write!(f, "aliyun"),
            #[cfg(feature = "dnspod")]
            Self::Dnspod => write!(f, "dnspod"),
        }
    }
}

impl FromStr for ProviderType {
    type Err = ProviderError;

    /// Parses a platform identifier.
    ///
    /// Accepts `aliyun`, `tencent` and `dnspod` (case-insensitive, surrounding
    /// whitespace ignored). Identifiers whose feature is disabled are rejected
    /// like any unknown name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            #[cfg(feature = "aliyun")]
            "aliyun" => Ok(Self::Aliyun),
            #[cfg(feature = "dnspod")]
            "tencent" | "dnspod" => Ok(Self::Dnspod),
            _ => Err(ProviderError::UnsupportedProvider {
                provider: s.to_string(),
            }),
        }
    }
}

// ============ DNS Record Types ============

/// DNS record type.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum DnsRecordType {
    /// IPv4 address record.
    A,
    /// IPv6 address record.
    Aaaa,
    /// Canonical name (alias) record.
    Cname,
    /// Mail exchange record.
    Mx,
    /// Text record.
    Txt,
    /// Name server record.
    Ns,
    /// Service locator record.
    Srv,
    /// Certificate Authority Authorization record.
    Caa,
}

impl DnsRecordType {
    /// Wire name used by both provider APIs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Txt => "TXT",
            Self::Ns => "NS",
            Self::Srv => "SRV",
            Self::Caa => "CAA",
        }
    }
}

impl std::fmt::Display for DnsRecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DnsRecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "AAAA" => Ok(Self::Aaaa),
            "CNAME" => Ok(Self::Cname),
            "MX" => Ok(Self::Mx),
            "TXT" => Ok(Self::Txt),
            "NS" => Ok(Self::Ns),
            "SRV" => Ok(Self::Srv),
            "CAA" => Ok(Self::Caa),
            other => Err(format!("Unsupported record type: {other}")),
        }
    }
}

/// A DNS record as reported by a provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DnsRecord {
    /// Provider-specific record identifier.
    pub id: String,
    /// Root domain the record belongs to (e.g., `"example.com"`).
    pub domain: String,
    /// Record name relative to the root domain (e.g., `"_acme-challenge"`).
    pub name: String,
    /// Record type.
    pub record_type: DnsRecordType,
    /// Record value.
    pub value: String,
    /// Time to live in seconds.
    pub ttl: u32,
}

/// Lookup for records under a single relative name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecordQuery {
    /// Root domain (e.g., `"example.com"`).
    pub domain: String,
    /// Record name relative to `domain`.
    pub name: String,
    /// Optional record type filter, applied by the provider API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_type: Option<DnsRecordType>,
}

/// Request to create a new DNS record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateDnsRecordRequest {
    /// Root domain to create the record in.
    pub domain: String,
    /// Record name relative to `domain`.
    pub name: String,
    /// Record type.
    pub record_type: DnsRecordType,
    /// Record value.
    pub value: String,
    /// Time to live in seconds.
    pub ttl: u32,
}

// ============ Credential Types ============

/// Validation error for provider credentials.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CredentialValidationError {
    /// A credential field is present but empty/whitespace-only.
    EmptyField {
        /// Which provider the error relates to.
        provider: ProviderType,
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
    },
}

impl std::fmt::Display for CredentialValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField {
                provider, label, ..
            } => write!(f, "[{provider}] Field must not be empty: {label}"),
        }
    }
}

impl std::error::Error for CredentialValidationError {}

/// Type-safe credential container for all supported DNS providers.
///
/// Each variant holds the authentication fields required by that provider
/// plus the optional region and endpoint override. Pass this to
/// [`create_provider()`](crate::create_provider) to instantiate a provider.
#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "provider", content = "credentials")]
pub enum ProviderCredentials {
    /// Aliyun DNS credentials. Requires feature `aliyun`.
    #[cfg(feature = "aliyun")]
    #[serde(rename = "aliyun")]
    Aliyun {
        /// Aliyun Access Key ID.
        access_key_id: String,
        /// Aliyun Access Key Secret.
        access_key_secret: String,
        /// Region used to build the endpoint host (default `cn-hangzhou`).
        #[serde(default, skip_serializing_if = "Option::is_none")]
        region_id: Option<String>,
        /// Base URL override (`scheme://host[:port]`).
        #[serde(default, skip_serializing_if = "Option::is_none")]
        endpoint: Option<String>,
    },

    /// Tencent Cloud `DNSPod` credentials. Requires feature `dnspod`.
    #[cfg(feature = "dnspod")]
    #[serde(rename = "dnspod")]
    Dnspod {
        /// Tencent Cloud Secret ID.
        secret_id: String,
        /// Tencent Cloud Secret Key.
        secret_key: String,
        /// Base URL override (`scheme://host[:port]`).
        #[serde(default, skip_serializing_if = "Option::is_none")]
        endpoint: Option<String>,
    },
}

impl std::fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            #[cfg(feature = "aliyun")]
            Self::Aliyun {
                access_key_id,
                region_id,
                endpoint,
                ..
            } => f
                .debug_struct("Aliyun")
                .field("access_key_id", &crate::utils::mask_secret(access_key_id))
                .field("access_key_secret", &"***")
                .field("region_id", region_id)
                .field("endpoint", endpoint)
                .finish(),
            #[cfg(feature = "dnspod")]
            Self::Dnspod {
                secret_id,
                endpoint,
                ..
            } => f
                .debug_struct("Dnspod")
                .field("secret_id", &crate::utils::mask_secret(secret_id))
                .field("secret_key", &"***")
                .field("endpoint", endpoint)
                .finish(),
        }
    }
}

impl ProviderCredentials {
    /// Build credentials from an id/secret pair, rejecting blank values.
    ///
    /// Region and endpoint start unset; see [`with_region`](Self::with_region)
    /// and [`with_endpoint`](Self::with_endpoint).
    ///
    /// # Errors
    ///
    /// Returns [`CredentialValidationError::EmptyField`] if either value is
    /// empty or whitespace-only.
    pub fn from_key_pair(
        provider: ProviderType,
        key_id: &str,
        key_secret: &str,
    ) -> Result<Self, CredentialValidationError> {
        match provider {
            #[cfg(feature = "aliyun")]
            ProviderType::Aliyun => Ok(Self::Aliyun {
                access_key_id: Self::require(provider, "accessKeyId", "Access Key ID", key_id)?,
                access_key_secret: Self::require(
                    provider,
                    "accessKeySecret",
                    "Access Key Secret",
                    key_secret,
                )?,
                region_id: None,
                endpoint: None,
            }),
            #[cfg(feature = "dnspod")]
            ProviderType::Dnspod => Ok(Self::Dnspod {
                secret_id: Self::require(provider, "secretId", "Secret ID", key_id)?,
                secret_key: Self::require(provider, "secretKey", "Secret Key", key_secret)?,
                endpoint: None,
            }),
        }
    }

    fn require(
        provider: ProviderType,
        key: &str,
        label: &str,
        value: &str,
    ) -> Result<String, CredentialValidationError> {
        if value.trim().is_empty() {
            return Err(CredentialValidationError::EmptyField {
                provider,
                field: key.to_string(),
                label: label.to_string(),
            });
        }
        Ok(value.trim().to_string())
    }

    /// Set the Aliyun API region. Blank values are treated as unset.
    ///
    /// `DNSPod` has a single global endpoint and ignores the value.
    #[must_use]
    pub fn with_region(mut self, value: Option<String>) -> Self {
        let value = value.filter(|v| !v.trim().is_empty());
        match &mut self {
            #[cfg(feature = "aliyun")]
            Self::Aliyun { region_id, .. } => *region_id = value,
            #[cfg(feature = "dnspod")]
            Self::Dnspod { .. } => {}
        }
        self
    }

    /// Set the endpoint override. Blank values are treated as unset.
    #[must_use]
    pub fn with_endpoint(mut self, value: Option<String>) -> Self {
        let value = value.filter(|v| !v.trim().is_empty());
        match &mut self {
            #[cfg(feature = "aliyun")]
            Self::Aliyun { endpoint, .. } => *endpoint = value,
            #[cfg(feature = "dnspod")]
            Self::Dnspod { endpoint, .. } => *endpoint = value,
        }
        self
    }

    /// Returns the [`ProviderType`] corresponding to this credential variant.
    pub fn provider_type(&self) -> ProviderType {
        match self {
            #[cfg(feature = "aliyun")]
            Self::Aliyun { .. } => ProviderType::Aliyun,
            #[cfg(feature = "dnspod")]
            Self::Dnspod { .. } => ProviderType::Dnspod,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============ ProviderType ============

    #[test]
    fn provider_type_accepts_known_identifiers() {
        assert_eq!("aliyun".parse::<ProviderType>().ok(), Some(ProviderType::Aliyun));
        assert_eq!("tencent".parse::<ProviderType>().ok(), Some(ProviderType::Dnspod));
        assert_eq!("dnspod".parse::<ProviderType>().ok(), Some(ProviderType::Dnspod));
        assert_eq!(" AliYun ".parse::<ProviderType>().ok(), Some(ProviderType::Aliyun));
    }

    #[test]
    fn provider_type_rejects_unknown_identifier() {
        let err = "other-cloud".parse::<ProviderType>();
        assert!(matches!(
            err,
            Err(ProviderError::UnsupportedProvider { ref provider }) if provider == "other-cloud"
        ));
    }

    #[test]
    fn provider_type_display() {
        assert_eq!(ProviderType::Aliyun.to_string(), "aliyun");
        assert_eq!(ProviderType::Dnspod.to_string(), "dnspod");
    }

    // ============ DnsRecordType ============

    #[test]
    fn record_type_wire_names() {
        assert_eq!(DnsRecordType::Txt.as_str(), "TXT");
        assert_eq!(DnsRecordType::Aaaa.to_string(), "AAAA");
        assert_eq!("txt".parse::<DnsRecordType>(), Ok(DnsRecordType::Txt));
        assert!("PTR".parse::<DnsRecordType>().is_err());
    }

    #[test]
    fn record_type_serializes_uppercase() {
        let json = serde_json::to_string(&DnsRecordType::Cname).unwrap();
        assert_eq!(json, "\"CNAME\"");
    }

    // ============ ProviderCredentials ============

    #[test]
    fn credentials_aliyun_from_key_pair() {
        let cred = ProviderCredentials::from_key_pair(ProviderType::Aliyun, "id123", "secret456")
            .unwrap()
            .with_region(Some("cn-shanghai".to_string()));
        assert_eq!(cred.provider_type(), ProviderType::Aliyun);
        let ProviderCredentials::Aliyun {
            access_key_id,
            access_key_secret,
            region_id,
            endpoint,
        } = cred
        else {
            panic!("expected aliyun credentials");
        };
        assert_eq!(access_key_id, "id123");
        assert_eq!(access_key_secret, "secret456");
        assert_eq!(region_id.as_deref(), Some("cn-shanghai"));
        assert_eq!(endpoint, None);
    }

    #[test]
    fn credentials_dnspod_blank_endpoint_is_unset() {
        let cred = ProviderCredentials::from_key_pair(ProviderType::Dnspod, "sid", "skey")
            .unwrap()
            .with_endpoint(Some(String::new()));
        let ProviderCredentials::Dnspod { endpoint, .. } = cred else {
            panic!("expected dnspod credentials");
        };
        assert_eq!(endpoint, None);
    }

    #[test]
    fn credentials_region_is_aliyun_only() {
        let dnspod = ProviderCredentials::from_key_pair(ProviderType::Dnspod, "sid", "skey")
            .unwrap()
            .with_region(Some("cn-hangzhou".to_string()));
        assert!(!format!("{dnspod:?}").contains("cn-hangzhou"));

        let aliyun = ProviderCredentials::from_key_pair(ProviderType::Aliyun, "id", "key")
            .unwrap()
            .with_region(Some("  ".to_string()));
        let ProviderCredentials::Aliyun { region_id, .. } = aliyun else {
            panic!("expected aliyun credentials");
        };
        assert_eq!(region_id, None);
    }

    #[test]
    fn credentials_reject_empty_secret() {
        let err = ProviderCredentials::from_key_pair(ProviderType::Aliyun, "id", "   ")
            .err()
            .unwrap();
        assert_eq!(
            err.to_string(),
            "[aliyun] Field must not be empty: Access Key Secret"
        );
    }

    #[test]
    fn credentials_debug_masks_secrets() {
        let cred = ProviderCredentials::from_key_pair(
            ProviderType::Dnspod,
            "AKIDabcdefgh12345678",
            "very-secret-key",
        )
        .unwrap();
        let debug = format!("{cred:?}");
        assert!(!debug.contains("very-secret-key"));
        assert!(!debug.contains("AKIDabcdefgh12345678"));
        assert!(debug.contains("AKID"));
    }
}
