//! Hook configuration (`resource/application.toml`)

use std::path::{Path, PathBuf};

use dns_challenge_provider::mask_secret;
use serde::Deserialize;

use crate::error::ConfigError;

/// Environment variable naming an explicit configuration file
pub const CONFIG_PATH_ENV: &str = "DNS_CHALLENGE_HOOK_CONFIG";

const CONFIG_RELATIVE_PATH: &str = "resource/application.toml";

/// What to do when a provider call fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Log the error and carry on with the remaining steps
    #[default]
    Continue,
    /// Stop at the first error and exit with status 1
    Abort,
}

/// Top-level configuration file layout.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub main: MainSection,
}

/// The `[main]` section.
#[derive(Clone, Deserialize)]
pub struct MainSection {
    pub platform_type: String,
    pub access_key_id: String,
    pub access_key_secret: String,
    #[serde(default)]
    pub region_id: Option<String>,
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub on_provider_error: ErrorPolicy,
}

impl std::fmt::Debug for MainSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MainSection")
            .field("platform_type", &self.platform_type)
            .field("access_key_id", &mask_secret(&self.access_key_id))
            .field("access_key_secret", &"***")
            .field("region_id", &self.region_id)
            .field("endpoint", &self.endpoint)
            .field("on_provider_error", &self.on_provider_error)
            .finish()
    }
}

impl Settings {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(content)?;
        if settings.main.access_key_id.trim().is_empty() {
            return Err(ConfigError::EmptyField("access_key_id"));
        }
        if settings.main.access_key_secret.trim().is_empty() {
            return Err(ConfigError::EmptyField("access_key_secret"));
        }
        Ok(settings)
    }

    /// Read and parse the file at `path`.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load from the first existing candidate location.
    pub fn load() -> Result<Self, ConfigError> {
        let override_path = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(Path::to_path_buf));
        let candidates = candidate_paths(override_path, exe_dir.as_deref());

        let path = candidates
            .iter()
            .find(|p| p.is_file())
            .ok_or_else(|| ConfigError::NotFound(candidates.clone()))?;
        tracing::debug!("Loading configuration from {}", path.display());
        Self::from_file(path)
    }
}

/// Lookup order: explicit override, next to the executable, working directory.
fn candidate_paths(override_path: Option<PathBuf>, exe_dir: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(3);
    paths.extend(override_path);
    paths.extend(exe_dir.map(|dir| dir.join(CONFIG_RELATIVE_PATH)));
    paths.push(PathBuf::from(CONFIG_RELATIVE_PATH));
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"
[main]
platform_type = "aliyun"
access_key_id = "LTAI5tExampleKey"
access_key_secret = "secret"
region_id = "cn-shanghai"
endpoint = "http://127.0.0.1:8080"
on_provider_error = "abort"
"#;

    #[test]
    fn parses_full_section() {
        let settings = Settings::from_toml_str(FULL).unwrap();
        let main = settings.main;
        assert_eq!(main.platform_type, "aliyun");
        assert_eq!(main.access_key_id, "LTAI5tExampleKey");
        assert_eq!(main.region_id.as_deref(), Some("cn-shanghai"));
        assert_eq!(main.endpoint.as_deref(), Some("http://127.0.0.1:8080"));
        assert_eq!(main.on_provider_error, ErrorPolicy::Abort);
    }

    #[test]
    fn optional_keys_default() {
        let settings = Settings::from_toml_str(
            "[main]\nplatform_type = \"tencent\"\naccess_key_id = \"id\"\naccess_key_secret = \"key\"\n",
        )
        .unwrap();
        assert!(settings.main.region_id.is_none());
        assert!(settings.main.endpoint.is_none());
        assert_eq!(settings.main.on_provider_error, ErrorPolicy::Continue);
    }

    #[test]
    fn empty_secret_is_rejected() {
        let err = Settings::from_toml_str(
            "[main]\nplatform_type = \"aliyun\"\naccess_key_id = \"id\"\naccess_key_secret = \"  \"\n",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::EmptyField("access_key_secret")));
    }

    #[test]
    fn missing_section_is_parse_error() {
        let err = Settings::from_toml_str("platform_type = \"aliyun\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn unknown_policy_is_parse_error() {
        let err = Settings::from_toml_str(
            "[main]\nplatform_type = \"aliyun\"\naccess_key_id = \"id\"\naccess_key_secret = \"key\"\non_provider_error = \"retry\"\n",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn debug_masks_credentials() {
        let settings = Settings::from_toml_str(FULL).unwrap();
        let debug = format!("{:?}", settings.main);
        assert!(debug.contains("LTAI***"));
        assert!(!debug.contains("LTAI5tExampleKey"));
        assert!(!debug.contains("\"secret\""));
    }

    #[test]
    fn candidate_order() {
        let paths = candidate_paths(
            Some(PathBuf::from("/etc/hook.toml")),
            Some(Path::new("/opt/hook")),
        );
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/etc/hook.toml"),
                PathBuf::from("/opt/hook/resource/application.toml"),
                PathBuf::from("resource/application.toml"),
            ]
        );
        assert_eq!(candidate_paths(None, None).len(), 1);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Settings::from_file(Path::new("/nonexistent/application.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
