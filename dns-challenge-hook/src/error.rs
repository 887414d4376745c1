//! Hook error types

use std::path::PathBuf;

use dns_challenge_provider::{CredentialValidationError, ProviderError};
use thiserror::Error;

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No configuration file in any lookup location
    #[error("Configuration file not found (searched: {})", format_paths(.0))]
    NotFound(Vec<PathBuf>),

    /// The file exists but could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or does not match the expected layout
    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A required key is present but empty
    #[error("Configuration key '{0}' must not be empty")]
    EmptyField(&'static str),
}

fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Hook error type
#[derive(Error, Debug)]
pub enum HookError {
    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A required certbot environment variable is absent or empty
    #[error("Environment variable {0} is not set")]
    MissingEnv(&'static str),

    /// `platform_type` names no supported provider
    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),

    /// Credentials rejected before any client was built
    #[error("{0}")]
    Credentials(#[from] CredentialValidationError),

    /// Challenge domain lacks the `_acme-challenge.` prefix
    #[error("Invalid challenge domain: {0}")]
    InvalidChallengeDomain(String),

    /// Provider error (converted from library)
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl HookError {
    /// 是否为预期行为（用户输入、配置问题等），用于日志分级。
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Config(_)
            | Self::MissingEnv(_)
            | Self::UnknownPlatform(_)
            | Self::Credentials(_)
            | Self::InvalidChallengeDomain(_) => true,
            Self::Provider(e) => e.is_expected(),
        }
    }
}

/// Hook Result type alias
pub type HookResult<T> = std::result::Result<T, HookError>;
