// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

// Auth Configuration Types
//
// Defines the configuration schema consumed when bootstrapping an auth client:
// - Kubernetes-style manifest format (apiVersion/kind/metadata/spec)
// - Provider tag selection
// - Provider-specific settings (dbAuth fetch options)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::provider::ProviderType;

const API_VERSION: &str = "100monkeys.ai/v1";
const KIND: &str = "AuthConfig";

/// Provider-specific configuration handed to the adapter unchanged
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SupportedAuthConfig {
    DbAuth(DbAuthConfig),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DbAuthConfig {
    /// Options applied to every request made to the dbAuth function
    #[serde(default)]
    pub fetch_config: FetchConfig,

    /// URL of the dbAuth function
    #[serde(default = "default_db_auth_url")]
    pub api_url: String,
}

impl Default for DbAuthConfig {
    fn default() -> Self {
        Self {
            fetch_config: FetchConfig::default(),
            api_url: default_db_auth_url(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchConfig {
    #[serde(default)]
    pub credentials: Credentials,
}

/// `RequestCredentials` mode for dbAuth requests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Credentials {
    Include,
    #[default]
    SameOrigin,
    Omit,
}

impl FromStr for Credentials {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "include" => Ok(Credentials::Include),
            "same-origin" => Ok(Credentials::SameOrigin),
            "omit" => Ok(Credentials::Omit),
            other => Err(format!(
                "unknown credentials mode '{}', expected include, same-origin or omit",
                other
            )),
        }
    }
}

/// Top-level Kubernetes-style auth configuration manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfigManifest {
    /// API version (must be "100monkeys.ai/v1")
    #[serde(rename = "apiVersion")]
    pub api_version: String,

    /// Resource kind (must be "AuthConfig")
    pub kind: String,

    pub metadata: ManifestMetadata,

    pub spec: AuthConfigSpec,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestMetadata {
    /// Application name
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<HashMap<String, String>>,
}

/// Auth configuration specification (content under spec:)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthConfigSpec {
    /// Provider tag, e.g. "auth0" or "dbAuth"
    pub provider: String,

    /// dbAuth settings, only meaningful with provider "dbAuth"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_auth: Option<DbAuthConfig>,
}

impl AuthConfigSpec {
    /// Parsed provider tag
    pub fn provider_type(&self) -> Result<ProviderType, super::errors::UnsupportedProviderError> {
        self.provider.parse()
    }

    /// Provider configuration to pass to the client factory
    pub fn provider_config(&self) -> Option<SupportedAuthConfig> {
        self.db_auth.clone().map(SupportedAuthConfig::DbAuth)
    }
}

impl Default for AuthConfigSpec {
    fn default() -> Self {
        Self {
            provider: ProviderType::Custom.to_string(),
            db_auth: None,
        }
    }
}

impl Default for AuthConfigManifest {
    fn default() -> Self {
        let hostname = hostname::get()
            .ok()
            .and_then(|h| h.into_string().ok())
            .unwrap_or_else(|| "aegis-app".to_string());

        Self {
            api_version: API_VERSION.to_string(),
            kind: KIND.to_string(),
            metadata: ManifestMetadata {
                name: hostname,
                labels: None,
            },
            spec: AuthConfigSpec::default(),
        }
    }
}

impl AuthConfigManifest {
    /// Load configuration from YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to YAML file
    pub fn to_yaml_file(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Parse configuration from YAML string
    pub fn from_yaml_str(yaml: &str) -> anyhow::Result<Self> {
        let config = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Discover configuration file using precedence order
    /// 1. AEGIS_AUTH_CONFIG_PATH environment variable
    /// 2. ./aegis-auth.yaml (working directory)
    /// 3. ~/.aegis/auth.yaml (user home)
    /// 4. /etc/aegis/auth.yaml (system, Unix) or C:\ProgramData\Aegis\auth.yaml (Windows)
    pub fn discover_config() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("AEGIS_AUTH_CONFIG_PATH") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        let cwd = PathBuf::from("./aegis-auth.yaml");
        if cwd.exists() {
            return Some(cwd);
        }

        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".aegis").join("auth.yaml");
            if user_config.exists() {
                return Some(user_config);
            }
        }

        #[cfg(unix)]
        let system_config = PathBuf::from("/etc/aegis/auth.yaml");
        #[cfg(windows)]
        let system_config = PathBuf::from("C:\\ProgramData\\Aegis\\auth.yaml");

        if system_config.exists() {
            return Some(system_config);
        }

        None
    }

    /// Load configuration with discovery, fallback to default
    pub fn load_or_default(cli_path: Option<PathBuf>) -> anyhow::Result<Self> {
        // Explicit path must load
        if let Some(path) = cli_path {
            tracing::info!("Loading auth configuration from explicit path: {:?}", path);
            let mut config = Self::from_yaml_file(&path).map_err(|e| {
                anyhow::anyhow!("Failed to load auth config at {:?}: {}", path, e)
            })?;
            config.apply_env_overrides();
            return Ok(config);
        }

        if let Some(config_path) = Self::discover_config() {
            tracing::info!("Loading auth configuration from discovered path: {:?}", config_path);
            let mut config = Self::from_yaml_file(config_path)?;
            config.apply_env_overrides();
            Ok(config)
        } else {
            tracing::warn!(
                "No auth configuration file found in standard locations. Using defaults."
            );
            let mut config = Self::default();
            config.apply_env_overrides();
            Ok(config)
        }
    }

    /// Apply environment variable overrides to configuration
    pub fn apply_env_overrides(&mut self) {
        if let Ok(provider) = std::env::var("AEGIS_AUTH_PROVIDER") {
            tracing::info!("Environment override: AEGIS_AUTH_PROVIDER={}", provider);
            self.spec.provider = provider;
        }

        if let Ok(val) = std::env::var("AEGIS_AUTH_DBAUTH_CREDENTIALS") {
            match val.parse::<Credentials>() {
                Ok(credentials) => {
                    tracing::info!("Environment override: AEGIS_AUTH_DBAUTH_CREDENTIALS={}", val);
                    self.spec
                        .db_auth
                        .get_or_insert_with(DbAuthConfig::default)
                        .fetch_config
                        .credentials = credentials;
                }
                Err(e) => {
                    tracing::warn!(
                        "Invalid value for AEGIS_AUTH_DBAUTH_CREDENTIALS: {}. Ignoring.",
                        e
                    );
                }
            }
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_version != API_VERSION {
            anyhow::bail!(
                "Invalid apiVersion: '{}'. Must be '{}'",
                self.api_version,
                API_VERSION
            );
        }

        if self.kind != KIND {
            anyhow::bail!("Invalid kind: '{}'. Must be '{}'", self.kind, KIND);
        }

        if self.metadata.name.is_empty() {
            anyhow::bail!("metadata.name cannot be empty");
        }

        let provider = self.spec.provider_type()?;

        if self.spec.db_auth.is_some() && provider != ProviderType::DbAuth {
            anyhow::bail!(
                "spec.dbAuth is only valid with provider 'dbAuth', found '{}'",
                provider
            );
        }

        if let Some(db_auth) = &self.spec.db_auth {
            if db_auth.api_url.is_empty() {
                anyhow::bail!("spec.dbAuth.apiUrl cannot be empty");
            }
        }

        Ok(())
    }
}

fn default_db_auth_url() -> String {
    "/.redwood/functions/auth".to_string()
}
