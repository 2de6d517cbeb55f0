use serde::{Deserialize, Serialize};
use std::path::Path;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolver::ResolverConfig;

const LOCAL_CONFIG: &str = "rootwalk.toml";
const SYSTEM_CONFIG: &str = "/etc/rootwalk/config.toml";

/// Main configuration structure for rootwalk
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub resolver: ResolverConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. rootwalk.toml in current directory
    /// 3. /etc/rootwalk/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if Path::new(LOCAL_CONFIG).exists() {
            Self::from_file(LOCAL_CONFIG)?
        } else if Path::new(SYSTEM_CONFIG).exists() {
            Self::from_file(SYSTEM_CONFIG)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(timeout) = overrides.query_timeout_ms {
            self.resolver.query_timeout_ms = timeout;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolver.root_servers.is_empty() {
            return Err(ConfigError::Validation(
                "No root servers configured".to_string(),
            ));
        }

        if self.resolver.root_servers.iter().any(|s| s.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "Root server entries cannot be blank".to_string(),
            ));
        }

        if self.resolver.query_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "query_timeout_ms cannot be 0".to_string(),
            ));
        }

        if self.resolver.max_referral_depth == 0 {
            return Err(ConfigError::Validation(
                "max_referral_depth cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub query_timeout_ms: Option<u64>,
}
