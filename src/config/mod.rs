#[cfg(feature = "cli")]
pub mod cli;

use crate::domain::ports::PolicyProvider;
use crate::utils::error::{RegistryError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_positive_number, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

pub const DEFAULT_MIN_LENGTH: usize = 8;
pub const DEFAULT_SPECIAL_CHARS: &str = "!@$%&";

/// Password rules. The defaults are the registry's built-in rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfig {
    #[serde(default = "default_min_length")]
    pub min_length: usize,
    #[serde(default = "default_special_chars")]
    pub special_chars: String,
}

fn default_min_length() -> usize {
    DEFAULT_MIN_LENGTH
}

fn default_special_chars() -> String {
    DEFAULT_SPECIAL_CHARS.to_string()
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            special_chars: DEFAULT_SPECIAL_CHARS.to_string(),
        }
    }
}

impl PolicyProvider for PolicyConfig {
    fn min_length(&self) -> usize {
        self.min_length
    }

    fn special_chars(&self) -> &str {
        &self.special_chars
    }
}

impl Validate for PolicyConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number("policy.min_length", self.min_length, 1)?;
        validate_non_empty_string("policy.special_chars", &self.special_chars)?;
        Ok(())
    }
}

/// On-disk configuration file layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default)]
    pub policy: PolicyConfig,
}

impl RegistryConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RegistryError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        let config: Self =
            toml::from_str(&processed_content).map_err(|e| RegistryError::ConfigParseError {
                message: format!("TOML parsing error: {}", e),
            })?;
        config.validate()?;

        tracing::debug!(
            "Loaded policy: min_length={}, special_chars={}",
            config.policy.min_length,
            config.policy.special_chars
        );
        Ok(config)
    }

    /// 替換環境變數 (例如 ${PWREG_MIN_LENGTH})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RegistryError::ConfigParseError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for RegistryConfig {
    fn validate(&self) -> Result<()> {
        self.policy.validate()
    }
}
