use crate::config::DEFAULT_BIND_ADDRESS;
use crate::core::ConfigProvider;
use crate::utils::error::{FacadeError, Result};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_socket_addr, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub downstream: DownstreamConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    DEFAULT_BIND_ADDRESS.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownstreamConfig {
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub format: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        let config: Self = toml::from_str(&processed_content)
            .map_err(|e| FacadeError::config(format!("TOML parsing error: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// 替換環境變數 (例如 ${EMPLOYEE_API_URL})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| FacadeError::config(format!("Invalid substitution pattern: {}", e)))?;

        // unknown variables are left untouched
        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn log_format(&self) -> Result<Option<LogFormat>> {
        match self.logging.as_ref().and_then(|l| l.format.as_deref()) {
            Some(raw) => raw
                .parse::<LogFormat>()
                .map(Some)
                .map_err(|reason| FacadeError::validation("logging.format", reason)),
            None => Ok(None),
        }
    }
}

impl ConfigProvider for TomlConfig {
    fn downstream_base_url(&self) -> &str {
        &self.downstream.base_url
    }

    fn bind_address(&self) -> &str {
        &self.server.bind
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("downstream.base_url", &self.downstream.base_url)?;
        validate_socket_addr("server.bind", &self.server.bind)?;
        self.log_format()?;
        Ok(())
    }
}
