pub mod toml_config;

#[cfg(feature = "cli")]
use crate::adapters::DEFAULT_BASE_URL;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_socket_addr, validate_url};
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::Parser;
use std::net::SocketAddr;
#[cfg(feature = "cli")]
use std::path::PathBuf;

pub use toml_config::TomlConfig;

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "employee-facade")]
#[command(about = "REST facade over the downstream employee-data service")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_BASE_URL, help = "Base address of the downstream employee API")]
    pub downstream_url: String,

    #[arg(long, default_value = DEFAULT_BIND_ADDRESS)]
    pub bind: String,

    #[arg(long, help = "TOML configuration file; its values take precedence over flags")]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "compact")]
    pub log_format: LogFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Merges the optional configuration file over the command line flags.
    pub fn resolve(&self) -> Result<ServiceSettings> {
        match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                let log_format = file.log_format()?.unwrap_or(self.log_format);
                ServiceSettings::from_provider(&file, log_format)
            }
            None => ServiceSettings::from_provider(self, self.log_format),
        }
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn downstream_base_url(&self) -> &str {
        &self.downstream_url
    }

    fn bind_address(&self) -> &str {
        &self.bind
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("downstream_url", &self.downstream_url)?;
        validate_socket_addr("bind", &self.bind)?;
        Ok(())
    }
}

/// Fully resolved, validated runtime settings.
#[derive(Debug, Clone)]
pub struct ServiceSettings {
    pub downstream_base_url: String,
    pub bind_address: SocketAddr,
    pub log_format: LogFormat,
}

impl ServiceSettings {
    pub fn from_provider<C: ConfigProvider>(provider: &C, log_format: LogFormat) -> Result<Self> {
        let base = validate_url("downstream.base_url", provider.downstream_base_url())?;
        let bind_address = validate_socket_addr("server.bind", provider.bind_address())?;
        Ok(Self {
            downstream_base_url: base.to_string(),
            bind_address,
            log_format,
        })
    }
}
