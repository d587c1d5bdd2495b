pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::HttpEmployeeSource;
pub use api::build_router;
pub use config::{ServiceSettings, TomlConfig};
pub use core::aggregator::EmployeeAggregator;
pub use domain::model::{Employee, EmployeeCreateRequest};
pub use utils::error::{FacadeError, Result};
