pub mod aggregator;
pub mod ranking;

pub use crate::domain::model::{Employee, EmployeeCreateRequest};
pub use crate::domain::ports::{ConfigProvider, EmployeeSource};
pub use crate::utils::error::Result;
