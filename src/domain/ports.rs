use crate::domain::model::{Employee, EmployeeCreateRequest};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Downstream system of record for employee data.
///
/// Every method maps to exactly one outbound call. `Ok(None)` means the call
/// succeeded but the payload (or its `data` field) was absent; interpreting
/// that is left to the caller.
#[async_trait]
pub trait EmployeeSource: Send + Sync {
    async fn fetch_all(&self) -> Result<Option<Vec<Employee>>>;
    async fn search_by_name(&self, fragment: &str) -> Result<Option<Vec<Employee>>>;
    async fn fetch_by_id(&self, id: &str) -> Result<Option<Employee>>;
    async fn create(&self, request: &EmployeeCreateRequest) -> Result<Option<Employee>>;
    async fn delete_by_id(&self, id: &str) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn downstream_base_url(&self) -> &str;
    fn bind_address(&self) -> &str;
}
