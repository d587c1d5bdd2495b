use crate::core::ranking::{highest_salary, top_earning_names, TOP_EARNERS_LIMIT};
use crate::domain::model::{Employee, EmployeeCreateRequest};
use crate::domain::ports::EmployeeSource;
use crate::utils::error::{FacadeError, Result};
use crate::utils::validation::Validate;

/// Stateless facade over the downstream employee service.
///
/// Every call re-fetches from the source; nothing is cached between calls, so
/// a single instance can be shared across tasks without locking.
pub struct EmployeeAggregator<S: EmployeeSource> {
    source: S,
}

impl<S: EmployeeSource> EmployeeAggregator<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub async fn list_all(&self) -> Result<Vec<Employee>> {
        tracing::info!("Fetching all employees from downstream API");
        match self.source.fetch_all().await? {
            Some(employees) => {
                tracing::info!("Successfully fetched {} employees", employees.len());
                Ok(employees)
            }
            None => {
                tracing::warn!("No employees found");
                Ok(Vec::new())
            }
        }
    }

    /// Matching is done downstream; results are returned as received.
    pub async fn search_by_name(&self, fragment: &str) -> Result<Vec<Employee>> {
        tracing::info!("Searching employees with name containing '{}'", fragment);
        match self.source.search_by_name(fragment).await? {
            Some(employees) => {
                tracing::info!(
                    "Found {} employees for search '{}'",
                    employees.len(),
                    fragment
                );
                Ok(employees)
            }
            None => {
                tracing::warn!("No employees found for search '{}'", fragment);
                Ok(Vec::new())
            }
        }
    }

    /// Any failure of the lookup, whatever its cause, surfaces as `NotFound`.
    pub async fn get_by_id(&self, id: &str) -> Result<Employee> {
        tracing::info!("Fetching employee by ID: {}", id);
        match self.source.fetch_by_id(id).await {
            Ok(Some(employee)) => {
                tracing::info!("Successfully fetched employee with ID {}", id);
                Ok(employee)
            }
            Ok(None) => {
                tracing::warn!("Downstream returned no employee for ID {}", id);
                Err(FacadeError::NotFound { id: id.to_string() })
            }
            Err(e) => {
                tracing::warn!("Lookup of employee {} failed: {}", id, e);
                Err(FacadeError::NotFound { id: id.to_string() })
            }
        }
    }

    pub async fn highest_salary(&self) -> Result<Option<i64>> {
        tracing::info!("Fetching highest salary of employees");
        let employees = self.list_all().await?;
        let highest = highest_salary(&employees);
        match highest {
            Some(salary) => tracing::info!("Highest salary fetched: {}", salary),
            None => tracing::warn!("No employees found to calculate highest salary"),
        }
        Ok(highest)
    }

    pub async fn top_ten_earning_names(&self) -> Result<Vec<String>> {
        tracing::info!("Fetching top {} highest-earning employee names", TOP_EARNERS_LIMIT);
        let employees = self.list_all().await?;
        let names = top_earning_names(&employees, TOP_EARNERS_LIMIT);
        tracing::info!("Top earner names fetched: {}", names.len());
        Ok(names)
    }

    /// Validates locally before anything is sent downstream.
    pub async fn create(&self, request: &EmployeeCreateRequest) -> Result<Employee> {
        request.validate()?;

        tracing::info!("Creating new employee with name '{}'", request.name);
        match self.source.create(request).await? {
            Some(employee) => {
                tracing::info!("Employee created successfully with ID {}", employee.id);
                Ok(employee)
            }
            None => {
                tracing::error!("Failed to create employee with name '{}'", request.name);
                Err(FacadeError::EmptyResult {
                    operation: "create".to_string(),
                })
            }
        }
    }

    pub async fn delete_by_id(&self, id: &str) -> Result<()> {
        tracing::info!("Deleting employee by ID: {}", id);
        self.source.delete_by_id(id).await?;
        tracing::info!("Delete request for employee {} completed", id);
        Ok(())
    }
}
