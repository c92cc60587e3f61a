use crate::store::model::{Employee, EmployeeId};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("employee {0} not found")]
    NotFound(EmployeeId),
}

/// The three operations the employee service offers this client.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Fetch every employee in service order.
    async fn fetch_all(&self) -> Result<Vec<Employee>, RepositoryError>;

    /// Persist changes to an existing employee, identified by `employee.id`.
    /// Returns the record as stored.
    async fn update(&self, employee: &Employee) -> Result<Employee, RepositoryError>;

    async fn delete(&self, id: EmployeeId) -> Result<(), RepositoryError>;
}
