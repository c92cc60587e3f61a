//! In-process employee backend used by the `memory` config backend and tests.

use crate::store::model::{Employee, EmployeeId};
use crate::store::repository::{EmployeeRepository, RepositoryError};
use async_trait::async_trait;
use tokio::sync::RwLock;

pub struct MemoryEmployeeRepository {
    employees: RwLock<Vec<Employee>>,
}

impl MemoryEmployeeRepository {
    pub fn new(employees: Vec<Employee>) -> Self {
        Self {
            employees: RwLock::new(employees),
        }
    }
}

#[async_trait]
impl EmployeeRepository for MemoryEmployeeRepository {
    async fn fetch_all(&self) -> Result<Vec<Employee>, RepositoryError> {
        Ok(self.employees.read().await.clone())
    }

    async fn update(&self, employee: &Employee) -> Result<Employee, RepositoryError> {
        let mut employees = self.employees.write().await;
        let slot = employees
            .iter_mut()
            .find(|e| e.id == employee.id)
            .ok_or(RepositoryError::NotFound(employee.id))?;
        *slot = employee.clone();
        Ok(slot.clone())
    }

    async fn delete(&self, id: EmployeeId) -> Result<(), RepositoryError> {
        let mut employees = self.employees.write().await;
        let before = employees.len();
        employees.retain(|e| e.id != id);
        if employees.len() == before {
            return Err(RepositoryError::NotFound(id));
        }
        Ok(())
    }
}
