//! Runs repository requests in background tasks.
//!
//! Each request gets its own task; the outcome comes back to the main loop as
//! an [`AppEvent`], so the UI never blocks on the network.

use crate::app::event::AppEvent;
use crate::store::model::{Employee, EmployeeId};
use crate::store::repository::EmployeeRepository;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

pub struct StoreManager {
    repo: Arc<dyn EmployeeRepository>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl StoreManager {
    pub fn new(repo: Arc<dyn EmployeeRepository>, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self { repo, event_tx }
    }

    pub fn load_all(&self) -> JoinHandle<()> {
        let repo = Arc::clone(&self.repo);
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let event = match repo.fetch_all().await {
                Ok(employees) => {
                    info!(count = employees.len(), "employees loaded");
                    AppEvent::EmployeesLoaded(employees)
                }
                Err(e) => {
                    warn!(error = %e, "loading employees failed");
                    AppEvent::LoadFailed { error: e.to_string() }
                }
            };
            let _ = tx.send(event);
        })
    }

    pub fn update(&self, employee: Employee) -> JoinHandle<()> {
        let repo = Arc::clone(&self.repo);
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let id = employee.id;
            let result = repo.update(&employee).await.map_err(|e| {
                warn!(id, error = %e, "updating employee failed");
                e.to_string()
            });
            if result.is_ok() {
                info!(id, "employee updated");
            }
            let _ = tx.send(AppEvent::EmployeeUpdated { id, result });
        })
    }

    pub fn delete(&self, id: EmployeeId) -> JoinHandle<()> {
        let repo = Arc::clone(&self.repo);
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = repo.delete(id).await.map_err(|e| {
                warn!(id, error = %e, "deleting employee failed");
                e.to_string()
            });
            if result.is_ok() {
                info!(id, "employee deleted");
            }
            let _ = tx.send(AppEvent::EmployeeDeleted { id, result });
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryEmployeeRepository;

    fn manager() -> (StoreManager, mpsc::UnboundedReceiver<AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let repo = Arc::new(MemoryEmployeeRepository::new(vec![
            Employee::new(1, "Ada"),
            Employee::new(2, "Grace"),
        ]));
        (StoreManager::new(repo, tx), rx)
    }

    #[tokio::test]
    async fn test_load_all_posts_loaded_event() {
        let (mgr, mut rx) = manager();
        mgr.load_all().await.unwrap();
        match rx.recv().await {
            Some(AppEvent::EmployeesLoaded(list)) => assert_eq!(list.len(), 2),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_posts_stored_record() {
        let (mgr, mut rx) = manager();
        mgr.update(Employee::new(2, "Grace Hopper")).await.unwrap();
        match rx.recv().await {
            Some(AppEvent::EmployeeUpdated { id: 2, result: Ok(emp) }) => {
                assert_eq!(emp.name, "Grace Hopper")
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_delete_failure_is_reported() {
        let (mgr, mut rx) = manager();
        mgr.delete(42).await.unwrap();
        match rx.recv().await {
            Some(AppEvent::EmployeeDeleted { id: 42, result: Err(msg) }) => {
                assert!(msg.contains("42"))
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }
}
