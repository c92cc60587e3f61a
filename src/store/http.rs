//! REST/JSON binding of [`EmployeeRepository`].
//!
//! Endpoints, relative to the configured base URL:
//! `GET /employees`, `PUT /employees/{id}`, `DELETE /employees/{id}`.

use crate::store::model::{Employee, EmployeeId};
use crate::store::repository::{EmployeeRepository, RepositoryError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub struct HttpEmployeeRepository {
    http: Client,
    base_url: String,
}

impl HttpEmployeeRepository {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RepositoryError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn employee_url(&self, id: EmployeeId) -> String {
        format!("{}/employees/{}", self.base_url, id)
    }
}

#[async_trait]
impl EmployeeRepository for HttpEmployeeRepository {
    async fn fetch_all(&self) -> Result<Vec<Employee>, RepositoryError> {
        let employees = self
            .http
            .get(format!("{}/employees", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(employees)
    }

    async fn update(&self, employee: &Employee) -> Result<Employee, RepositoryError> {
        let body = self
            .http
            .put(self.employee_url(employee.id))
            .json(employee)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        // Some services answer 204 with no body.
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(employee.clone());
        }
        Ok(serde_json::from_slice(&body)?)
    }

    async fn delete(&self, id: EmployeeId) -> Result<(), RepositoryError> {
        self.http
            .delete(self.employee_url(id))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::{Path, State},
        http::StatusCode,
        routing::{get, put},
        Json, Router,
    };
    use std::sync::Arc;
    use tokio::{net::TcpListener, sync::Mutex};

    type Shared = Arc<Mutex<Vec<Employee>>>;

    async fn list(State(db): State<Shared>) -> Json<Vec<Employee>> {
        Json(db.lock().await.clone())
    }

    async fn replace(
        State(db): State<Shared>,
        Path(id): Path<EmployeeId>,
        Json(employee): Json<Employee>,
    ) -> Result<Json<Employee>, StatusCode> {
        let mut db = db.lock().await;
        let slot = db
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(StatusCode::NOT_FOUND)?;
        *slot = employee;
        Ok(Json(slot.clone()))
    }

    async fn remove(State(db): State<Shared>, Path(id): Path<EmployeeId>) -> StatusCode {
        let mut db = db.lock().await;
        let before = db.len();
        db.retain(|e| e.id != id);
        if db.len() == before {
            StatusCode::NOT_FOUND
        } else {
            StatusCode::NO_CONTENT
        }
    }

    async fn serve(seed: Vec<Employee>) -> (String, Shared) {
        let db: Shared = Arc::new(Mutex::new(seed));
        let app = Router::new()
            .route("/api/employees", get(list))
            .route("/api/employees/:id", put(replace).delete(remove))
            .with_state(db.clone());
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        (format!("http://{addr}/api/"), db)
    }

    fn repo(base_url: &str) -> HttpEmployeeRepository {
        HttpEmployeeRepository::new(base_url, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_all_preserves_order() {
        let seed = vec![
            Employee::new(2, "Grace").with_parent(1),
            Employee::new(1, "Ada").with_description("Analyst"),
        ];
        let (base, _db) = serve(seed.clone()).await;
        assert_eq!(repo(&base).fetch_all().await.unwrap(), seed);
    }

    #[tokio::test]
    async fn test_update_sends_record_and_returns_stored() {
        let (base, db) = serve(vec![Employee::new(4, "Alan")]).await;
        let edited = Employee::new(4, "Alan Turing").with_description("").with_parent(1);
        let stored = repo(&base).update(&edited).await.unwrap();
        assert_eq!(stored, edited);
        assert_eq!(db.lock().await[0], edited);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_http_error() {
        let (base, _db) = serve(Vec::new()).await;
        let err = repo(&base).update(&Employee::new(8, "Ghost")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Http(e) if e.status() == Some(reqwest::StatusCode::NOT_FOUND)));
    }

    #[tokio::test]
    async fn test_delete_accepts_empty_success() {
        let (base, db) = serve(vec![Employee::new(7, "Barbara"), Employee::new(8, "Edsger")]).await;
        repo(&base).delete(7).await.unwrap();
        assert_eq!(*db.lock().await, vec![Employee::new(8, "Edsger")]);
    }

    #[tokio::test]
    async fn test_unreachable_server_is_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let result = repo(&format!("http://{addr}")).fetch_all().await;
        assert!(matches!(result, Err(RepositoryError::Http(_))));
    }
}
