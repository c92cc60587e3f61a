//! Access to the employee service: the record type, the repository trait and
//! its HTTP and in-memory backends, and the manager that runs requests off the
//! event loop.

pub mod http;
pub mod manager;
pub mod memory;
pub mod model;
pub mod repository;

use crate::config::model::{AppConfig, Backend};
use crate::store::repository::EmployeeRepository;
use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;

/// Build the repository selected by `[api] backend`.
pub fn open_repository(config: &AppConfig) -> Result<Arc<dyn EmployeeRepository>> {
    match config.api.backend {
        Backend::Http => {
            let repo = http::HttpEmployeeRepository::new(
                &config.api.base_url,
                Duration::from_secs(config.api.timeout_secs),
            )
            .with_context(|| format!("Failed to build HTTP client for {}", config.api.base_url))?;
            tracing::info!(base_url = %config.api.base_url, "using HTTP employee backend");
            Ok(Arc::new(repo))
        }
        Backend::Memory => {
            tracing::info!(records = config.seed.len(), "using in-memory employee backend");
            Ok(Arc::new(memory::MemoryEmployeeRepository::new(config.seed.clone())))
        }
    }
}
