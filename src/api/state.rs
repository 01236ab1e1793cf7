//! Application state for the trip reports API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::repository::InMemoryRepository;
use crate::service::ReportingService;

/// Shared application state.
///
/// Holds the reporting service. The service itself is cheap to clone and
/// keeps no state between reports.
#[derive(Clone)]
pub struct AppState {
    service: ReportingService,
}

impl AppState {
    /// Creates a new application state around the given service.
    pub fn new(service: ReportingService) -> Self {
        Self { service }
    }

    /// Creates a state serving reports from an in-memory dataset.
    pub fn from_repository(repository: InMemoryRepository) -> Self {
        let repository = Arc::new(repository);
        Self::new(ReportingService::new(repository.clone(), repository))
    }

    /// Returns the reporting service.
    pub fn service(&self) -> &ReportingService {
        &self.service
    }
}
