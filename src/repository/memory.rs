//! In-memory repository over a loaded dataset.

use tracing::debug;

use crate::error::{ReportError, ReportResult};
use crate::models::{BusinessTripRecord, EmployeeRecord};

use super::{BusinessTripRepository, EmployeeRepository};

/// Holds employees and business trips in memory and serves them in the
/// order they were supplied.
///
/// # Example
///
/// ```
/// use trip_reports::repository::{EmployeeRepository, InMemoryRepository};
/// use trip_reports::models::EmployeeRecord;
///
/// let repo = InMemoryRepository::new(
///     vec![EmployeeRecord { id: 1, name: "A".to_string(), assignments: vec![] }],
///     vec![],
/// );
/// assert_eq!(repo.fetch_employee_with_trips(1).unwrap().name, "A");
/// assert!(repo.fetch_employee_with_trips(2).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    employees: Vec<EmployeeRecord>,
    business_trips: Vec<BusinessTripRecord>,
}

impl InMemoryRepository {
    /// Creates a repository from already-joined records.
    pub fn new(employees: Vec<EmployeeRecord>, business_trips: Vec<BusinessTripRecord>) -> Self {
        Self {
            employees,
            business_trips,
        }
    }

    /// Number of employees held.
    pub fn employee_count(&self) -> usize {
        self.employees.len()
    }

    /// Number of distinct business trips held.
    pub fn business_trip_count(&self) -> usize {
        self.business_trips.len()
    }
}

impl EmployeeRepository for InMemoryRepository {
    fn fetch_all_employees_with_trips(&self) -> ReportResult<Vec<EmployeeRecord>> {
        debug!(count = self.employees.len(), "Fetching all employees");
        Ok(self.employees.clone())
    }

    fn fetch_employee_with_trips(&self, id: u32) -> ReportResult<EmployeeRecord> {
        self.employees
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or(ReportError::EmployeeNotFound { id })
    }
}

impl BusinessTripRepository for InMemoryRepository {
    fn fetch_all_business_trips(&self) -> ReportResult<Vec<BusinessTripRecord>> {
        debug!(count = self.business_trips.len(), "Fetching all business trips");
        Ok(self.business_trips.clone())
    }
}
