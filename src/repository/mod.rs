//! Data-access contract for the reporting service.
//!
//! The reporting service never queries storage itself. It pulls flat,
//! already-joined records through these traits, and anything behind them
//! (a database, a file, a test fake) owns its own timeouts and retries.

mod memory;

pub use memory::InMemoryRepository;

use crate::error::ReportResult;
use crate::models::{BusinessTripRecord, EmployeeRecord};

/// Source of employees with their trip assignments resolved.
pub trait EmployeeRepository: Send + Sync {
    /// Returns every employee, each with its ordered assignments.
    fn fetch_all_employees_with_trips(&self) -> ReportResult<Vec<EmployeeRecord>>;

    /// Returns one employee with its ordered assignments.
    ///
    /// Fails with [`ReportError::EmployeeNotFound`](crate::error::ReportError::EmployeeNotFound)
    /// for an unknown id.
    fn fetch_employee_with_trips(&self, id: u32) -> ReportResult<EmployeeRecord>;
}

/// Source of distinct business trips.
pub trait BusinessTripRepository: Send + Sync {
    /// Returns every business trip once, however many employees went on it.
    fn fetch_all_business_trips(&self) -> ReportResult<Vec<BusinessTripRecord>>;
}
