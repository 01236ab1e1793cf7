//! Employee records and their trip assignments.
//!
//! These are the flat, already-joined records the data-access layer hands
//! to the reporting service: every assignment embeds the full trip it
//! refers to.

use serde::{Deserialize, Serialize};

use super::BusinessTripRecord;

/// One employee's participation in one business trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripAssignment {
    /// Money the employee spent on the trip, in currency-agnostic units.
    pub money_spent: i64,
    /// The trip the employee was assigned to.
    pub trip: BusinessTripRecord,
}

impl TripAssignment {
    /// Returns the year bucket of the assigned trip.
    pub fn year(&self) -> i32 {
        self.trip.year()
    }
}

/// An employee together with their ordered trip assignments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Unique identifier for the employee.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Assignments in the order the data-access layer supplied them.
    #[serde(default)]
    pub assignments: Vec<TripAssignment>,
}

impl EmployeeRecord {
    /// Returns the number of trips this employee was assigned to.
    ///
    /// # Examples
    ///
    /// ```
    /// use trip_reports::models::EmployeeRecord;
    ///
    /// let employee = EmployeeRecord {
    ///     id: 1,
    ///     name: "A".to_string(),
    ///     assignments: vec![],
    /// };
    /// assert_eq!(employee.trip_count(), 0);
    /// ```
    pub fn trip_count(&self) -> usize {
        self.assignments.len()
    }
}
