//! Core data models for the trip reporting engine.
//!
//! Input records come from the data-access layer already joined; output
//! structures are built fresh per report and serialized as-is.

mod business_trip;
mod employee;
mod report;

pub use business_trip::BusinessTripRecord;
pub use employee::{EmployeeRecord, TripAssignment};
pub use report::{EmployeeSummary, TRIP_DATE_FORMAT, TripLineItem, YearSeriesPoint};
