//! Metric extraction policies for yearly aggregation.
//!
//! A strategy decides which number a record contributes to its year bucket,
//! so money and trip-count reports share one traversal and one aggregator.

use std::fmt;

use crate::models::{BusinessTripRecord, TripAssignment};

/// Which collaborator collection a metric is defined over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// Every assignment of every employee.
    AllEmployees,
    /// Every distinct business trip, regardless of how many employees went.
    AllBusinessTrips,
    /// The assignments of the employee with this id.
    SingleEmployee(u32),
}

/// Selects the value fed to a [`YearlyAggregator`](super::YearlyAggregator).
///
/// # Examples
///
/// ```
/// use trip_reports::aggregation::ExtractionStrategy;
/// use trip_reports::models::{BusinessTripRecord, TripAssignment};
/// use chrono::NaiveDate;
///
/// let trip = BusinessTripRecord {
///     id: 1,
///     destination: "Riga".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2022, 3, 5).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2022, 3, 10).unwrap(),
/// };
/// let assignment = TripAssignment { money_spent: 15, trip: trip.clone() };
///
/// assert_eq!(ExtractionStrategy::MoneySpent.extract_from_assignment(&assignment), 15);
/// assert_eq!(ExtractionStrategy::TripCount.extract_from_assignment(&assignment), 1);
/// assert_eq!(ExtractionStrategy::MoneySpent.extract_from_business_trip(&trip), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionStrategy {
    /// Sum of money spent per assignment.
    MoneySpent,
    /// One per record.
    TripCount,
}

impl ExtractionStrategy {
    /// Value an assignment contributes to its year bucket.
    pub fn extract_from_assignment(self, assignment: &TripAssignment) -> i64 {
        match self {
            ExtractionStrategy::MoneySpent => assignment.money_spent,
            ExtractionStrategy::TripCount => 1,
        }
    }

    /// Value a bare business trip contributes to its year bucket.
    ///
    /// A trip carries no spend of its own, so `MoneySpent` yields 0.
    pub fn extract_from_business_trip(self, _trip: &BusinessTripRecord) -> i64 {
        match self {
            ExtractionStrategy::MoneySpent => 0,
            ExtractionStrategy::TripCount => 1,
        }
    }

    /// The collection this metric aggregates over for company-wide reports.
    pub fn data_source(self) -> DataSource {
        match self {
            ExtractionStrategy::MoneySpent => DataSource::AllEmployees,
            ExtractionStrategy::TripCount => DataSource::AllBusinessTrips,
        }
    }
}

impl fmt::Display for ExtractionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionStrategy::MoneySpent => write!(f, "money_spent"),
            ExtractionStrategy::TripCount => write!(f, "trip_count"),
        }
    }
}
